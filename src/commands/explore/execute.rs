use std::error::Error;
use std::io;

use serde::Serialize;

use super::session::Session;
use super::ExploreCmd;
use crate::commands::Execute;
use crate::config::Config;
use crate::matrix::SelectionState;
use crate::pipeline::Pipeline;

/// What an explore session did before it ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExploreSummary {
    pub pipeline: Pipeline,
    pub renders: usize,
    pub failed_renders: usize,
    pub selection: SelectionState,
}

impl Execute for ExploreCmd {
    type Output = ExploreSummary;

    fn execute(self, config: &Config) -> Result<Self::Output, Box<dyn Error>> {
        let source = config.resolve_source(self.pipeline, self.input.as_deref());
        let session = Session::new(self.pipeline, source, config.timeout(), self.format);

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        session.run(stdin.lock(), &mut stdout)
    }
}
