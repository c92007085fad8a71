use std::error::Error;

use super::OptionsCmd;
use crate::commands::Execute;
use crate::config::Config;
use crate::pipeline::RenderContext;
use crate::types::OptionsResult;

impl Execute for OptionsCmd {
    type Output = OptionsResult;

    fn execute(self, config: &Config) -> Result<Self::Output, Box<dyn Error>> {
        let source = config.resolve_source(self.pipeline, self.input.as_deref());
        let ctx = RenderContext::load(self.pipeline, &source, config.timeout())?;
        Ok(ctx.options())
    }
}
