use std::error::Error;

use super::ProducerConsumerCmd;
use crate::commands::Execute;
use crate::config::Config;
use crate::matrix::SelectionState;
use crate::pipeline::{render_pass, Pipeline};
use crate::types::MatrixResult;

impl Execute for ProducerConsumerCmd {
    type Output = MatrixResult;

    fn execute(self, config: &Config) -> Result<Self::Output, Box<dyn Error>> {
        let pipeline = Pipeline::ProducerConsumer;
        let source = config.resolve_source(pipeline, self.common.input.as_deref());
        let selection = SelectionState {
            producers: self.producers,
            consumers: self.consumers,
            function_categories: self.common.categories,
        };
        Ok(render_pass(pipeline, &source, config.timeout(), &selection)?)
    }
}
