//! Result types shared by the matrix commands.

use serde::Serialize;

use crate::matrix::{DisplayTable, SelectionState};
use crate::pipeline::Pipeline;

/// Outcome of one render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixResult {
    pub pipeline: Pipeline,
    pub selection: SelectionState,
    pub table: DisplayTable,
}

/// The choices offered by each selection control of a pipeline.
/// Role controls only exist on the producer/consumer pipeline and are skipped when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionsResult {
    pub pipeline: Pipeline,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub producers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub consumers: Vec<String>,
    pub function_categories: Vec<String>,
}
