//! Shared result types for command output.

mod results;

pub use results::{MatrixResult, OptionsResult};
