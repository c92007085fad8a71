//! compat_matrix library - Function compatibility matrices
//!
//! Fetches a CSV report of which producer and consumer backends support which
//! functions, filters it by user selections and renders a support grid with
//! coverage percentages.

pub mod cli;
pub mod commands;
pub mod config;
pub mod fetch;
pub mod matrix;
pub mod output;
pub mod pipeline;
pub mod types;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
