//! Shared test utilities for execute and integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::matrix::{normalize, SupportMatrix};
use crate::pipeline::{Pipeline, RenderContext};

/// Create a temporary file containing the given CSV report.
pub fn create_temp_csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Parse a CSV fixture, panicking on malformed input.
pub fn matrix_from(csv: &str) -> SupportMatrix {
    normalize(csv.as_bytes()).expect("Fixture CSV should normalize")
}

/// Render context for the producer/consumer fixture report.
pub fn producer_consumer_context() -> RenderContext {
    RenderContext::new(
        Pipeline::ProducerConsumer,
        matrix_from(crate::fixtures::PRODUCER_CONSUMER_CSV),
    )
}

/// Render context for the producer-only fixture report.
pub fn producer_context() -> RenderContext {
    RenderContext::new(Pipeline::Producer, matrix_from(crate::fixtures::PRODUCER_CSV))
}
