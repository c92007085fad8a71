//! The support matrix: loading, catalog, selection and display building.
//!
//! Data flows one way through this module:
//! - `record` parses the CSV report into a [`SupportMatrix`]
//! - `catalog` maps backend names to category tags
//! - `select` turns user choices into backend names and function categories
//! - `build` filters, aggregates and produces a [`DisplayTable`]

mod build;
mod catalog;
mod record;
mod select;

pub use build::{
    build, intersect, round_percent, Coverage, DisplayTable, Grid, GridRow, Support,
    COVERAGE_LABEL, NO_DATA, SUPPORTED_GLYPH, UNSUPPORTED_GLYPH,
};
pub use catalog::{BackendCatalog, BackendCatalogEntry};
pub use record::{
    function_category, normalize, parse_support, FunctionRecord, NormalizeError, SupportMatrix,
    FULL_FUNCTION_HEADER, UNCATEGORIZED,
};
pub use select::{SelectionState, Selector, CONSUMER_ROLE, PRODUCER_ROLE};
