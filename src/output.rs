//! Output formatting for command results.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::matrix::{DisplayTable, Grid, COVERAGE_LABEL, NO_DATA};
use crate::types::MatrixResult;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

/// Header of the first grid column
const FUNCTION_HEADER: &str = "function";

/// Lay out rows of cells as aligned columns separated by ` | `.
///
/// The first row is the header and is followed by a dashed separator line.
/// Widths are terminal display columns (🚫 takes two), and trailing padding
/// is trimmed.
pub fn format_columns(rows: &[Vec<String>]) -> Vec<String> {
    let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..column_count)
        .map(|i| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    for (idx, row) in rows.iter().enumerate() {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join(" | ");
        lines.push(line.trim_end().to_string());

        if idx == 0 {
            let separator = widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-");
            lines.push(separator);
        }
    }
    lines
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(fill))
}

fn grid_rows(grid: &Grid) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(grid.rows.len() + 2);

    let mut header = vec![FUNCTION_HEADER.to_string()];
    header.extend(grid.columns.iter().cloned());
    rows.push(header);

    let mut coverage = vec![COVERAGE_LABEL.to_string()];
    coverage.extend(grid.coverage.iter().map(|c| c.to_string()));
    rows.push(coverage);

    for row in &grid.rows {
        let mut cells = vec![row.function.clone()];
        cells.extend(row.cells.iter().map(|s| s.glyph().to_string()));
        rows.push(cells);
    }
    rows
}

impl Outputable for MatrixResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(self.pipeline.title().to_string());
        lines.push(String::new());

        match &self.table {
            DisplayTable::NoData => lines.push(NO_DATA.to_string()),
            DisplayTable::Grid(grid) => lines.extend(format_columns(&grid_rows(grid))),
        }

        lines.join("\n")
    }
}
