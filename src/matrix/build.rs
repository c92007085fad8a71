//! Building the display table from a filtered support matrix.
//!
//! The build is a pure function of the matrix and the resolved selections:
//! identical inputs always produce an identical table.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use super::record::SupportMatrix;

/// Label of the summary row placed above the function rows
pub const COVERAGE_LABEL: &str = "API Coverage";

/// Glyph shown for a supported function
pub const SUPPORTED_GLYPH: &str = "✔";
/// Glyph shown for an unsupported function
pub const UNSUPPORTED_GLYPH: &str = "🚫";

/// Message shown when no function survives the filters
pub const NO_DATA: &str = "No data";

/// A single support cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum Support {
    Supported,
    Unsupported,
}

impl Support {
    pub fn glyph(self) -> &'static str {
        match self {
            Support::Supported => SUPPORTED_GLYPH,
            Support::Unsupported => UNSUPPORTED_GLYPH,
        }
    }
}

impl From<bool> for Support {
    fn from(flag: bool) -> Self {
        if flag { Support::Supported } else { Support::Unsupported }
    }
}

impl From<Support> for &'static str {
    fn from(support: Support) -> Self {
        support.glyph()
    }
}

/// How many visible functions a backend supports.
///
/// Displays as `"{supported} ({percent}%)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct Coverage {
    pub supported: usize,
    pub percent: u32,
}

impl Coverage {
    pub fn new(supported: usize, total: usize) -> Self {
        Self {
            supported,
            percent: round_percent(supported, total),
        }
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.supported, self.percent)
    }
}

impl From<Coverage> for String {
    fn from(coverage: Coverage) -> Self {
        coverage.to_string()
    }
}

/// One function row of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub function: String,
    /// Aligned with [`Grid::columns`]
    pub cells: Vec<Support>,
}

/// A non-empty support grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    /// Backend names, sorted alphabetically
    pub columns: Vec<String>,
    /// Aligned with `columns`
    pub coverage: Vec<Coverage>,
    pub rows: Vec<GridRow>,
}

/// Result of a build: either a grid or the terminal "No data" state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DisplayTable {
    NoData,
    Grid(Grid),
}

impl DisplayTable {
    pub fn is_empty(&self) -> bool {
        matches!(self, DisplayTable::NoData)
    }
}

/// `round(100 * count / total)` with ties resolved to the even neighbour.
///
/// Uses integer arithmetic so ties are detected exactly. `total` must be non-zero.
pub fn round_percent(count: usize, total: usize) -> u32 {
    debug_assert!(total > 0, "percentage of an empty set");
    let scaled = 100 * count;
    let quotient = scaled / total;
    let remainder = scaled % total;
    let round_up = match (2 * remainder).cmp(&total) {
        Ordering::Greater => true,
        Ordering::Equal => quotient % 2 == 1,
        Ordering::Less => false,
    };
    (quotient + usize::from(round_up)) as u32
}

/// Names present in both lists, sorted and deduplicated
pub fn intersect(left: &[String], right: &[String]) -> Vec<String> {
    let right: BTreeSet<&String> = right.iter().collect();
    left.iter()
        .filter(|name| right.contains(name))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Filter, project and aggregate the matrix into a display table.
///
/// Rows are ordered by qualified name and kept when their category is in
/// `function_categories`. Columns are the `backend_names` the matrix carries,
/// sorted alphabetically; names the report lacks are skipped.
pub fn build(
    matrix: &SupportMatrix,
    function_categories: &[String],
    backend_names: &[String],
) -> DisplayTable {
    let mut rows: Vec<_> = matrix
        .records
        .iter()
        .filter(|r| function_categories.contains(&r.function_category))
        .collect();
    rows.sort_by(|a, b| a.full_function.cmp(&b.full_function));

    let mut visible: Vec<(String, usize)> = Vec::new();
    for name in backend_names.iter().collect::<BTreeSet<_>>() {
        match matrix.column(name) {
            Some(idx) => visible.push((name.clone(), idx)),
            None => warn!(backend = %name, "backend is not a column of the support report"),
        }
    }

    debug!(rows = rows.len(), columns = visible.len(), "building display table");

    if rows.is_empty() || visible.is_empty() {
        return DisplayTable::NoData;
    }

    let total = rows.len();
    let coverage = visible
        .iter()
        .map(|(_, idx)| {
            let supported = rows.iter().filter(|r| r.support[*idx]).count();
            Coverage::new(supported, total)
        })
        .collect();

    let grid_rows = rows
        .iter()
        .map(|r| GridRow {
            function: r.full_function.clone(),
            cells: visible.iter().map(|(_, idx)| Support::from(r.support[*idx])).collect(),
        })
        .collect();

    DisplayTable::Grid(Grid {
        columns: visible.into_iter().map(|(name, _)| name).collect(),
        coverage,
        rows: grid_rows,
    })
}
