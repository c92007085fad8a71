//! Loading and normalizing the CSV support report.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Header of the qualified function name column in the raw report
pub const FULL_FUNCTION_HEADER: &str = "FullFunction";

/// Category given to names with fewer than two dot-separated segments
pub const UNCATEGORIZED: &str = "uncategorized";

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Malformed CSV: {message}")]
    Csv { message: String },

    #[error("Missing column '{name}' in CSV header")]
    MissingColumn { name: String },

    #[error("Invalid support value '{value}' for '{function}' in column '{backend}'")]
    InvalidSupportValue {
        function: String,
        backend: String,
        value: String,
    },
}

impl From<csv::Error> for NormalizeError {
    fn from(e: csv::Error) -> Self {
        NormalizeError::Csv {
            message: e.to_string(),
        }
    }
}

/// One row of the report: a qualified function and its per-backend support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    pub full_function: String,
    pub function_category: String,
    /// Aligned with [`SupportMatrix::backends`]
    pub support: Vec<bool>,
}

/// The whole report: backend columns plus one record per function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SupportMatrix {
    pub backends: Vec<String>,
    pub records: Vec<FunctionRecord>,
}

impl SupportMatrix {
    /// Position of a backend column, if the report carries it
    pub fn column(&self, backend: &str) -> Option<usize> {
        self.backends.iter().position(|b| b == backend)
    }

    /// Distinct function categories, sorted
    pub fn function_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .records
            .iter()
            .map(|r| r.function_category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

/// Second-to-last dot segment of a qualified name.
///
/// Returns `None` when the name has fewer than two segments.
pub fn function_category(full_function: &str) -> Option<&str> {
    let segments: Vec<&str> = full_function.split('.').collect();
    if segments.len() < 2 {
        return None;
    }
    Some(segments[segments.len() - 2])
}

/// Interpret a CSV cell as a support flag. Empty cells count as unsupported.
pub fn parse_support(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "0" | "" => Some(false),
        _ => None,
    }
}

/// Parse the raw report into a [`SupportMatrix`].
///
/// The `FullFunction` column is located by name; every other column is a
/// backend. Rows keep the order of the file.
pub fn normalize(raw: &[u8]) -> Result<SupportMatrix, NormalizeError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(raw);

    let headers = reader.headers()?.clone();
    let name_idx = headers
        .iter()
        .position(|h| h == FULL_FUNCTION_HEADER)
        .ok_or_else(|| NormalizeError::MissingColumn {
            name: FULL_FUNCTION_HEADER.to_string(),
        })?;

    let backend_columns: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != name_idx)
        .map(|(idx, h)| (idx, h.to_string()))
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let full_function = row.get(name_idx).unwrap_or_default().to_string();

        let function_category = match function_category(&full_function) {
            Some(category) => category.to_string(),
            None => {
                warn!(function = %full_function, "qualified name has no namespace segment");
                UNCATEGORIZED.to_string()
            }
        };

        let mut support = Vec::with_capacity(backend_columns.len());
        for (idx, backend) in &backend_columns {
            let value = row.get(*idx).unwrap_or_default();
            let flag = parse_support(value).ok_or_else(|| NormalizeError::InvalidSupportValue {
                function: full_function.clone(),
                backend: backend.clone(),
                value: value.to_string(),
            })?;
            support.push(flag);
        }

        records.push(FunctionRecord {
            full_function,
            function_category,
            support,
        });
    }

    debug!(
        functions = records.len(),
        backends = backend_columns.len(),
        "normalized support report"
    );

    Ok(SupportMatrix {
        backends: backend_columns.into_iter().map(|(_, name)| name).collect(),
        records,
    })
}
