//! Static catalog of backends and the category tags attached to them.

use std::collections::BTreeSet;

use serde::Serialize;

/// Producers tagged with the query styles they accept
const PRODUCER_STYLES: &[(&str, &[&str])] = &[
    ("DuckDBProducer", &["string", "sql"]),
    ("IbisProducer", &["string", "sql"]),
    ("IsthmusProducer", &["dataframe"]),
];

/// Producer/consumer pairs tagged with their two roles
const PRODUCER_CONSUMER_PAIRS: &[(&str, &[&str])] = &[
    ("DuckDBProducer-AceroConsumer", &["DuckDBProducer", "AceroConsumer"]),
    ("DuckDBProducer-DuckDBConsumer", &["DuckDBProducer", "DuckDBConsumer"]),
    ("IbisProducer-AceroConsumer", &["IbisProducer", "AceroConsumer"]),
    ("IbisProducer-DuckDBConsumer", &["IbisProducer", "DuckDBConsumer"]),
    ("IsthmusProducer-DuckDBConsumer", &["IsthmusProducer", "DuckDBConsumer"]),
    ("IsthmusProducer-AceroConsumer", &["IsthmusProducer", "AceroConsumer"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendCatalogEntry {
    pub backend_name: String,
    pub categories: Vec<String>,
}

/// Backend name to category tags, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackendCatalog {
    entries: Vec<BackendCatalogEntry>,
}

impl BackendCatalog {
    fn from_table(table: &[(&str, &[&str])]) -> Self {
        let entries = table
            .iter()
            .map(|(name, categories)| BackendCatalogEntry {
                backend_name: name.to_string(),
                categories: categories.iter().map(|c| c.to_string()).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Catalog of the producer-only matrix (style tags)
    pub fn producer_styles() -> Self {
        Self::from_table(PRODUCER_STYLES)
    }

    /// Catalog of the producer/consumer matrix (role tags)
    pub fn producer_consumer_pairs() -> Self {
        Self::from_table(PRODUCER_CONSUMER_PAIRS)
    }

    /// Every backend name in the catalog
    pub fn backend_names(&self) -> Vec<String> {
        self.categories_to_backend_names(&[])
    }

    /// Expand entries into (backend, category) pairs, keep those whose
    /// category is selected, and return the distinct backend names.
    ///
    /// An empty selection keeps every pair. Names come back in catalog order.
    pub fn categories_to_backend_names(&self, selected: &[String]) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.entries
            .iter()
            .flat_map(|entry| {
                entry
                    .categories
                    .iter()
                    .map(move |category| (&entry.backend_name, category))
            })
            .filter(|(_, category)| selected.is_empty() || selected.contains(category))
            .filter_map(|(name, _)| seen.insert(name.as_str()).then(|| name.clone()))
            .collect()
    }

    /// Distinct categories whose name contains `needle`, sorted
    pub fn categories_containing(&self, needle: &str) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|entry| entry.categories.iter())
            .filter(|category| category.contains(needle))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
