//! Resolving user selections into backend names and function categories.

use serde::Serialize;
use tracing::warn;

use super::catalog::BackendCatalog;
use super::record::SupportMatrix;

/// Role substring identifying producer tags
pub const PRODUCER_ROLE: &str = "Producer";
/// Role substring identifying consumer tags
pub const CONSUMER_ROLE: &str = "Consumer";

/// Choices made on the selection controls for one render pass.
///
/// An empty list means nothing was chosen on that control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub producers: Vec<String>,
    pub consumers: Vec<String>,
    pub function_categories: Vec<String>,
}

/// Selection operations over the catalog and matrix of a single render pass.
#[derive(Debug, Clone, Copy)]
pub struct Selector<'a> {
    catalog: &'a BackendCatalog,
    matrix: &'a SupportMatrix,
}

impl<'a> Selector<'a> {
    pub fn new(catalog: &'a BackendCatalog, matrix: &'a SupportMatrix) -> Self {
        Self { catalog, matrix }
    }

    pub fn producer_options(&self) -> Vec<String> {
        self.catalog.categories_containing(PRODUCER_ROLE)
    }

    pub fn consumer_options(&self) -> Vec<String> {
        self.catalog.categories_containing(CONSUMER_ROLE)
    }

    pub fn function_category_options(&self) -> Vec<String> {
        self.matrix.function_categories()
    }

    /// Backend names for the chosen producer tags.
    ///
    /// Nothing chosen yields every backend name, not just producer-tagged ones.
    pub fn select_producers(&self, chosen: &[String]) -> Vec<String> {
        self.select_role("Producers", &self.producer_options(), chosen)
    }

    /// Backend names for the chosen consumer tags
    pub fn select_consumers(&self, chosen: &[String]) -> Vec<String> {
        self.select_role("Consumers", &self.consumer_options(), chosen)
    }

    /// Function categories to keep; nothing chosen keeps them all
    pub fn select_function_categories(&self, chosen: &[String]) -> Vec<String> {
        let options = self.function_category_options();
        if chosen.is_empty() {
            return options;
        }
        warn_unknown("Function category", &options, chosen);
        chosen.to_vec()
    }

    fn select_role(&self, control: &str, options: &[String], chosen: &[String]) -> Vec<String> {
        if chosen.is_empty() {
            return self.catalog.backend_names();
        }
        warn_unknown(control, options, chosen);
        self.catalog.categories_to_backend_names(chosen)
    }
}

fn warn_unknown(control: &str, options: &[String], chosen: &[String]) {
    for value in chosen.iter().filter(|v| !options.contains(*v)) {
        warn!(control, value = %value, "selection is not among the available options");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::record::normalize;
    use rstest::{fixture, rstest};

    #[fixture]
    fn matrix() -> SupportMatrix {
        normalize(crate::fixtures::PRODUCER_CONSUMER_CSV.as_bytes()).unwrap()
    }

    #[fixture]
    fn catalog() -> BackendCatalog {
        BackendCatalog::producer_consumer_pairs()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[rstest]
    fn test_empty_role_selection_is_all_backends(catalog: BackendCatalog, matrix: SupportMatrix) {
        let selector = Selector::new(&catalog, &matrix);
        assert_eq!(selector.select_producers(&[]), catalog.backend_names());
        assert_eq!(selector.select_consumers(&[]), catalog.backend_names());
    }

    #[rstest]
    fn test_consumer_selection(catalog: BackendCatalog, matrix: SupportMatrix) {
        let selector = Selector::new(&catalog, &matrix);
        let names = selector.select_consumers(&strings(&["AceroConsumer"]));
        assert_eq!(
            names,
            strings(&[
                "DuckDBProducer-AceroConsumer",
                "IbisProducer-AceroConsumer",
                "IsthmusProducer-AceroConsumer",
            ])
        );
    }

    #[rstest]
    fn test_role_options(catalog: BackendCatalog, matrix: SupportMatrix) {
        let selector = Selector::new(&catalog, &matrix);
        assert_eq!(
            selector.producer_options(),
            strings(&["DuckDBProducer", "IbisProducer", "IsthmusProducer"])
        );
        assert_eq!(selector.consumer_options(), strings(&["AceroConsumer", "DuckDBConsumer"]));
    }

    #[rstest]
    fn test_function_category_options_sorted(catalog: BackendCatalog, matrix: SupportMatrix) {
        let selector = Selector::new(&catalog, &matrix);
        assert_eq!(
            selector.function_category_options(),
            strings(&["functions_arithmetic", "functions_comparison", "functions_string"])
        );
    }

    #[rstest]
    fn test_empty_function_selection_is_all(catalog: BackendCatalog, matrix: SupportMatrix) {
        let selector = Selector::new(&catalog, &matrix);
        assert_eq!(
            selector.select_function_categories(&[]),
            selector.function_category_options()
        );
    }

    #[rstest]
    fn test_unknown_function_category_passes_through(catalog: BackendCatalog, matrix: SupportMatrix) {
        let selector = Selector::new(&catalog, &matrix);
        assert_eq!(
            selector.select_function_categories(&strings(&["geometry"])),
            strings(&["geometry"])
        );
    }
}
