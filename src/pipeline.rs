//! The render pass: Fetch → Normalize → Select → Build.
//!
//! A [`RenderContext`] holds everything one pass needs (catalog and parsed
//! report). It is built at the start of a pass and dropped at the end, so
//! every pass sees freshly fetched data.

use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::fetch::{FetchError, Source};
use crate::matrix::{
    build, intersect, normalize, BackendCatalog, NormalizeError, SelectionState, Selector,
    SupportMatrix,
};
use crate::types::{MatrixResult, OptionsResult};

const PRODUCER_REPORT_URL: &str = "https://raw.githubusercontent.com/richtia/substrait/streamlit_test_report/site/docs/producer_function_compatibility/producer_results.csv";
const PRODUCER_CONSUMER_REPORT_URL: &str = "https://raw.githubusercontent.com/richtia/substrait/streamlit_test_report/site/docs/producer_consumer_compatibility/consumer_results.csv";

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Which compatibility matrix to render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pipeline {
    /// Producers only, backends tagged by query style
    Producer,
    /// Producer/consumer pairs, backends tagged by role
    #[default]
    ProducerConsumer,
}

impl Pipeline {
    pub fn name(self) -> &'static str {
        match self {
            Pipeline::Producer => "producer",
            Pipeline::ProducerConsumer => "producer-consumer",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Pipeline::Producer => "Producer Function Compatibility",
            Pipeline::ProducerConsumer => "Producer-Consumer Function Compatibility",
        }
    }

    pub fn default_source(self) -> Source {
        match self {
            Pipeline::Producer => Source::url(PRODUCER_REPORT_URL),
            Pipeline::ProducerConsumer => Source::url(PRODUCER_CONSUMER_REPORT_URL),
        }
    }

    pub fn catalog(self) -> BackendCatalog {
        match self {
            Pipeline::Producer => BackendCatalog::producer_styles(),
            Pipeline::ProducerConsumer => BackendCatalog::producer_consumer_pairs(),
        }
    }

    /// Whether the pipeline exposes producer and consumer controls
    pub fn has_role_controls(self) -> bool {
        matches!(self, Pipeline::ProducerConsumer)
    }
}

/// State of one render pass
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub pipeline: Pipeline,
    pub catalog: BackendCatalog,
    pub matrix: SupportMatrix,
}

impl RenderContext {
    pub fn new(pipeline: Pipeline, matrix: SupportMatrix) -> Self {
        Self {
            pipeline,
            catalog: pipeline.catalog(),
            matrix,
        }
    }

    /// Fetch and normalize the report of `pipeline`
    pub fn load(
        pipeline: Pipeline,
        source: &Source,
        timeout: Option<Duration>,
    ) -> Result<Self, PipelineError> {
        let raw = source.load(timeout)?;
        let matrix = normalize(&raw)?;
        Ok(Self::new(pipeline, matrix))
    }

    pub fn selector(&self) -> Selector<'_> {
        Selector::new(&self.catalog, &self.matrix)
    }

    /// Backend columns visible under `selection`.
    ///
    /// The producer/consumer matrix intersects both role axes; the producer
    /// matrix shows every catalog backend.
    pub fn visible_backends(&self, selection: &SelectionState) -> Vec<String> {
        let selector = self.selector();
        match self.pipeline {
            Pipeline::Producer => self.catalog.backend_names(),
            Pipeline::ProducerConsumer => intersect(
                &selector.select_producers(&selection.producers),
                &selector.select_consumers(&selection.consumers),
            ),
        }
    }

    pub fn render(&self, selection: &SelectionState) -> MatrixResult {
        let categories = self
            .selector()
            .select_function_categories(&selection.function_categories);
        let backends = self.visible_backends(selection);
        debug!(
            pipeline = self.pipeline.name(),
            categories = categories.len(),
            backends = backends.len(),
            "rendering"
        );

        MatrixResult {
            pipeline: self.pipeline,
            selection: selection.clone(),
            table: build(&self.matrix, &categories, &backends),
        }
    }

    /// Option universes of every control this pipeline exposes
    pub fn options(&self) -> OptionsResult {
        let selector = self.selector();
        let (producers, consumers) = if self.pipeline.has_role_controls() {
            (selector.producer_options(), selector.consumer_options())
        } else {
            (Vec::new(), Vec::new())
        };

        OptionsResult {
            pipeline: self.pipeline,
            producers,
            consumers,
            function_categories: selector.function_category_options(),
        }
    }
}

/// Run a full render pass against `source`
pub fn render_pass(
    pipeline: Pipeline,
    source: &Source,
    timeout: Option<Duration>,
    selection: &SelectionState,
) -> Result<MatrixResult, PipelineError> {
    Ok(RenderContext::load(pipeline, source, timeout)?.render(selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::matrix::DisplayTable;
    use crate::test_utils::{create_temp_csv_file, producer_consumer_context, producer_context};
    use rstest::{fixture, rstest};

    #[fixture]
    fn combined() -> RenderContext {
        producer_consumer_context()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[rstest]
    fn test_empty_selection_shows_every_backend(combined: RenderContext) {
        let visible = combined.visible_backends(&SelectionState::default());
        let mut expected = combined.catalog.backend_names();
        expected.sort();
        assert_eq!(visible, expected);
    }

    #[rstest]
    fn test_role_axes_intersect(combined: RenderContext) {
        let selection = SelectionState {
            producers: strings(&["IbisProducer"]),
            consumers: strings(&["DuckDBConsumer"]),
            function_categories: vec![],
        };
        assert_eq!(
            combined.visible_backends(&selection),
            strings(&["IbisProducer-DuckDBConsumer"])
        );
    }

    #[rstest]
    fn test_disjoint_role_axes_render_no_data(combined: RenderContext) {
        let selection = SelectionState {
            producers: strings(&["NoSuchProducer"]),
            ..SelectionState::default()
        };
        assert_eq!(combined.render(&selection).table, DisplayTable::NoData);
    }

    #[rstest]
    fn test_producer_pipeline_ignores_role_selection() {
        let ctx = producer_context();
        let selection = SelectionState {
            producers: strings(&["IbisProducer"]),
            ..SelectionState::default()
        };
        assert_eq!(
            ctx.visible_backends(&selection),
            strings(&["DuckDBProducer", "IbisProducer", "IsthmusProducer"])
        );
    }

    #[rstest]
    fn test_options_hide_role_controls_for_producer_pipeline() {
        let ctx = producer_context();
        let options = ctx.options();
        assert!(options.producers.is_empty());
        assert!(options.consumers.is_empty());
        assert_eq!(options.function_categories, strings(&["functions_arithmetic", "functions_string"]));
    }

    #[rstest]
    fn test_render_pass_from_file() {
        let file = create_temp_csv_file(fixtures::PRODUCER_CONSUMER_CSV);
        let result = render_pass(
            Pipeline::ProducerConsumer,
            &Source::file(file.path()),
            None,
            &SelectionState::default(),
        )
        .unwrap();
        assert!(!result.table.is_empty());
    }

    #[rstest]
    fn test_render_pass_propagates_normalize_errors() {
        let file = create_temp_csv_file("Function,A\nx.y,true\n");
        let result = render_pass(
            Pipeline::Producer,
            &Source::file(file.path()),
            None,
            &SelectionState::default(),
        );
        assert!(matches!(result, Err(PipelineError::Normalize(_))));
    }
}
