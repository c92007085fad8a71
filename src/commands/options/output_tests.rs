//! Output formatting tests for options command.

#[cfg(test)]
mod tests {
    use crate::pipeline::Pipeline;
    use crate::types::OptionsResult;
    use rstest::{fixture, rstest};

    // =========================================================================
    // Expected outputs
    // =========================================================================

    const PAIRS_TABLE: &str = "\
Options: Producer-Consumer Function Compatibility

Producers (2):
  DuckDBProducer
  IbisProducer
Consumers (1):
  AceroConsumer
Function category (1):
  functions_string";

    const PRODUCER_TABLE: &str = "\
Options: Producer Function Compatibility

Function category (0):";

    const PRODUCER_JSON: &str = r#"{
  "pipeline": "producer",
  "function_categories": []
}"#;

    // =========================================================================
    // Fixtures
    // =========================================================================

    #[fixture]
    fn pairs_result() -> OptionsResult {
        OptionsResult {
            pipeline: Pipeline::ProducerConsumer,
            producers: vec!["DuckDBProducer".to_string(), "IbisProducer".to_string()],
            consumers: vec!["AceroConsumer".to_string()],
            function_categories: vec!["functions_string".to_string()],
        }
    }

    #[fixture]
    fn producer_result() -> OptionsResult {
        OptionsResult {
            pipeline: Pipeline::Producer,
            producers: vec![],
            consumers: vec![],
            function_categories: vec![],
        }
    }

    // =========================================================================
    // Tests
    // =========================================================================

    crate::output_table_test! {
        test_name: test_to_table_pairs,
        fixture: pairs_result,
        fixture_type: OptionsResult,
        expected: PAIRS_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_producer,
        fixture: producer_result,
        fixture_type: OptionsResult,
        expected: PRODUCER_TABLE,
    }

    crate::output_table_test! {
        test_name: test_format_json_skips_role_controls,
        fixture: producer_result,
        fixture_type: OptionsResult,
        expected: PRODUCER_JSON,
        format: Json,
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: pairs_result,
        fixture_type: OptionsResult,
        contains: ["pipeline: producer-consumer", "AceroConsumer"],
    }
}
