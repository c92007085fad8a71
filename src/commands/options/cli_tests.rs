//! CLI parsing tests for options command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::pipeline::Pipeline;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_defaults_test! {
        command: "options",
        variant: Options,
        required_args: [],
        defaults: {
            pipeline: Pipeline::ProducerConsumer,
            input: None,
        },
    }

    crate::cli_option_test! {
        command: "options",
        variant: Options,
        test_name: test_options_producer_pipeline,
        args: ["--pipeline", "producer"],
        field: pipeline,
        expected: Pipeline::Producer,
    }

    crate::cli_error_test! {
        command: "options",
        test_name: test_options_unknown_pipeline_rejected,
        args: ["--pipeline", "consumer"],
    }
}
