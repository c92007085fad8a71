//! CLI parsing tests for explore command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::output::OutputFormat;
    use crate::pipeline::Pipeline;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_defaults_test! {
        command: "explore",
        variant: Explore,
        required_args: [],
        defaults: {
            pipeline: Pipeline::ProducerConsumer,
            input: None,
            format: OutputFormat::Table,
        },
    }

    crate::cli_option_test! {
        command: "explore",
        variant: Explore,
        test_name: test_explore_producer_pipeline,
        args: ["--pipeline", "producer"],
        field: pipeline,
        expected: Pipeline::Producer,
    }

    #[rstest]
    fn test_explore_takes_global_format() {
        let args = Args::try_parse_from(["compat_matrix", "explore", "-o", "json"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        match args.command {
            crate::commands::Command::Explore(cmd) => {
                assert_eq!(cmd.with_format(args.format).format, OutputFormat::Json);
            }
            _ => panic!("Expected Explore command"),
        }
    }

    crate::cli_error_test! {
        command: "explore",
        test_name: test_explore_rejects_format_value,
        args: ["--format", "html"],
    }
}
