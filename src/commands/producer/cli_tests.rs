//! CLI parsing tests for producer command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    fn test_producer_defaults() {
        let args = Args::try_parse_from(["compat_matrix", "producer"]).unwrap();
        match args.command {
            crate::commands::Command::Producer(cmd) => {
                assert!(cmd.common.input.is_none());
                assert!(cmd.common.categories.is_empty());
            }
            _ => panic!("Expected Producer command"),
        }
    }

    #[rstest]
    fn test_producer_repeated_categories() {
        let args = Args::try_parse_from([
            "compat_matrix",
            "producer",
            "-c",
            "functions_string",
            "--category",
            "functions_arithmetic",
        ])
        .unwrap();
        match args.command {
            crate::commands::Command::Producer(cmd) => {
                assert_eq!(
                    cmd.common.categories,
                    vec!["functions_string", "functions_arithmetic"]
                );
            }
            _ => panic!("Expected Producer command"),
        }
    }

    #[rstest]
    fn test_producer_with_input() {
        let args =
            Args::try_parse_from(["compat_matrix", "producer", "--input", "results.csv"]).unwrap();
        match args.command {
            crate::commands::Command::Producer(cmd) => {
                assert_eq!(cmd.common.input, Some(PathBuf::from("results.csv")));
            }
            _ => panic!("Expected Producer command"),
        }
    }

    crate::cli_error_test! {
        command: "producer",
        test_name: test_producer_rejects_role_flags,
        args: ["--producer", "IbisProducer"],
    }

    crate::cli_error_test! {
        command: "producer",
        test_name: test_producer_category_requires_value,
        args: ["--category"],
    }
}
