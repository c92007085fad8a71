//! Test DSL shared by the command folders.
//!
//! Each command keeps its CLI, execute and output tests as short declarations;
//! the macros below expand them into `#[rstest]` functions. Everything they
//! reference (`Args`, `rstest`, fixtures) must be in scope at the call site.

/// Check the values a subcommand gets when no optional flag is passed.
///
/// ```ignore
/// cli_defaults_test! {
///     command: "producer-consumer",
///     variant: ProducerConsumer,
///     required_args: [],
///     defaults: {
///         producers: Vec::<String>::new(),
///         consumers: Vec::<String>::new(),
///     },
/// }
/// ```
#[macro_export]
macro_rules! cli_defaults_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        required_args: [$($req_arg:literal),*],
        defaults: {
            $($def_field:ident : $def_expected:expr),* $(,)?
        } $(,)?
    ) => {
        #[rstest]
        fn test_defaults() {
            let args = Args::try_parse_from(["compat_matrix", $cmd, $($req_arg),*]).unwrap();
            let crate::commands::Command::$variant(cmd) = args.command else {
                panic!(concat!("`", $cmd, "` should parse as ", stringify!($variant)));
            };
            $(
                assert_eq!(cmd.$def_field, $def_expected,
                    concat!("unexpected default for --", stringify!($def_field)));
            )*
        }
    };
}

/// Parse one flag combination and compare a single field of the command.
///
/// ```ignore
/// cli_option_test! {
///     command: "producer-consumer",
///     variant: ProducerConsumer,
///     test_name: test_with_producer,
///     args: ["--producer", "IbisProducer"],
///     field: producers,
///     expected: vec!["IbisProducer".to_string()],
/// }
/// ```
#[macro_export]
macro_rules! cli_option_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from(["compat_matrix", $cmd, $($arg),+]).unwrap();
            let crate::commands::Command::$variant(cmd) = args.command else {
                panic!(concat!("`", $cmd, "` should parse as ", stringify!($variant)));
            };
            assert_eq!(cmd.$field, $expected, concat!("--", stringify!($field), " parsed wrong"));
        }
    };
}

/// Check that clap rejects an argument list.
///
/// ```ignore
/// cli_error_test! {
///     command: "options",
///     test_name: test_unknown_pipeline_rejected,
///     args: ["--pipeline", "nope"],
/// }
/// ```
#[macro_export]
macro_rules! cli_error_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from(["compat_matrix", $cmd, $($arg),+]);
            assert!(result.is_err(), concat!("`", $cmd, "` accepted invalid arguments"));
        }
    };
}

// =============================================================================
// Execute Test Macros
// =============================================================================

/// Generate a fixture that writes a CSV report to a temporary file.
///
/// The fixture yields the `NamedTempFile`; keep it alive for the whole test.
#[macro_export]
macro_rules! csv_input_fixture {
    (
        fixture_name: $name:ident,
        csv: $csv:expr $(,)?
    ) => {
        #[fixture]
        fn $name() -> tempfile::NamedTempFile {
            $crate::test_utils::create_temp_csv_file($csv)
        }
    };
}

/// Generate a test that executes a command against a CSV fixture.
///
/// `cmd` is a closure receiving the input path and returning the command.
#[macro_export]
macro_rules! execute_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: |$path:ident| $cmd:expr,
        assertions: |$result:ident| $assertions:block $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: tempfile::NamedTempFile) {
            use crate::commands::Execute;
            let $path = $fixture.path().to_path_buf();
            let $result = $cmd
                .execute(&crate::config::Config::default())
                .expect("Command should succeed");
            $assertions
        }
    };
}

/// Generate a test that verifies a command yields the "No data" state.
#[macro_export]
macro_rules! execute_no_data_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: |$path:ident| $cmd:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: tempfile::NamedTempFile) {
            use crate::commands::Execute;
            let $path = $fixture.path().to_path_buf();
            let result = $cmd
                .execute(&crate::config::Config::default())
                .expect("Command should succeed");
            assert!(result.table.is_empty(), "Expected the No data state");
        }
    };
}

/// Generate a test that verifies a command fails when its input is missing.
#[macro_export]
macro_rules! execute_missing_input_test {
    (
        cmd: |$path:ident| $cmd:expr $(,)?
    ) => {
        #[rstest]
        fn test_missing_input() {
            use crate::commands::Execute;
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let $path = dir.path().join("missing.csv");
            let result = $cmd.execute(&crate::config::Config::default());
            assert!(result.is_err());
        }
    };
}

// =============================================================================
// Output Test Macros
// =============================================================================

/// Compare the rendered output of a result fixture with an expected string.
///
/// Without `format` the table rendering is checked.
///
/// ```ignore
/// output_table_test! {
///     test_name: test_to_table_no_data,
///     fixture: no_data_result,
///     fixture_type: MatrixResult,
///     expected: NO_DATA_TABLE,
/// }
///
/// output_table_test! {
///     test_name: test_format_json_no_data,
///     fixture: no_data_result,
///     fixture_type: MatrixResult,
///     expected: NO_DATA_JSON,
///     format: Json,
/// }
/// ```
#[macro_export]
macro_rules! output_table_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr,
        format: $format:ident $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{OutputFormat, Outputable};
            assert_eq!($fixture.format(OutputFormat::$format), $expected);
        }
    };
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            assert_eq!($fixture.to_table(), $expected);
        }
    };
}

/// Check that the table rendering mentions every needle.
///
/// For grids built from the fixture reports, where exact layout would tie the
/// test to column widths.
#[macro_export]
macro_rules! output_table_contains_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            let table = $fixture.to_table();
            $(
                assert!(table.contains($needle), concat!("table is missing `", $needle, "`"));
            )*
        }
    };
}

/// Parse the JSON rendering and compare top-level fields.
///
/// ```ignore
/// output_json_test! {
///     test_name: test_format_json_grid,
///     fixture: math_result,
///     fixture_type: MatrixResult,
///     assertions: {
///         "pipeline": "producer-consumer",
///     },
/// }
/// ```
#[macro_export]
macro_rules! output_json_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        assertions: { $($field:literal : $expected:expr),* $(,)? } $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{OutputFormat, Outputable};
            let json: serde_json::Value = serde_json::from_str(&$fixture.format(OutputFormat::Json))
                .expect("JSON rendering should parse");
            $(
                assert_eq!(json[$field], $expected, concat!("JSON field `", $field, "`"));
            )*
        }
    };
}

/// Check that the toon rendering mentions every needle.
#[macro_export]
macro_rules! output_toon_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{OutputFormat, Outputable};
            let toon = $fixture.format(OutputFormat::Toon);
            $(
                assert!(toon.contains($needle), concat!("toon output is missing `", $needle, "`"));
            )*
        }
    };
}
