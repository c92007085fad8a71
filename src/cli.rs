//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Command;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Function compatibility matrices for producer and consumer backends", long_about = None)]
pub struct Args {
    /// Configuration file (defaults to .compat_matrix.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Log debug details to stderr
    #[arg(short, long, default_value_t = false, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_global_defaults() {
        let args = Args::try_parse_from(["compat_matrix", "producer"]).unwrap();
        assert!(args.config.is_none());
        assert_eq!(args.format, OutputFormat::Table);
        assert!(!args.verbose);
    }

    #[rstest]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "compat_matrix",
            "options",
            "--config",
            "custom.json",
            "-o",
            "toon",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("custom.json")));
        assert_eq!(args.format, OutputFormat::Toon);
        assert!(args.verbose);
    }

    #[rstest]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["compat_matrix"]).is_err());
    }
}
