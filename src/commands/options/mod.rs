mod cli_tests;
mod execute;
mod output;
mod output_tests;

use clap::Args;
use std::path::PathBuf;

use crate::pipeline::Pipeline;

/// List the choices offered by each selection control
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  compat_matrix options                        # Producer/consumer controls
  compat_matrix options --pipeline producer    # Producer matrix controls
  compat_matrix options -o json                # Machine-readable")]
pub struct OptionsCmd {
    /// Which matrix to describe
    #[arg(long, value_enum, default_value_t = Pipeline::ProducerConsumer)]
    pub pipeline: Pipeline,

    /// Read the report from a local CSV file instead of the configured source
    #[arg(long)]
    pub input: Option<PathBuf>,
}
