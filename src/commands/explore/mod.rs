mod cli_tests;
mod execute;
mod output;
mod session;

use clap::Args;
use std::path::PathBuf;

use crate::output::OutputFormat;
use crate::pipeline::Pipeline;

/// Change selections from stdin and re-render after every change
#[derive(Args, Debug)]
#[command(after_help = "\
Session commands (one per line):
  producers [TAG...]      Set the Producers control (no tags clears it)
  consumers [TAG...]      Set the Consumers control
  categories [NAME...]    Set the Function category control
  clear                   Clear every control
  show                    Render again with the current selection
  options                 List available choices
  quit                    End the session

Examples:
  compat_matrix explore
  compat_matrix explore --pipeline producer --input producer_results.csv")]
pub struct ExploreCmd {
    /// Which matrix to explore
    #[arg(long, value_enum, default_value_t = Pipeline::ProducerConsumer)]
    pub pipeline: Pipeline,

    /// Read the report from a local CSV file instead of the configured source
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Format of every rendered matrix; taken from the global `--format`
    #[arg(skip)]
    pub format: OutputFormat,
}

impl ExploreCmd {
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
