mod cli_tests;
mod execute;

use clap::Args;

use super::MatrixArgs;

/// Show which producers support which functions
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  compat_matrix producer                                  # Every function category
  compat_matrix producer -c functions_arithmetic          # A single category
  compat_matrix producer --input producer_results.csv     # Local report")]
pub struct ProducerCmd {
    #[command(flatten)]
    pub common: MatrixArgs,
}
