mod execute;

use clap::Args;

use super::MatrixArgs;

/// Show which producer/consumer pairs support which functions
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  compat_matrix producer-consumer                                   # Every pair
  compat_matrix producer-consumer --producer IbisProducer           # Pairs with Ibis as producer
  compat_matrix producer-consumer --consumer AceroConsumer -c functions_string
  compat_matrix options --pipeline producer-consumer                # Available choices")]
pub struct ProducerConsumerCmd {
    /// Producer to include (repeatable; every pair when omitted)
    #[arg(long = "producer")]
    pub producers: Vec<String>,

    /// Consumer to include (repeatable; every pair when omitted)
    #[arg(long = "consumer")]
    pub consumers: Vec<String>,

    #[command(flatten)]
    pub common: MatrixArgs,
}
