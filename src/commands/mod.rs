//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `Execute` implementation producing an `Outputable` result
//! - CLI, execute and output tests

mod explore;
mod options;
mod producer;
mod producer_consumer;

pub use explore::ExploreCmd;
pub use options::OptionsCmd;
pub use producer::ProducerCmd;
pub use producer_consumer::ProducerConsumerCmd;

use clap::{Args, Subcommand};
use std::error::Error;
use std::path::PathBuf;

use crate::config::Config;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, config: &Config) -> Result<Self::Output, Box<dyn Error>>;
}

/// Arguments shared by the matrix commands
#[derive(Args, Debug, Clone, Default)]
pub struct MatrixArgs {
    /// Read the report from a local CSV file instead of the configured source
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Function category to show (repeatable; all categories when omitted)
    #[arg(short = 'c', long = "category")]
    pub categories: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the producer function compatibility matrix
    Producer(ProducerCmd),

    /// Show the producer/consumer function compatibility matrix
    ProducerConsumer(ProducerConsumerCmd),

    /// List the choices available for each selection control
    Options(OptionsCmd),

    /// Interactively change selections and re-render after each change
    Explore(ExploreCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, config: &Config, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Producer(cmd) => {
                let result = cmd.execute(config)?;
                Ok(result.format(format))
            }
            Command::ProducerConsumer(cmd) => {
                let result = cmd.execute(config)?;
                Ok(result.format(format))
            }
            Command::Options(cmd) => {
                let result = cmd.execute(config)?;
                Ok(result.format(format))
            }
            Command::Explore(cmd) => {
                let result = cmd.with_format(format).execute(config)?;
                Ok(result.format(format))
            }
        }
    }
}
