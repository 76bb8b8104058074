//! CLI command implementations

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

pub mod hyphenate;

pub use hyphenate::HyphenateArgs;

/// Hyphenate words read from standard input, one per line
#[derive(Debug, Parser)]
#[command(name = "hyphenate", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub args: HyphenateArgs,
}

impl Cli {
    /// Reject argument combinations clap cannot express
    ///
    /// `-n` counts up to two; a third occurrence is a usage error.
    pub fn validate(self) -> Result<Self, clap::Error> {
        if self.args.numbers > 2 {
            return Err(Cli::command().error(
                ErrorKind::TooManyValues,
                "'-n' may be given at most twice",
            ));
        }
        Ok(self)
    }

    /// Run the command line
    pub fn execute(&self) -> anyhow::Result<()> {
        self.args.execute()
    }
}
