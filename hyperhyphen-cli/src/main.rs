//! `hyphenate`: hyphenate words from standard input

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use hyperhyphen_cli::commands::Cli;
use hyperhyphen_cli::CliError;
use std::process;

fn main() {
    let cli = match Cli::try_parse().and_then(Cli::validate) {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(err) = cli.execute() {
        eprintln!("{err:#}");
        if let Some(CliError::MissingDictionary) = err.downcast_ref::<CliError>() {
            eprintln!("{}", Cli::command().render_usage());
        }
        process::exit(1);
    }
}
