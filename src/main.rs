use std::{io, process::ExitCode};

use clap::Parser;
use tally::cli::{self, Cli};

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match cli::run(cli, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
