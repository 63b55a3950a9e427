use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;

fn main() -> ExitCode {
    env_logger::init();
    let cli = cli::Cli::parse();
    match commands::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("blkscout: {err:#}");
            ExitCode::from(2)
        }
    }
}
