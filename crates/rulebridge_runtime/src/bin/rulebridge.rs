//! rulebridge CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use rulebridge_foundation::Result;
use rulebridge_runtime::{Cli, RunConfig, execute, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = RunConfig::from_cli(cli)?;
    logging::init(config.log_level());
    execute(&config)?;
    Ok(())
}
