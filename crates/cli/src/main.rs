mod cli;
mod config;
mod logging;
mod prompt;
mod run;

use std::process;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use crate::cli::Cli;
use crate::config::RunConfig;
use crate::run::Outcome;

fn main() -> Result<()> {
    let Some(config) = RunConfig::from_cli(Cli::parse()) else {
        println!("{}", Cli::command().render_usage());
        process::exit(1);
    };
    logging::init(config.verbose);
    if let Outcome::Fixed(report) = run::run(&config)? {
        tracing::info!(
            removed = report.removed.len(),
            lines_before = report.lines_before,
            lines_after = report.lines_after,
            backup = %report.backup.display(),
            "run finished"
        );
    }
    Ok(())
}
