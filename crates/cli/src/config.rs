use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub path: PathBuf,
    pub assume_yes: bool,
    pub verbose: bool,
}

impl RunConfig {
    /// `None` when no target path was given.
    pub fn from_cli(cli: Cli) -> Option<Self> {
        Some(Self {
            path: cli.path?,
            assume_yes: cli.yes,
            verbose: cli.verbose,
        })
    }
}
