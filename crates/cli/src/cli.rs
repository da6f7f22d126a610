use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "unity-fileid",
    version,
    about = "Detect and remove duplicate fileIDs in Unity scene files"
)]
pub struct Cli {
    /// Enable debug diagnostics on stderr.
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,
    /// Fix duplicates without asking.
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub yes: bool,
    /// Unity scene, prefab or asset file to check.
    pub path: Option<PathBuf>,
}
