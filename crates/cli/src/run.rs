use std::io::{self, Write};

use anyhow::{Context, Result};
use unity_fileid_core::{fix_with, scan, FixEvent, FixReport};

use crate::config::RunConfig;
use crate::prompt;

#[derive(Debug)]
pub enum Outcome {
    Clean,
    Declined,
    Fixed(FixReport),
}

pub fn run(config: &RunConfig) -> Result<Outcome> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    run_with(config, &mut output, |out| {
        if config.assume_yes {
            tracing::info!("fix confirmed by --yes");
            Ok(true)
        } else {
            prompt::confirm(&mut input, out)
        }
    })
}

fn run_with<W, C>(config: &RunConfig, out: &mut W, confirm: C) -> Result<Outcome>
where
    W: Write,
    C: FnOnce(&mut W) -> Result<bool>,
{
    let path = &config.path;
    let report = scan(path).with_context(|| format!("failed to scan {}", path.display()))?;
    write!(out, "{report}")?;
    if !report.has_duplicates() {
        return Ok(Outcome::Clean);
    }
    writeln!(out)?;
    if !confirm(&mut *out)? {
        tracing::debug!(path = %path.display(), "fix declined");
        return Ok(Outcome::Declined);
    }

    let mut written: io::Result<()> = Ok(());
    let fixed = fix_with(path, &report.duplicates, |event| {
        if written.is_ok() {
            written = write_event(&mut *out, event);
        }
    })
    .with_context(|| format!("failed to fix {}", path.display()))?;
    written?;

    match fixed {
        Some(report) => Ok(Outcome::Fixed(report)),
        None => Ok(Outcome::Clean),
    }
}

fn write_event<W: Write>(out: &mut W, event: &FixEvent<'_>) -> io::Result<()> {
    match event {
        FixEvent::BackedUp { backup, .. } => {
            writeln!(out, "Backed up original file to {}", backup.display())
        }
        FixEvent::RemovedBlock(block) => writeln!(
            out,
            "Removed duplicate block fileID {} (line {}, {} lines)",
            block.file_id, block.line, block.lines
        ),
        FixEvent::SkippedToEnd { file_id } => writeln!(
            out,
            "Duplicate block fileID {file_id} ran to the end of the file"
        ),
        FixEvent::Written { path, .. } => {
            writeln!(out, "Fix complete, file written back to {}", path.display())
        }
    }
}
