use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::{FileIdError, Result};
use crate::marker::Marker;
use crate::scanner::DuplicateMap;

pub const BACKUP_SUFFIX: &str = ".bak";

/// A repeated block dropped by the fixer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedBlock {
    pub file_id: String,
    /// 1-based line of the repeated marker in the pre-fix file.
    pub line: usize,
    /// Lines dropped, marker included.
    pub lines: usize,
}

#[derive(Debug, Clone)]
pub struct Deduplicated {
    pub document: Document,
    pub removed: Vec<RemovedBlock>,
    /// The last removed block had no following marker and ran to end of file.
    pub runs_to_end: bool,
}

#[derive(Debug)]
pub enum FixEvent<'a> {
    BackedUp { original: &'a Path, backup: &'a Path },
    RemovedBlock(&'a RemovedBlock),
    SkippedToEnd { file_id: &'a str },
    Written { path: &'a Path, lines: usize },
}

#[derive(Debug, Clone)]
pub struct FixReport {
    pub path: PathBuf,
    pub backup: PathBuf,
    pub removed: Vec<RemovedBlock>,
    pub lines_before: usize,
    pub lines_after: usize,
}

pub fn backup_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut raw: OsString = path.as_ref().as_os_str().to_os_string();
    raw.push(BACKUP_SUFFIX);
    PathBuf::from(raw)
}

/// Drops every block whose marker repeats an already seen fileID. A block
/// runs from its marker up to, not including, the next marker line.
pub fn drop_duplicates(document: &Document) -> Deduplicated {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut kept = Vec::with_capacity(document.len());
    let mut removed: Vec<RemovedBlock> = Vec::new();
    let mut skipping = false;

    for (idx, line) in document.lines().iter().enumerate() {
        if let Some(marker) = Marker::parse(line) {
            if !seen.insert(marker.file_id) {
                tracing::debug!(file_id = marker.file_id, line = idx + 1, "dropping block");
                removed.push(RemovedBlock {
                    file_id: marker.file_id.to_string(),
                    line: idx + 1,
                    lines: 1,
                });
                skipping = true;
                continue;
            }
            skipping = false;
        } else if skipping {
            if let Some(block) = removed.last_mut() {
                block.lines += 1;
            }
            continue;
        }
        kept.push(line.clone());
    }

    // Still skipping at EOF: the trailing block is dropped through the last line.
    let runs_to_end = skipping;
    Deduplicated {
        document: Document::from_lines(kept),
        removed,
        runs_to_end,
    }
}

/// Silent form of [`fix_with`].
pub fn fix<P: AsRef<Path>>(path: P, duplicates: &DuplicateMap) -> Result<Option<FixReport>> {
    fix_with(path, duplicates, |_| {})
}

/// Moves `path` to `<path>.bak`, re-scans the backup and writes the
/// de-duplicated lines back to `path`. Does nothing when `duplicates` is
/// empty. A failure after the move leaves the backup in place and `path`
/// possibly missing.
pub fn fix_with<P, F>(path: P, duplicates: &DuplicateMap, mut on_event: F) -> Result<Option<FixReport>>
where
    P: AsRef<Path>,
    F: FnMut(&FixEvent<'_>),
{
    if duplicates.is_empty() {
        return Ok(None);
    }
    let path = path.as_ref();
    let backup = backup_path(path);
    if fs::symlink_metadata(&backup).is_ok() {
        return Err(FileIdError::BackupExists(backup));
    }
    fs::rename(path, &backup).map_err(|source| FileIdError::Backup {
        from: path.to_path_buf(),
        to: backup.clone(),
        source,
    })?;
    tracing::info!(backup = %backup.display(), "original moved to backup");
    on_event(&FixEvent::BackedUp {
        original: path,
        backup: &backup,
    });

    let original = Document::read(&backup)?;
    let deduped = drop_duplicates(&original);
    for block in &deduped.removed {
        on_event(&FixEvent::RemovedBlock(block));
    }
    if deduped.runs_to_end {
        if let Some(last) = deduped.removed.last() {
            on_event(&FixEvent::SkippedToEnd {
                file_id: &last.file_id,
            });
        }
    }

    deduped.document.write(path)?;
    tracing::info!(
        path = %path.display(),
        removed = deduped.removed.len(),
        "de-duplicated file written"
    );
    on_event(&FixEvent::Written {
        path,
        lines: deduped.document.len(),
    });

    Ok(Some(FixReport {
        path: path.to_path_buf(),
        backup,
        removed: deduped.removed,
        lines_before: original.len(),
        lines_after: deduped.document.len(),
    }))
}
