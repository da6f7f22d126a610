use std::collections::HashMap;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::document::Document;
use crate::error::Result;
use crate::marker::Marker;

/// Where a duplicated fileID occurs. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub first_line: usize,
    /// Every later occurrence, ascending.
    pub repeats: Vec<usize>,
}

/// Duplicated fileIDs in the order they were first found to repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateMap {
    entries: IndexMap<String, Duplicate>,
}

impl DuplicateMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, file_id: &str, first_line: usize, line: usize) {
        self.entries
            .entry(file_id.to_string())
            .or_insert_with(|| Duplicate {
                first_line,
                repeats: Vec::new(),
            })
            .repeats
            .push(line);
    }

    /// Repeat occurrences of `file_id`, excluding the first.
    pub fn get(&self, file_id: &str) -> Option<&[usize]> {
        self.entries.get(file_id).map(|dup| dup.repeats.as_slice())
    }

    pub fn first_line(&self, file_id: &str) -> Option<usize> {
        self.entries.get(file_id).map(|dup| dup.first_line)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Duplicate)> {
        self.entries.iter().map(|(id, dup)| (id.as_str(), dup))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_repeats(&self) -> usize {
        self.entries.values().map(|dup| dup.repeats.len()).sum()
    }
}

/// Result of scanning one file.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub path: PathBuf,
    pub duplicates: DuplicateMap,
}

impl ScanReport {
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

pub fn scan_lines(document: &Document) -> DuplicateMap {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = DuplicateMap::new();
    for (idx, line) in document.lines().iter().enumerate() {
        let Some(marker) = Marker::parse(line) else {
            continue;
        };
        let line_no = idx + 1;
        match first_seen.get(marker.file_id) {
            Some(&first_line) => {
                tracing::debug!(
                    file_id = marker.file_id,
                    first_line,
                    line = line_no,
                    "duplicate fileID"
                );
                duplicates.record(marker.file_id, first_line, line_no);
            }
            None => {
                first_seen.insert(marker.file_id, line_no);
            }
        }
    }
    duplicates
}

pub fn scan<P: AsRef<Path>>(path: P) -> Result<ScanReport> {
    let path = path.as_ref();
    let document = Document::read(path)?;
    let duplicates = scan_lines(&document);
    tracing::debug!(
        path = %path.display(),
        lines = document.len(),
        duplicated = duplicates.len(),
        "scan finished"
    );
    Ok(ScanReport {
        path: path.to_path_buf(),
        duplicates,
    })
}
