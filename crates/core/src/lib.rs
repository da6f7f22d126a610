mod document;
mod error;
mod fixer;
mod marker;
mod report;
mod scanner;

pub use document::Document;
pub use error::{FileIdError, Result};
pub use fixer::{
    backup_path, drop_duplicates, fix, fix_with, Deduplicated, FixEvent, FixReport, RemovedBlock,
    BACKUP_SUFFIX,
};
pub use marker::Marker;
pub use scanner::{scan, scan_lines, Duplicate, DuplicateMap, ScanReport};
