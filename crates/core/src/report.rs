use std::fmt;

use crate::scanner::ScanReport;

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "File: {}", self.path.display())?;
        if self.duplicates.is_empty() {
            return writeln!(f, "No duplicate fileIDs detected.");
        }
        writeln!(
            f,
            "Detected {} duplicate fileID(s):",
            self.duplicates.len()
        )?;
        writeln!(f)?;
        for (file_id, dup) in self.duplicates.iter() {
            let lines = std::iter::once(dup.first_line)
                .chain(dup.repeats.iter().copied())
                .map(|line| line.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "  fileID {file_id} appears at lines: {lines}")?;
        }
        Ok(())
    }
}
