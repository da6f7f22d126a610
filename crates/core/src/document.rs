use std::fs;
use std::path::Path;

use crate::error::{FileIdError, Result};

/// A text file as an ordered list of lines. Every line keeps its original
/// terminator (`\n`, `\r\n`, or nothing for an unterminated last line), so
/// concatenating the lines reproduces the file byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| FileIdError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| FileIdError::Utf8 {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_text()).map_err(|source| FileIdError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lines_keep_their_terminators() {
        let doc = Document::from_text("a\r\nb\nc");
        assert_eq!(doc.lines(), &["a\r\n", "b\n", "c"]);
        assert_eq!(doc.to_text(), "a\r\nb\nc");
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(Document::from_text("").is_empty());
    }

    #[test]
    fn read_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.unity");
        fs::write(&path, [0x2du8, 0xff, 0xfe, 0x0a]).unwrap();
        let err = Document::read(&path).unwrap_err();
        assert!(matches!(err, FileIdError::Utf8 { .. }));
    }

    #[test]
    fn read_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = Document::read(dir.path().join("missing.unity")).unwrap_err();
        assert!(matches!(err, FileIdError::Read { .. }));
    }

    #[test]
    fn write_then_read_is_lossless() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scene.unity");
        let doc = Document::from_text("%YAML 1.1\r\n--- !u!1 &5\r\nGameObject:\n");
        doc.write(&path).unwrap();
        assert_eq!(Document::read(&path).unwrap(), doc);
    }
}
