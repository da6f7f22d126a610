use once_cell::sync::Lazy;
use regex::Regex;

/// Unity YAML object header, e.g. `--- !u!114 &1234567890`.
static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^--- !u!(?P<kind>\d+) &(?P<id>\d+)").expect("valid regex"));

/// Header fields captured from a marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Unity class id (the digits after `!u!`).
    pub kind: &'a str,
    /// The object's fileID.
    pub file_id: &'a str,
}

impl<'a> Marker<'a> {
    /// Matches `line` against the marker pattern. Trailing content such as
    /// Unity's ` stripped` suffix or the line terminator is ignored.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = MARKER_RE.captures(line)?;
        Some(Self {
            kind: caps.name("kind")?.as_str(),
            file_id: caps.name("id")?.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object_header() {
        let marker = Marker::parse("--- !u!114 &1234567890\n").unwrap();
        assert_eq!(marker.kind, "114");
        assert_eq!(marker.file_id, "1234567890");
    }

    #[test]
    fn ignores_stripped_suffix() {
        let marker = Marker::parse("--- !u!1001 &42 stripped\r\n").unwrap();
        assert_eq!(marker.file_id, "42");
    }

    #[test]
    fn rejects_non_markers() {
        assert!(Marker::parse("%YAML 1.1\n").is_none());
        assert!(Marker::parse("  --- !u!1 &42\n").is_none());
        assert!(Marker::parse("--- !u! &42\n").is_none());
        assert!(Marker::parse("--- !u!1 &\n").is_none());
        assert!(Marker::parse("--- !u!1&42\n").is_none());
        assert!(Marker::parse("  m_FileID: 42\n").is_none());
    }
}
