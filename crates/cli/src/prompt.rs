use std::io::{BufRead, Write};

use anyhow::{Context, Result};

pub const FIX_PROMPT: &str = "Fix duplicate fileIDs automatically? (y/n): ";

/// Asks once. Only a `y` answer (case and surrounding whitespace ignored)
/// confirms; empty input and EOF decline.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    writeln!(output)?;
    write!(output, "{FIX_PROMPT}")?;
    output.flush()?;
    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    Ok(is_yes(&answer))
}

pub fn is_yes(answer: &str) -> bool {
    answer.trim().to_lowercase() == "y"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn accepts_only_y() {
        assert!(is_yes("y\n"));
        assert!(is_yes("  Y \r\n"));
        assert!(!is_yes("yes\n"));
        assert!(!is_yes("n\n"));
        assert!(!is_yes("\n"));
        assert!(!is_yes(""));
    }

    #[test]
    fn confirm_writes_prompt_and_reads_answer() {
        let mut input = Cursor::new("Y\n");
        let mut output = Vec::new();
        assert!(confirm(&mut input, &mut output).unwrap());
        assert_eq!(String::from_utf8(output).unwrap(), format!("\n{FIX_PROMPT}"));
    }

    #[test]
    fn eof_declines() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(!confirm(&mut input, &mut output).unwrap());
    }
}
