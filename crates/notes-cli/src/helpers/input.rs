use std::io::{self, BufRead, IsTerminal};

use crate::constants::CONTENT_TERMINATOR;
use crate::errors::CliError;

/// Read lines until one equals the terminator or input ends.
///
/// The terminator line itself is consumed and not included.
pub fn read_until_end<R: BufRead>(reader: R) -> io::Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line == CONTENT_TERMINATOR {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines.join("\n"))
}

/// Resolve note content from `--body` or stdin, trimmed.
pub fn read_note_body(body: Option<String>, prompt: &str) -> anyhow::Result<String> {
    if let Some(value) = body {
        return Ok(value.trim().to_string());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("{} (type '{}' on a new line to finish):", prompt, CONTENT_TERMINATOR);
    }
    let content = read_until_end(stdin.lock())
        .map_err(|e| anyhow::anyhow!("Failed to read content from stdin: {}", e))?;
    Ok(content.trim().to_string())
}

/// Trim a title and reject it if empty or spread over several lines.
pub fn require_title(title: &str) -> Result<String, CliError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CliError::invalid_input("Note title cannot be empty"));
    }
    // The file format and the index are line based.
    if trimmed.contains(['\n', '\r']) {
        return Err(CliError::invalid_input(
            "Note title cannot contain line breaks",
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_stops_at_terminator() {
        let input = Cursor::new("first\nsecond\nEND\nafter\n");
        assert_eq!(read_until_end(input).unwrap(), "first\nsecond");
    }

    #[test]
    fn test_eof_without_terminator() {
        let input = Cursor::new("only line\n");
        assert_eq!(read_until_end(input).unwrap(), "only line");
    }

    #[test]
    fn test_terminator_must_match_whole_line() {
        let input = Cursor::new("THE END\n END\nEND\r\n");
        assert_eq!(read_until_end(input).unwrap(), "THE END\n END");
    }

    #[test]
    fn test_body_flag_is_trimmed() {
        let body = read_note_body(Some("  hi \n".to_string()), "Enter content").unwrap();
        assert_eq!(body, "hi");
    }

    #[test]
    fn test_require_title() {
        assert_eq!(require_title("  Plan ").unwrap(), "Plan");
        assert!(matches!(
            require_title("   "),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            require_title("a\nb"),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            require_title("a\rb"),
            Err(CliError::InvalidInput(_))
        ));
    }
}
