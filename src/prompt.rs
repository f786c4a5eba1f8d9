//! Interactive fallback for arguments left off the command line.
use std::io::{self, BufRead, Write};

use crate::error::ToolError;

/// Print `prompt` to `output` and read one integer line from `input`.
///
/// Negative values are returned as-is; range checks belong to the caller.
///
/// # Errors
///
/// Returns [`ToolError::InvalidInput`] on end of input or a line that is not
/// an integer, and [`ToolError::Io`] if the terminal cannot be read or
/// written.
pub fn read_integer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<i64, ToolError> {
    let stdio = std::path::Path::new("<stdin>");
    write!(output, "{prompt}").map_err(|e| ToolError::io(stdio, e))?;
    output.flush().map_err(|e| ToolError::io(stdio, e))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| ToolError::io(stdio, e))?;
    if read == 0 {
        return Err(ToolError::invalid_input("no value entered"));
    }
    parse_integer(line.trim())
}

/// Prompt on the process terminal.
///
/// # Errors
///
/// See [`read_integer`].
pub fn ask_integer(prompt: &str) -> Result<i64, ToolError> {
    read_integer(&mut io::stdin().lock(), &mut io::stdout().lock(), prompt)
}

/// Parse a decimal integer, reporting the offending text on failure.
///
/// # Errors
///
/// Returns [`ToolError::InvalidInput`] if `text` is not an integer.
pub fn parse_integer(text: &str) -> Result<i64, ToolError> {
    text.parse::<i64>()
        .map_err(|_| ToolError::invalid_input(format!("'{text}' is not an integer")))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_integer_and_echoes_prompt() {
        let mut input = Cursor::new("7\n");
        let mut output = Vec::new();
        let n = read_integer(&mut input, &mut output, "Enter number of disks: ").unwrap();
        assert_eq!(n, 7);
        assert_eq!(String::from_utf8(output).unwrap(), "Enter number of disks: ");
    }

    #[test]
    fn accepts_surrounding_whitespace_and_negatives() {
        let mut input = Cursor::new("  -3 \r\n");
        let n = read_integer(&mut input, &mut Vec::new(), "> ").unwrap();
        assert_eq!(n, -3);
    }

    #[test]
    fn rejects_non_integer() {
        let mut input = Cursor::new("three\n");
        let err = read_integer(&mut input, &mut Vec::new(), "> ").unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput(_)));
        assert!(err.to_string().contains("'three' is not an integer"));
    }

    #[test]
    fn rejects_end_of_input() {
        let mut input = Cursor::new("");
        let err = read_integer(&mut input, &mut Vec::new(), "> ").unwrap_err();
        assert!(err.to_string().contains("no value entered"));
    }
}
