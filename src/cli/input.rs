//! User input utilities for interactive prompts
//!
//! Thin wrappers over stdin line reads with flushed prompts, plus the
//! typed rating parse: unparseable rating input maps to an out-of-range
//! sentinel instead of an error, so the store rejects it uniformly.

use crate::constants::INVALID_RATING_SENTINEL;
use crate::{Error, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Print a colored prompt and read one trimmed line from stdin
pub fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt.cyan());
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    // EOF on stdin: nothing more will ever arrive, bail out of the loop
    if bytes == 0 {
        return Err(Error::io(
            "stdin closed".to_string(),
            io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"),
        ));
    }

    Ok(input.trim().to_string())
}

/// Prompt for a rating and parse it
///
/// Parse failures yield the invalid sentinel, which always fails the
/// store's range check, so the user sees the same invalid-rating message
/// for garbage and for out-of-range numbers.
pub fn prompt_rating(prompt: &str) -> Result<f64> {
    let input = prompt_line(prompt)?;
    Ok(parse_rating(&input))
}

/// Parse a rating string, mapping failure to the invalid sentinel
pub fn parse_rating(input: &str) -> f64 {
    input.trim().parse().unwrap_or(INVALID_RATING_SENTINEL)
}

/// Prompt for an output filename
///
/// Fails with `InvalidFilename` on empty input.
pub fn prompt_filename(prompt: &str) -> Result<String> {
    let input = prompt_line(prompt)?;
    if input.is_empty() {
        return Err(Error::invalid_filename("filename must not be empty"));
    }
    Ok(input)
}

/// Wait for the user to press Enter
pub fn wait_for_enter() -> Result<()> {
    prompt_line("Press Enter to continue")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating_valid() {
        assert_eq!(parse_rating("8.5"), 8.5);
        assert_eq!(parse_rating("0"), 0.0);
        assert_eq!(parse_rating(" 10 "), 10.0);
    }

    #[test]
    fn test_parse_rating_failure_maps_to_sentinel() {
        assert_eq!(parse_rating("abc"), INVALID_RATING_SENTINEL);
        assert_eq!(parse_rating(""), INVALID_RATING_SENTINEL);
        assert_eq!(parse_rating("8,5"), INVALID_RATING_SENTINEL);
    }

    #[test]
    fn test_sentinel_is_out_of_range() {
        use crate::app::services::catalog::validate_rating;
        assert!(validate_rating(parse_rating("not a number")).is_err());
    }
}
