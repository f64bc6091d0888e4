//! Decoding of individual trace lines.
//!
//! A significant line looks like `    +   2625 main  (in app)`: a run of
//! indentation markers, a sample count, one space, then the frame text.
//! Everything else in the trace (headers, blank lines, binary image
//! tables) does not match and is ignored.

use crate::utils::config::{QUIRK_DEPTH_JUMP, SAMPLE_LINE_PATTERN};
use regex::Regex;
use std::num::ParseIntError;
use std::sync::LazyLock;

static SAMPLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SAMPLE_LINE_PATTERN).expect("sample line pattern is valid"));

/// A line that matched the sample grammar, before its count is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// Number of indentation marker characters
    pub depth: usize,

    /// Digits of the sample count
    pub count: &'a str,

    /// Remainder of the line after the count and its separating space
    pub text: &'a str,
}

impl RawLine<'_> {
    /// Parse the sample count
    pub fn parse_count(&self) -> Result<i64, ParseIntError> {
        self.count.parse::<i64>()
    }

    /// Annotation lines carry text starting with a space and hold no frame
    pub fn is_continuation(&self) -> bool {
        self.text.starts_with(' ')
    }
}

/// Match a line against the sample grammar
///
/// Returns `None` for lines that are not sample lines.
pub fn decode_line(line: &str) -> Option<RawLine<'_>> {
    let captures = SAMPLE_LINE.captures(line)?;
    let markers = captures.get(1)?;
    let count = captures.get(2)?;
    let text = captures.get(3)?;

    Some(RawLine {
        depth: markers.as_str().len(),
        count: count.as_str(),
        text: text.as_str(),
    })
}

/// Correct a raw depth for the double-width indentation quirk
///
/// When a line is indented exactly four markers deeper than the previous
/// accepted line, the format meant a single nesting step of two.
pub fn correct_depth(previous_depth: usize, raw_depth: usize) -> usize {
    if previous_depth > 0 && raw_depth == previous_depth + QUIRK_DEPTH_JUMP {
        previous_depth + QUIRK_DEPTH_JUMP / 2
    } else {
        raw_depth
    }
}
