//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors that can occur while parsing a trace
///
/// None of these are recoverable: the whole trace is rejected.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: malformed sample count '{value}': {source}")]
    MalformedCount {
        line: usize,
        value: String,
        source: ParseIntError,
    },

    #[error(
        "Line {line}: unexpected indentation depth {depth} \
         ({open} open scopes, depth implies {expected})"
    )]
    StructuralCorruption {
        line: usize,
        depth: usize,
        open: usize,
        expected: isize,
    },

    #[error(
        "Line {line}: children of '{name}' report more samples than it does \
         (self value would be {value})"
    )]
    ValueConsistency {
        line: usize,
        name: String,
        value: i64,
    },

    #[error("Line {line}: sample counts overflow the trace total")]
    CountOverflow { line: usize },
}

/// Errors that can occur while writing tree exports
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
