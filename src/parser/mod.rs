//! Trace parsing and the call tree data model.
//!
//! This module handles:
//! - Decoding sample lines (indentation, count, frame text)
//! - Rebuilding the call tree with an explicit ancestor stack
//! - Validating nesting and sample-count consistency

pub mod line;
pub mod sample_trace;
pub mod schema;

// Re-export main types
pub use line::{correct_depth, decode_line, RawLine};
pub use sample_trace::{
    parse_trace_file, parse_trace_lines, parse_trace_reader, ParsedTrace, TraceParser,
};
pub use schema::{Frame, TreeExport};
