//! Sample Tree
//!
//! Rebuilds weighted call trees from indentation-encoded sampling
//! profiler traces (the "call graph" section of a stack-sampling report).
//!
//! The pipeline has three steps:
//! 1. [`parser`] turns trace lines into a raw [`Frame`] tree
//! 2. [`aggregator::flatten`] removes self-recursive wrapper frames
//! 3. [`aggregator::compute`] fills in inclusive totals and sibling ratios
//!
//! [`load_trace`] runs all three on a file.
//!
//! ```no_run
//! fn main() -> Result<(), sample_tree::ParseError> {
//!     let root = sample_tree::load_trace("trace.txt")?;
//!     for frame in &root.children {
//!         println!("{} {}", frame.label(), frame.total_value);
//!     }
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

pub use parser::Frame;
pub use utils::error::ParseError;

use std::path::Path;

/// Parse, flatten and aggregate a trace file
///
/// **Public** - one-call pipeline for consumers of the tree
pub fn load_trace(path: impl AsRef<Path>) -> Result<Frame, ParseError> {
    let mut root = parser::parse_trace_file(path)?.root;
    aggregator::flatten(&mut root);
    aggregator::compute(&mut root);
    Ok(root)
}
