//! Output writers for aggregated call trees.
//!
//! This module handles presenting a tree in various formats:
//! - Indented text outlines with ratio bars
//! - JSON export
//! - Folded (collapsed) stacks
//! - Text summaries

pub mod collapsed;
pub mod json;
pub mod outline;
pub mod summary;

// Re-export main functions
pub use collapsed::write_collapsed;
pub use json::{to_export, tree_to_string, write_tree_json};
pub use outline::{render_outline, write_outline, OutlineConfig};
pub use summary::generate_text_summary;
