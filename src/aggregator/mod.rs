//! Post-processing of parsed call trees.
//!
//! This module turns a raw parsed tree into an annotated one:
//! - Flattening self-recursive wrapper frames
//! - Inclusive totals and sibling ratios
//! - Collapsed stacks and hot path analysis
//! - Tree statistics and the hot-child expansion policy

pub mod compute;
pub mod flatten;
pub mod metrics;
pub mod stack_builder;

// Re-export main types and functions
pub use compute::compute;
pub use flatten::flatten;
pub use metrics::{calculate_hot_paths, calculate_tree_stats, hot_children, is_hot, HotPath, TreeStats};
pub use stack_builder::{build_collapsed_stacks, CollapsedStack};
