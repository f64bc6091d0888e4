//! Tree statistics, hot paths, and the hot-child expansion policy.
//!
//! Hot paths are the stacks where the most samples land directly.
//! These are the primary targets for investigation.

use super::stack_builder::CollapsedStack;
use crate::parser::Frame;
use crate::utils::config::HOT_RATIO_THRESHOLD;
use log::debug;

/// A hot path in the trace (stack with its self samples)
#[derive(Debug, Clone, PartialEq)]
pub struct HotPath {
    /// Collapsed stack representation (e.g., "main;run_loop;objc_msgSend")
    pub stack: String,

    /// Samples attributed to the innermost frame
    pub samples: u64,

    /// Percentage of all samples
    pub percentage: f64,
}

/// Calculate hot paths from collapsed stacks
///
/// **Public** - main entry point for hot path ranking
///
/// # Arguments
/// * `stacks` - Collapsed stacks from stack_builder
/// * `total_samples` - Total samples in the trace
/// * `top_n` - Number of top paths to return (e.g., 10)
///
/// # Returns
/// Vector of hot paths, sorted by samples (descending)
pub fn calculate_hot_paths(stacks: &[CollapsedStack], total_samples: u64, top_n: usize) -> Vec<HotPath> {
    debug!("Calculating top {} hot paths from {} stacks", top_n, stacks.len());

    // Stacks are already sorted by weight from stack_builder
    stacks
        .iter()
        .take(top_n)
        .map(|stack| create_hot_path(stack, total_samples))
        .collect()
}

/// Create a HotPath from a CollapsedStack
pub fn create_hot_path(stack: &CollapsedStack, total_samples: u64) -> HotPath {
    let percentage = if total_samples > 0 {
        (stack.weight as f64 / total_samples as f64) * 100.0
    } else {
        0.0
    };

    HotPath {
        stack: stack.stack.clone(),
        samples: stack.weight,
        percentage,
    }
}

/// Shape and weight statistics of a call tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of named frames
    pub frame_count: usize,

    /// Named frames without children
    pub leaf_count: usize,

    /// Longest chain of named frames from a top-level frame down
    pub height: usize,

    /// Sum of the top-level frames' inclusive totals
    pub total_samples: i64,
}

impl TreeStats {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and the CLI summary
    pub fn summary(&self) -> String {
        format!(
            "Samples: {} | Frames: {} | Leaves: {} | Height: {}",
            self.total_samples, self.frame_count, self.leaf_count, self.height
        )
    }
}

/// Calculate statistics for an aggregated tree
///
/// Expects `compute` to have run; `total_samples` reads inclusive totals.
pub fn calculate_tree_stats(root: &Frame) -> TreeStats {
    let mut stats = TreeStats {
        total_samples: root
            .children
            .iter()
            .fold(0i64, |sum, c| sum.saturating_add(c.total_value)),
        ..TreeStats::default()
    };

    for child in &root.children {
        stats.height = stats.height.max(visit(child, &mut stats));
    }

    stats
}

/// Count frames below and including `frame`; returns its height
fn visit(frame: &Frame, stats: &mut TreeStats) -> usize {
    stats.frame_count += 1;
    if frame.children.is_empty() {
        stats.leaf_count += 1;
    }

    let mut height = 0;
    for child in &frame.children {
        height = height.max(visit(child, stats));
    }
    height + 1
}

/// Whether a frame carries more than half of its siblings' combined total
///
/// Frames with an undefined ratio are never hot.
pub fn is_hot(frame: &Frame) -> bool {
    frame.ratio.is_some_and(|ratio| ratio > HOT_RATIO_THRESHOLD)
}

/// Children to expand together with `frame`
///
/// **Public** - expansion policy for tree presentations
pub fn hot_children(frame: &Frame) -> impl Iterator<Item = &Frame> {
    frame.children.iter().filter(|child| is_hot(child))
}
