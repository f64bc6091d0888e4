//! Inclusive totals and sibling-relative ratios.

use crate::parser::Frame;

/// Aggregate a tree in place, children before parents
///
/// **Public** - second post-processing pass
///
/// Sets every frame's `total_value` to its self value plus the totals of
/// its children. When the children's combined total is positive, each
/// child's `ratio` becomes its share of that total; otherwise the
/// children's ratios are left `None`. Never fails: totals saturate at
/// the bounds of `i64`.
pub fn compute(frame: &mut Frame) {
    let mut sum = frame.self_value;

    for child in &mut frame.children {
        compute(child);
        sum = sum.saturating_add(child.total_value);
    }

    frame.total_value = sum;

    let children_sum = frame.children_total();
    for child in &mut frame.children {
        child.ratio = if children_sum > 0 {
            Some(child.total_value as f64 / children_sum as f64)
        } else {
            None
        };
    }
}
