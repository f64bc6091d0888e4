//! Build collapsed stack format from an aggregated call tree.
//!
//! Collapsed stacks are the interchange format understood by flamegraph
//! tooling. Format: "parent;child;grandchild weight"
//!
//! Example: "main;run_loop;objc_msgSend 120"
//! This means: 120 samples landed directly in objc_msgSend, reached
//! through main and run_loop.

use crate::parser::Frame;
use log::debug;
use std::borrow::Cow;
use std::collections::HashMap;

/// A single collapsed stack entry
///
/// **Public** - used by hot path metrics and the collapsed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsedStack {
    /// Stack trace as semicolon-separated string
    pub stack: String,

    /// Weight (self samples of the innermost frame)
    pub weight: u64,
}

impl CollapsedStack {
    /// Create a new collapsed stack
    pub fn new(stack: String, weight: u64) -> Self {
        Self { stack, weight }
    }

    /// Render as a folded-format line
    pub fn to_line(&self) -> String {
        format!("{} {}", self.stack, self.weight)
    }
}

/// Build collapsed stacks from a call tree
///
/// **Public** - main entry point for stack building
///
/// # Arguments
/// * `root` - Synthetic root of a parsed trace
///
/// # Returns
/// One stack per unique path whose innermost frame holds samples of its
/// own, sorted by weight (descending). Frames repeated under the same
/// parent share one path, so their weights are summed.
pub fn build_collapsed_stacks(root: &Frame) -> Vec<CollapsedStack> {
    let mut stack_map: HashMap<String, u64> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    let mut path: Vec<Cow<'_, str>> = Vec::new();

    for child in &root.children {
        collect_stacks(child, &mut path, &mut stack_map, &mut order);
    }

    // First-appearance order breaks ties so output is deterministic
    let mut stacks: Vec<CollapsedStack> = order
        .into_iter()
        .filter_map(|stack| {
            let weight = stack_map.remove(&stack)?;
            Some(CollapsedStack::new(stack, weight))
        })
        .collect();

    stacks.sort_by(|a, b| b.weight.cmp(&a.weight));

    debug!("Built {} unique collapsed stacks", stacks.len());

    stacks
}

fn collect_stacks<'a>(
    frame: &'a Frame,
    path: &mut Vec<Cow<'a, str>>,
    stack_map: &mut HashMap<String, u64>,
    order: &mut Vec<String>,
) {
    path.push(folded_label(frame));

    if frame.self_value > 0 {
        let stack = path.join(";");
        match stack_map.get_mut(&stack) {
            Some(weight) => *weight += frame.self_value as u64,
            None => {
                stack_map.insert(stack.clone(), frame.self_value as u64);
                order.push(stack);
            }
        }
    }

    for child in &frame.children {
        collect_stacks(child, path, stack_map, order);
    }

    path.pop();
}

/// Frame label with the folded-format separator replaced
fn folded_label(frame: &Frame) -> Cow<'_, str> {
    let label = frame.label();
    if label.contains(';') {
        Cow::Owned(label.replace(';', ":"))
    } else {
        Cow::Borrowed(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collapsed_stack_to_line() {
        let stack = CollapsedStack::new("main;execute;read".to_string(), 1000);
        assert_eq!(stack.to_line(), "main;execute;read 1000");
    }

    #[test]
    fn test_build_collapsed_stacks() {
        let root = Frame::root().with_child(
            Frame::new("main", 4, 1)
                .with_child(Frame::new("read", 6, 5))
                .with_child(Frame::new("idle", 6, 0))
                .with_child(Frame::new("read", 6, 2)),
        );

        let stacks = build_collapsed_stacks(&root);

        assert_eq!(
            stacks,
            vec![
                CollapsedStack::new("main;read".to_string(), 7),
                CollapsedStack::new("main".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_separator_in_frame_name() {
        let root = Frame::root().with_child(
            Frame::new("main", 4, 0).with_child(Frame::new("-[App run;loop]", 6, 4)),
        );

        let stacks = build_collapsed_stacks(&root);

        assert_eq!(
            stacks,
            vec![CollapsedStack::new("main;-[App run:loop]".to_string(), 4)]
        );
    }
}
