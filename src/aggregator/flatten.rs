//! Collapse spurious self-recursive wrapper frames.
//!
//! The source format (and the profiler itself) sometimes emits a frame
//! whose only child carries the same name. Such wrappers are spliced out
//! and their children re-parented one level up.

use crate::parser::Frame;
use log::debug;

/// Flatten a tree in place
///
/// **Public** - first post-processing pass
///
/// While a frame has exactly one child with the frame's own name, the
/// frame adopts that child's children. The outer frame keeps its self
/// value. Applied depth-first from the root; idempotent.
///
/// # Returns
/// Number of wrapper frames removed
pub fn flatten(frame: &mut Frame) -> usize {
    let removed = flatten_frame(frame);
    if removed > 0 {
        debug!("Collapsed {} self-recursive wrapper frames", removed);
    }
    removed
}

fn flatten_frame(frame: &mut Frame) -> usize {
    let mut removed = 0;

    while frame.children.len() == 1 && frame.children[0].name == frame.name {
        let grandchildren = std::mem::take(&mut frame.children[0].children);
        frame.children = grandchildren;
        removed += 1;
    }

    for child in &mut frame.children {
        removed += flatten_frame(child);
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collapses_chain() {
        let mut frame = Frame::new("A", 4, 5).with_child(
            Frame::new("A", 6, 0).with_child(
                Frame::new("A", 8, 1)
                    .with_child(Frame::new("B", 10, 2))
                    .with_child(Frame::new("C", 10, 3)),
            ),
        );

        assert_eq!(flatten(&mut frame), 2);
        assert_eq!(frame.self_value, 5);
        let names: Vec<&str> = frame.children.iter().map(|c| c.label()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn test_keeps_same_name_with_siblings() {
        let mut frame = Frame::new("A", 4, 0)
            .with_child(Frame::new("A", 6, 1))
            .with_child(Frame::new("B", 6, 1));
        let before = frame.clone();

        assert_eq!(flatten(&mut frame), 0);
        assert_eq!(frame, before);
    }

    #[test]
    fn test_root_is_never_collapsed_into_named_child() {
        let mut root = Frame::root().with_child(Frame::new("A", 4, 1));
        assert_eq!(flatten(&mut root), 0);
        assert_eq!(root.children.len(), 1);
    }
}
