//! Call tree data model and its JSON export schema.
//!
//! A parsed trace is a tree of [`Frame`]s hanging off a synthetic,
//! unnamed root. The tree is built once, normalized and aggregated in
//! place, and read-only afterwards.

use serde::Serialize;

/// A node in the reconstructed call tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Function or category label; `None` only for the synthetic root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Indentation depth of the line that opened this frame
    #[serde(skip)]
    pub depth: usize,

    /// Samples attributed directly to this frame
    #[serde(rename = "value")]
    pub self_value: i64,

    /// Self value plus the totals of all descendants
    #[serde(rename = "total")]
    pub total_value: i64,

    /// Share of the parent's children total.
    ///
    /// `None` for the root, and for children whose siblings' combined
    /// total is zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,

    /// Children in order of first appearance in the trace
    pub children: Vec<Frame>,
}

impl Frame {
    /// Create the synthetic root frame
    pub fn root() -> Self {
        Self {
            name: None,
            depth: 0,
            self_value: 0,
            total_value: 0,
            ratio: None,
            children: Vec::new(),
        }
    }

    /// Create a named frame with a raw sample count
    pub fn new(name: impl Into<String>, depth: usize, self_value: i64) -> Self {
        Self {
            name: Some(name.into()),
            depth,
            self_value,
            total_value: 0,
            ratio: None,
            children: Vec::new(),
        }
    }

    /// Append a child and return `self` (test and fixture helper)
    pub fn with_child(mut self, child: Frame) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_root(&self) -> bool {
        self.name.is_none()
    }

    /// Label used in outlines and collapsed stacks
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("root")
    }

    /// Sum of the children's inclusive totals
    pub fn children_total(&self) -> i64 {
        self.total_value.saturating_sub(self.self_value)
    }
}

/// Top-level JSON export document
#[derive(Debug, Clone, Serialize)]
pub struct TreeExport<'a> {
    /// Schema version for compatibility checking
    pub version: &'a str,

    /// Top-level frames (children of the synthetic root)
    pub frames: &'a [Frame],
}
