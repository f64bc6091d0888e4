//! Indented text outline of a call tree.
//!
//! Mirrors what a tree widget shows: top-level frames are expanded, and
//! below them a frame opens automatically only when it is hot (carries
//! more than half of its siblings' combined total).

use crate::aggregator::is_hot;
use crate::parser::Frame;
use crate::utils::config::DEFAULT_BAR_WIDTH;
use crate::utils::error::OutputError;
use std::io::Write;

/// Outline rendering configuration
#[derive(Debug, Clone)]
pub struct OutlineConfig {
    /// Expand every frame instead of only hot ones
    pub expand_all: bool,

    /// Maximum number of tree levels to print
    pub max_depth: Option<usize>,

    /// Width of the ratio bar in characters (0 disables the bar)
    pub bar_width: usize,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            expand_all: false,
            max_depth: None,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl OutlineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expand_all(mut self, expand_all: bool) -> Self {
        self.expand_all = expand_all;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    fn within_depth(&self, level: usize) -> bool {
        self.max_depth.map_or(true, |max| level < max)
    }
}

/// Render the outline of an aggregated tree
///
/// **Public** - main entry point for text output
pub fn render_outline(root: &Frame, config: &OutlineConfig) -> String {
    let mut lines = Vec::new();

    if config.within_depth(0) {
        for frame in &root.children {
            render_frame(frame, 0, true, config, &mut lines);
        }
    }

    lines.join("\n")
}

/// Write the outline of an aggregated tree to `writer`
pub fn write_outline<W: Write>(
    root: &Frame,
    config: &OutlineConfig,
    mut writer: W,
) -> Result<(), OutputError> {
    let outline = render_outline(root, config);
    if !outline.is_empty() {
        writeln!(writer, "{}", outline)?;
    }
    writer.flush()?;
    Ok(())
}

fn render_frame(
    frame: &Frame,
    level: usize,
    expanded: bool,
    config: &OutlineConfig,
    lines: &mut Vec<String>,
) {
    let has_children = !frame.children.is_empty();
    let open = expanded && has_children && config.within_depth(level + 1);

    let marker = match (has_children, open) {
        (false, _) => "•",
        (true, true) => "▾",
        (true, false) => "▸",
    };

    let share = match frame.ratio {
        Some(ratio) => format!("{:>5.1}%", ratio * 100.0),
        None => "     -".to_string(),
    };

    let mut line = format!(
        "{}{} {}  {} {}",
        "  ".repeat(level),
        marker,
        frame.label(),
        frame.total_value,
        share
    );

    if config.bar_width > 0 {
        line.push(' ');
        line.push_str(&ratio_bar(frame.ratio, config.bar_width));
    }

    if has_children && !open {
        line.push_str(&format!(" (+{})", frame.children.len()));
    }

    lines.push(line.trim_end().to_string());

    if open {
        for child in &frame.children {
            let expand_child = config.expand_all || is_hot(child);
            render_frame(child, level + 1, expand_child, config, lines);
        }
    }
}

/// Proportional bar for a ratio, empty when the ratio is undefined
fn ratio_bar(ratio: Option<f64>, width: usize) -> String {
    let filled = ratio
        .map(|r| (r.clamp(0.0, 1.0) * width as f64).round() as usize)
        .unwrap_or(0);
    "█".repeat(filled)
}
