//! Text summary: tree statistics and a hot path table.

use crate::aggregator::{HotPath, TreeStats};

/// Create a text summary with a hot path table
pub fn generate_text_summary(stats: &TreeStats, hot_paths: &[HotPath]) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  {}", stats.summary()));
    lines.push(String::new());
    lines.push("  HOT PATHS".to_string());
    lines.push("  ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━┳━━━━━━━━━┓".to_string());
    lines.push(format!("  ┃ {:<42} ┃ {:^12} ┃ {:^7} ┃", "Stack (Hottest First)", "SAMPLES", "%"));
    lines.push("  ┣━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━╋━━━━━━━━━┫".to_string());

    for path in hot_paths {
        lines.push(format!(
            "  ┃ {:<42} ┃ {:>12} ┃ {:>6.1}% ┃",
            truncate_stack(&path.stack, 42),
            path.samples,
            path.percentage
        ));
    }

    lines.push("  ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━┻━━━━━━━━━┛".to_string());

    lines.join("\n")
}

/// Keep the innermost end of a stack that is too long for its column
fn truncate_stack(stack: &str, width: usize) -> String {
    let chars: Vec<char> = stack.chars().collect();
    if chars.len() <= width {
        return stack.to_string();
    }
    let tail: String = chars[chars.len() - (width - 3)..].iter().collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_stack() {
        assert_eq!(truncate_stack("a;b", 10), "a;b");
        assert_eq!(truncate_stack("main;run;objc_msgSend", 10), "...msgSend");
        assert_eq!(truncate_stack("main;run;objc_msgSend", 10).chars().count(), 10);
    }

    #[test]
    fn test_summary_lists_hot_paths() {
        let stats = TreeStats {
            frame_count: 2,
            leaf_count: 1,
            height: 2,
            total_samples: 10,
        };
        let hot_paths = vec![HotPath {
            stack: "main;work".to_string(),
            samples: 8,
            percentage: 80.0,
        }];

        let summary = generate_text_summary(&stats, &hot_paths);
        assert!(summary.contains("Samples: 10 | Frames: 2"));
        assert!(summary.contains("main;work"));
        assert!(summary.contains("80.0%"));
    }
}
