//! View command implementation.
//!
//! The view command:
//! 1. Parses the trace file
//! 2. Flattens self-recursive wrappers
//! 3. Computes totals and ratios
//! 4. Writes the tree in the requested format

use super::models::{OutputFormat, ViewArgs};
use crate::aggregator::{build_collapsed_stacks, calculate_hot_paths, calculate_tree_stats, compute, flatten};
use crate::output::{generate_text_summary, write_collapsed, write_outline, write_tree_json};
use crate::parser::parse_trace_file;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Resolve the optional trace argument to an absolute path
///
/// **Public** - returns `None` when no argument was given or the file
/// does not exist, in which case there is nothing to load.
pub fn resolve_trace_path(arg: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(path) = arg else {
        return Ok(None);
    };

    if !path.is_file() {
        warn!("Trace file not found: {}", path.display());
        return Ok(None);
    }

    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve path {}", path.display()))?;
    Ok(Some(absolute))
}

/// Validate view arguments
///
/// **Public** - can be called before execute_view for early validation
pub fn validate_args(args: &ViewArgs) -> Result<()> {
    if args.trace.as_os_str().is_empty() {
        anyhow::bail!("Trace path cannot be empty");
    }

    if args.print_summary && args.top_paths == 0 {
        anyhow::bail!("top_paths must be greater than 0");
    }

    if args.top_paths > 1000 {
        anyhow::bail!("top_paths is too large (max 1000)");
    }

    Ok(())
}

/// Execute the view command, writing to `out`
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Trace read or parse failures (the whole trace is rejected)
/// * Output write errors
pub fn execute_view<W: Write>(args: &ViewArgs, mut out: W) -> Result<()> {
    let start_time = Instant::now();

    info!("Loading trace: {}", args.trace.display());

    info!("Step 1/3: Parsing trace...");
    let parsed = parse_trace_file(&args.trace)
        .with_context(|| format!("Failed to parse trace {}", args.trace.display()))?;
    debug!(
        "Accepted {} lines, skipped {}",
        parsed.accepted_lines, parsed.skipped_lines
    );

    info!("Step 2/3: Normalizing and aggregating tree...");
    let mut root = parsed.root;
    flatten(&mut root);
    compute(&mut root);

    info!("Step 3/3: Writing {:?} output...", args.format);
    match args.format {
        OutputFormat::Outline => write_outline(&root, &args.outline, &mut out)?,
        OutputFormat::Json => write_tree_json(&root, &mut out)?,
        OutputFormat::Collapsed => write_collapsed(&build_collapsed_stacks(&root), &mut out)?,
    }

    if args.print_summary {
        let stats = calculate_tree_stats(&root);
        let stacks = build_collapsed_stacks(&root);
        let total = u64::try_from(stats.total_samples).unwrap_or(0);
        let hot_paths = calculate_hot_paths(&stacks, total, args.top_paths);

        writeln!(out)?;
        writeln!(out, "{}", generate_text_summary(&stats, &hot_paths))?;
    }

    let elapsed = start_time.elapsed();
    info!("View completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_valid() {
        let args = ViewArgs {
            trace: PathBuf::from("/tmp/trace.txt"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_path() {
        assert!(validate_args(&ViewArgs::default()).is_err());
    }

    #[test]
    fn test_validate_args_summary_without_paths() {
        let args = ViewArgs {
            trace: PathBuf::from("/tmp/trace.txt"),
            print_summary: true,
            top_paths: 0,
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_paths_too_large() {
        let args = ViewArgs {
            trace: PathBuf::from("/tmp/trace.txt"),
            top_paths: 2000,
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_resolve_missing_argument() {
        assert!(resolve_trace_path(None).unwrap().is_none());
    }

    #[test]
    fn test_resolve_nonexistent_file() {
        let path = Path::new("/definitely/not/a/trace.txt");
        assert!(resolve_trace_path(Some(path)).unwrap().is_none());
    }

    #[test]
    fn test_resolve_existing_file_is_absolute() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let resolved = resolve_trace_path(Some(file.path())).unwrap().unwrap();
        assert!(resolved.is_absolute());
    }
}
