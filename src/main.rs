//! Sample Tree CLI
//!
//! Loads a sampling profiler trace and prints its call tree.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use sample_tree::commands::{execute_view, resolve_trace_path, validate_args, OutputFormat, ViewArgs};
use sample_tree::output::OutlineConfig;
use sample_tree::utils::config::DEFAULT_TOP_PATHS;
use std::path::PathBuf;

/// Sample Tree - call tree viewer for sampling profiler traces
#[derive(Parser, Debug)]
#[command(name = "sample-tree")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Trace file to load
    file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Outline)]
    format: OutputFormat,

    /// Expand every frame in the outline, not only hot ones
    #[arg(long)]
    expand_all: bool,

    /// Maximum number of outline levels to print
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print tree statistics and hot paths
    #[arg(long)]
    summary: bool,

    /// Number of hot paths in the summary
    #[arg(long, default_value_t = DEFAULT_TOP_PATHS)]
    top_paths: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let Some(trace) = resolve_trace_path(cli.file.as_deref())? else {
        log::info!("No trace loaded");
        return Ok(());
    };

    let args = ViewArgs {
        trace,
        format: cli.format,
        outline: OutlineConfig::new()
            .with_expand_all(cli.expand_all)
            .with_max_depth(cli.max_depth),
        print_summary: cli.summary,
        top_paths: cli.top_paths,
    };

    validate_args(&args)?;

    let stdout = std::io::stdout();
    execute_view(&args, stdout.lock())?;

    Ok(())
}
