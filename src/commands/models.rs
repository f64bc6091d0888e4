use crate::output::OutlineConfig;
use crate::utils::config::DEFAULT_TOP_PATHS;
use clap::ValueEnum;
use std::path::PathBuf;

/// How the view command presents the tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented outline with auto-expanded hot frames
    #[default]
    Outline,
    /// JSON export of the whole tree
    Json,
    /// Folded stacks, one `stack weight` line each
    Collapsed,
}

/// Arguments for the view command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ViewArgs {
    /// Absolute path of the trace to load
    pub trace: PathBuf,

    /// Presentation format
    pub format: OutputFormat,

    /// Outline configuration (outline format only)
    pub outline: OutlineConfig,

    /// Print statistics and hot paths after the tree
    pub print_summary: bool,

    /// Number of hot paths in the summary
    pub top_paths: usize,
}

impl Default for ViewArgs {
    fn default() -> Self {
        Self {
            trace: PathBuf::new(),
            format: OutputFormat::Outline,
            outline: OutlineConfig::default(),
            print_summary: false,
            top_paths: DEFAULT_TOP_PATHS,
        }
    }
}
