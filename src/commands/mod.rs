//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod models;
pub mod view;

// Re-export main command functions
pub use models::{OutputFormat, ViewArgs};
pub use view::{execute_view, resolve_trace_path, validate_args};
