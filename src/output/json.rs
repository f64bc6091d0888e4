//! JSON export of an aggregated call tree.
//!
//! Each frame is written as `name`, `value` (self samples), `total`,
//! `ratio` (omitted when undefined) and `children`.

use crate::parser::{Frame, TreeExport};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::debug;
use std::io::Write;

/// Build the export document for a tree
pub fn to_export(root: &Frame) -> TreeExport<'_> {
    TreeExport {
        version: SCHEMA_VERSION,
        frames: &root.children,
    }
}

/// Write a tree as pretty-printed JSON
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_tree_json<W: Write>(root: &Frame, mut writer: W) -> Result<(), OutputError> {
    debug!("Exporting {} top-level frames as JSON", root.children.len());

    serde_json::to_writer_pretty(&mut writer, &to_export(root))?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

/// Serialize a tree to a JSON string
///
/// **Public** - useful for tests and in-memory use
pub fn tree_to_string(root: &Frame) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(&to_export(root))?)
}
