//! Folded-stack export, one `stack weight` line per collapsed stack.

use crate::aggregator::CollapsedStack;
use crate::utils::error::OutputError;
use std::io::Write;

/// Write collapsed stacks in folded format
pub fn write_collapsed<W: Write>(stacks: &[CollapsedStack], mut writer: W) -> Result<(), OutputError> {
    for stack in stacks {
        writeln!(writer, "{}", stack.to_line())?;
    }
    writer.flush()?;
    Ok(())
}
