//! Main parser for indentation-encoded sample traces.
//!
//! Turns a flat sequence of sample lines into a rooted [`Frame`] tree.
//! Each line reports the inclusive sample count of a frame; the frame's
//! depth is the length of its indentation markers.
//!
//! The tree is assembled in an index arena while lines are consumed: the
//! open ancestors live on an explicit stack of node indices, and the
//! "current" frame is an index too. Once all lines are read the arena is
//! converted into an owned [`Frame`] tree.

use super::line::{correct_depth, decode_line};
use super::schema::Frame;
use crate::utils::config::{BASE_DEPTH, DEPTH_STEP};
use crate::utils::error::ParseError;
use log::{debug, trace};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Arena index of the synthetic root
const ROOT: usize = 0;

/// Result of parsing a trace, before normalization and aggregation
#[derive(Debug, Clone)]
pub struct ParsedTrace {
    /// Synthetic root; its children are the top-level frames
    pub root: Frame,

    /// Lines that produced a frame
    pub accepted_lines: usize,

    /// Lines ignored as non-sample or continuation lines
    pub skipped_lines: usize,

    /// Lines whose depth was corrected for the double-width indentation quirk
    pub depth_corrections: usize,

    /// Highest number of simultaneously open ancestors
    pub max_stack_depth: usize,
}

/// Frame under construction
#[derive(Debug)]
struct Node {
    name: Option<String>,
    depth: usize,
    self_value: i64,
    children: Vec<usize>,
}

/// Incremental trace parser
///
/// Feed lines in order with [`TraceParser::feed_line`], then call
/// [`TraceParser::finish`]. The first error aborts the parse; the parser
/// must not be used after a failed line.
#[derive(Debug)]
pub struct TraceParser {
    nodes: Vec<Node>,
    stack: Vec<usize>,
    current: usize,
    previous_depth: usize,
    line_number: usize,
    accepted_lines: usize,
    skipped_lines: usize,
    depth_corrections: usize,
    max_stack_depth: usize,
}

impl Default for TraceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceParser {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: None,
                depth: 0,
                self_value: 0,
                children: Vec::new(),
            }],
            stack: Vec::new(),
            current: ROOT,
            previous_depth: 0,
            line_number: 0,
            accepted_lines: 0,
            skipped_lines: 0,
            depth_corrections: 0,
            max_stack_depth: 0,
        }
    }

    /// Consume the next input line
    ///
    /// # Errors
    /// * `ParseError::MalformedCount` - the count does not fit a sample counter
    /// * `ParseError::StructuralCorruption` - indentation skips nesting levels
    /// * `ParseError::ValueConsistency` - children outweigh a named parent
    /// * `ParseError::CountOverflow` - top-level counts exceed the sample counter
    pub fn feed_line(&mut self, line: &str) -> Result<(), ParseError> {
        self.line_number += 1;

        let Some(raw) = decode_line(line) else {
            self.skipped_lines += 1;
            return Ok(());
        };

        let count = raw
            .parse_count()
            .map_err(|source| ParseError::MalformedCount {
                line: self.line_number,
                value: raw.count.to_string(),
                source,
            })?;

        if raw.is_continuation() {
            trace!("Skipping continuation line {}", self.line_number);
            self.skipped_lines += 1;
            return Ok(());
        }

        let depth = correct_depth(self.previous_depth, raw.depth);
        if depth != raw.depth {
            trace!(
                "Line {}: corrected depth {} -> {}",
                self.line_number,
                raw.depth,
                depth
            );
            self.depth_corrections += 1;
        }
        self.previous_depth = depth;

        self.close_scopes(depth)?;
        self.check_structure(depth)?;

        self.stack.push(self.current);
        self.max_stack_depth = self.max_stack_depth.max(self.stack.len());

        self.debit_current(count)?;
        self.open_frame(raw.text, depth, count);

        self.accepted_lines += 1;
        Ok(())
    }

    /// Pop ancestors until the current frame is shallower than `depth`
    fn close_scopes(&mut self, depth: usize) -> Result<(), ParseError> {
        while depth <= self.nodes[self.current].depth {
            self.current = self
                .stack
                .pop()
                .ok_or_else(|| self.structural_error(depth))?;
        }
        Ok(())
    }

    /// The number of open ancestors must match the nesting level implied by `depth`
    fn check_structure(&self, depth: usize) -> Result<(), ParseError> {
        if self.stack.len() as isize != expected_open_scopes(depth) {
            return Err(self.structural_error(depth));
        }
        Ok(())
    }

    fn structural_error(&self, depth: usize) -> ParseError {
        ParseError::StructuralCorruption {
            line: self.line_number,
            depth,
            open: self.stack.len(),
            expected: expected_open_scopes(depth),
        }
    }

    /// The new line's samples were part of the current frame's inclusive count
    fn debit_current(&mut self, count: i64) -> Result<(), ParseError> {
        let node = &mut self.nodes[self.current];
        node.self_value = node
            .self_value
            .checked_sub(count)
            .ok_or(ParseError::CountOverflow {
                line: self.line_number,
            })?;

        match &node.name {
            Some(name) if node.self_value < 0 => Err(ParseError::ValueConsistency {
                line: self.line_number,
                name: name.clone(),
                value: node.self_value,
            }),
            _ => Ok(()),
        }
    }

    /// Append a new frame to the current one, then make it current
    fn open_frame(&mut self, text: &str, depth: usize, count: i64) {
        let index = self.nodes.len();
        self.nodes.push(Node {
            name: Some(text.to_string()),
            depth,
            self_value: count,
            children: Vec::new(),
        });
        self.nodes[self.current].children.push(index);
        self.current = index;
    }

    /// Finish parsing and assemble the owned frame tree
    pub fn finish(mut self) -> ParsedTrace {
        debug!(
            "Parsed {} sample lines ({} skipped, {} depth corrections, max stack depth {})",
            self.accepted_lines, self.skipped_lines, self.depth_corrections, self.max_stack_depth
        );

        let root = assemble(&mut self.nodes, ROOT);

        ParsedTrace {
            root,
            accepted_lines: self.accepted_lines,
            skipped_lines: self.skipped_lines,
            depth_corrections: self.depth_corrections,
            max_stack_depth: self.max_stack_depth,
        }
    }
}

/// Open-scope count implied by a depth; truncating division, so depths
/// below the base depth are never valid except a single step under it.
fn expected_open_scopes(depth: usize) -> isize {
    (depth as isize - BASE_DEPTH as isize) / DEPTH_STEP as isize
}

/// Move arena node `index` and its descendants into an owned frame
fn assemble(nodes: &mut [Node], index: usize) -> Frame {
    let node = &mut nodes[index];
    let child_indices = std::mem::take(&mut node.children);
    let mut frame = Frame {
        name: node.name.take(),
        depth: node.depth,
        self_value: node.self_value,
        total_value: 0,
        ratio: None,
        children: Vec::with_capacity(child_indices.len()),
    };

    for child in child_indices {
        frame.children.push(assemble(nodes, child));
    }

    frame
}

/// Parse a trace from any sequence of lines
///
/// **Public** - main entry point for parsing
pub fn parse_trace_lines<I, S>(lines: I) -> Result<ParsedTrace, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = TraceParser::new();
    for line in lines {
        parser.feed_line(line.as_ref())?;
    }
    Ok(parser.finish())
}

/// Parse a trace from a buffered reader
///
/// Lines are decoded lossily: bytes that are not UTF-8 become U+FFFD
/// instead of failing the whole trace.
///
/// # Errors
/// * `ParseError::Io` - the reader failed
/// * any error from [`TraceParser::feed_line`]
pub fn parse_trace_reader<R: BufRead>(mut reader: R) -> Result<ParsedTrace, ParseError> {
    let mut parser = TraceParser::new();
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        parser.feed_line(&String::from_utf8_lossy(trim_line_ending(&buffer)))?;
    }

    Ok(parser.finish())
}

/// Strip a trailing `\n` or `\r\n`
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Parse a trace file
///
/// The file is closed when parsing completes or fails.
pub fn parse_trace_file(path: impl AsRef<Path>) -> Result<ParsedTrace, ParseError> {
    let path = path.as_ref();
    debug!("Reading trace from: {}", path.display());

    let file = File::open(path)?;
    parse_trace_reader(BufReader::new(file))
}
