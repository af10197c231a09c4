//! Parse phase: `.wksp` lines → `Workflow`.
//!
//! Each record kind is collected by its own full scan over the lines; nothing is shared
//! between scans.

pub mod comment;
pub mod connection;
pub mod glyph;
pub mod graph;
pub mod lexical;
pub mod types;
pub mod variable;

pub use comment::parse_workflow_comments;
pub use connection::{parse_connection_line, parse_workflow_connections};
pub use glyph::{parse_block_line, parse_workflow_blocks};
pub use graph::WorkspaceGraph;
pub use types::*;
pub use variable::{parse_variable, parse_workflow_global_variables};

use tracing::debug;
use tracing::level_filters::LevelFilter;

use crate::error::Result;
use crate::logging;

/// Build a `Workflow` from the lines of a workspace file.
///
/// Blocks are parsed first, then connections, comments and global variables. The first
/// malformed record aborts the whole parse.
pub fn parse_workflow(lines: &[String]) -> Result<Workflow> {
    let blocks = parse_workflow_blocks(lines)?;
    let connections = parse_workflow_connections(lines, &blocks)?;
    let comments = parse_workflow_comments(lines)?;
    let global_variables = parse_workflow_global_variables(lines)?;

    debug!(
        blocks = blocks.len(),
        connections = connections.len(),
        comments = comments.len(),
        globals = global_variables.len(),
        "parsed workflow"
    );

    Ok(Workflow {
        global_variables,
        blocks,
        connections,
        comments,
    })
}

/// [`parse_workflow`] with its log output written to stderr up to `level`.
pub fn parse_workflow_with(lines: &[String], level: LevelFilter) -> Result<Workflow> {
    logging::with_level(level, || parse_workflow(lines))
}

/// Split `text` into lines and parse it.
pub fn parse_str(text: &str) -> Result<Workflow> {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    parse_workflow(&lines)
}
