//! `NodeConnection` lines.
//!
//! ```text
//! NodeConnection:<dataType>:<outBlockId>:<outPortName>:<inBlockId>:<inPortName>
//! ```

use tracing::debug;

use super::lexical::{FieldCursor, to_lower};
use super::types::{Block, Connection, VariableType};
use crate::error::{Result, WorkspaceError};

pub const CONNECTION_TAG: &str = "NodeConnection";

/// Parse one connection line. `id` is assigned by the caller; the line has none.
///
/// Port names are lower-cased. The data type field is read but not stored.
pub fn parse_connection_line(line: &str, id: usize, line_no: usize) -> Result<Connection> {
    let body = line
        .strip_prefix(CONNECTION_TAG)
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or_else(|| {
            WorkspaceError::invalid_format(format!("'{line}' is not a connection line"))
                .at_line(line_no)
        })?;

    let mut cursor = FieldCursor::new(body);
    let mut next = || cursor.next_field().unwrap_or_default();

    let data_type = to_lower(next());
    let start_block = parse_block_id("outBlockId", next(), line_no)?;
    let output_start_block = to_lower(next());
    let end_block = parse_block_id("inBlockId", next(), line_no)?;
    // The input port runs to the end of the line.
    let input_end_block = to_lower(cursor.remainder());

    debug!(
        id,
        data_type = %data_type,
        classified = %VariableType::from_tag(&data_type),
        from = start_block,
        output = %output_start_block,
        to = end_block,
        input = %input_end_block,
        "connection"
    );

    Ok(Connection {
        id,
        start_block,
        output_start_block,
        end_block,
        input_end_block,
    })
}

fn parse_block_id(field: &'static str, raw: &str, line_no: usize) -> Result<i32> {
    raw.trim()
        .parse()
        .map_err(|_| WorkspaceError::numeric(field, raw).at_line(line_no))
}

/// Parse every line starting with `NodeConnection`, numbering connections `0..n` in the
/// order they are found.
///
/// `blocks` is only consulted for diagnostics; a connection naming an unknown block is
/// still accepted.
pub fn parse_workflow_connections(lines: &[String], blocks: &[Block]) -> Result<Vec<Connection>> {
    if lines.is_empty() {
        return Err(WorkspaceError::EmptyInput { stage: "connections" });
    }

    let mut connections = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !line.starts_with(CONNECTION_TAG) {
            continue;
        }
        let connection = parse_connection_line(line, connections.len(), i + 1)?;
        for endpoint in [connection.start_block, connection.end_block] {
            if !blocks.iter().any(|b| b.id == endpoint) {
                debug!(line = i + 1, block = endpoint, "connection references an unknown block");
            }
        }
        connections.push(connection);
    }

    if connections.is_empty() {
        debug!("no connections were found");
    }

    Ok(connections)
}
