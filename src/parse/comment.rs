//! `#` annotation lines.

use tracing::debug;

use super::lexical::first_char;
use super::types::{Comment, Position};
use crate::error::{Result, WorkspaceError};

/// Every line starting with `#` becomes a comment holding the rest of the line.
///
/// Comments carry no canvas position in this format; they sit at the origin.
pub fn parse_workflow_comments(lines: &[String]) -> Result<Vec<Comment>> {
    if lines.is_empty() {
        return Err(WorkspaceError::EmptyInput { stage: "comments" });
    }

    let comments = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| first_char(line) == Some('#'))
        .map(|(i, line)| {
            let comment = Comment {
                line: i + 1,
                text: line['#'.len_utf8()..].to_string(),
                position: Position::default(),
            };
            debug!(line = comment.line, text = %comment.text, "comment");
            comment
        })
        .collect();

    Ok(comments)
}
