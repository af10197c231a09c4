//! Unified error type used by the parse, emit and I/O layers.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkspaceError>;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The line sequence handed to an aggregator has zero lines.
    #[error("{stage}: workspace lines are empty")]
    EmptyInput { stage: &'static str },

    /// A token or record lacks a required separator or delimiter.
    #[error("invalid format{}: {message}", at(.line))]
    InvalidFormat {
        line: Option<usize>,
        message: String,
    },

    /// An id or coordinate field is not a valid integer.
    #[error("field `{field}`{} is not a valid integer: '{value}'", at(.line))]
    NumericConversion {
        field: &'static str,
        value: String,
        line: Option<usize>,
    },

    #[error("unable to open file '{}'", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn at(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" on line {n}"),
        None => String::new(),
    }
}

impl WorkspaceError {
    pub fn invalid_format(message: impl Into<String>) -> Self {
        WorkspaceError::InvalidFormat {
            line: None,
            message: message.into(),
        }
    }

    pub fn numeric(field: &'static str, value: impl Into<String>) -> Self {
        WorkspaceError::NumericConversion {
            field,
            value: value.into(),
            line: None,
        }
    }

    /// Stable short code, used by the wasm surface and in tests.
    pub fn code(&self) -> &'static str {
        match self {
            WorkspaceError::EmptyInput { .. } => "W001",
            WorkspaceError::InvalidFormat { .. } => "W002",
            WorkspaceError::NumericConversion { .. } => "W003",
            WorkspaceError::FileOpen { .. } => "W004",
        }
    }

    /// 1-based source line the error was raised on, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            WorkspaceError::InvalidFormat { line, .. }
            | WorkspaceError::NumericConversion { line, .. } => *line,
            _ => None,
        }
    }

    /// Attach a source line to a token-level error. A line already set is kept.
    pub fn at_line(mut self, line_no: usize) -> Self {
        match &mut self {
            WorkspaceError::InvalidFormat { line, .. }
            | WorkspaceError::NumericConversion { line, .. } => {
                line.get_or_insert(line_no);
            }
            _ => {}
        }
        self
    }
}
