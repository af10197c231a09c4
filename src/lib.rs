//! Reader and writer for `.wksp` visual dataflow workspace files.
//!
//! A workspace file describes processing blocks ("glyphs") with typed parameters, the
//! connections between their ports, global variables and free-form annotations.
//! [`parse::parse_workflow`] turns the file's lines into a [`parse::Workflow`] and
//! [`emit::convert_workflow_to_lines`] turns it back into lines that parse to the same
//! model.

pub mod emit;
pub mod error;
pub mod io;
pub mod logging;
pub mod parse;
pub mod wasm;

pub use error::{Result, WorkspaceError};
