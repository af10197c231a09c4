//! WASM entry points for the browser workspace editor.

use wasm_bindgen::prelude::*;

use crate::emit;
use crate::error::WorkspaceError;
use crate::parse::{self, Workflow};

/// Parse workspace text. Returns `{ status: "success", workflow }` or
/// `{ status: "errors", errors }`.
#[wasm_bindgen]
pub fn parse_workspace(text: &str) -> JsValue {
    let result = parse_workspace_inner(text);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Same as [`parse_workspace`], serialized to a JSON string.
#[wasm_bindgen]
pub fn parse_workspace_json(text: &str) -> String {
    let result = parse_workspace_inner(text);
    serde_json::to_string(&result).unwrap_or_default()
}

fn parse_workspace_inner(text: &str) -> ParseResult {
    match parse::parse_str(text) {
        Ok(workflow) => ParseResult::Success { workflow },
        Err(e) => ParseResult::Errors {
            errors: vec![ErrorDto::from(e)],
        },
    }
}

/// Serialize a workflow object back to workspace text (`\n` after every line).
#[wasm_bindgen]
pub fn serialize_workspace(workflow: JsValue) -> JsValue {
    let result = match serde_wasm_bindgen::from_value::<Workflow>(workflow) {
        Ok(workflow) => serialize_workspace_inner(&workflow),
        Err(e) => SerializeResult::Errors {
            errors: vec![ErrorDto {
                code: "W002".into(),
                message: format!("Failed to read workflow object: {}", e),
                line: None,
            }],
        },
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn serialize_workspace_inner(workflow: &Workflow) -> SerializeResult {
    let mut text = String::new();
    for line in emit::convert_workflow_to_lines(workflow) {
        text.push_str(&line);
        text.push('\n');
    }
    SerializeResult::Success { text }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    code: String,
    message: String,
    line: Option<usize>,
}

impl From<WorkspaceError> for ErrorDto {
    fn from(e: WorkspaceError) -> Self {
        ErrorDto {
            code: e.code().to_string(),
            message: e.to_string(),
            line: e.line(),
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum ParseResult {
    #[serde(rename = "success")]
    Success { workflow: Workflow },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum SerializeResult {
    #[serde(rename = "success")]
    Success { text: String },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
