//! In-memory model of a `.wksp` workspace file.
//!
//! Every collection keeps source order. Values are plain data: the parser builds a fresh
//! `Workflow` on every call and the serializer only reads it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::lexical::to_lower;

// =============================================================================
// VARIABLES
// =============================================================================

/// Wire representation of a value. Says nothing about the runtime value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableType {
    Integer,
    Double,
    String,
    Image,
    Data,
}

impl VariableType {
    /// Classify a type tag such as `img`, `INT` or `byte`. Unknown tags are `String`.
    pub fn from_tag(tag: &str) -> Self {
        match to_lower(tag).as_str() {
            "str" | "string" => VariableType::String,
            "int" | "integer" => VariableType::Integer,
            "double" => VariableType::Double,
            "img" | "image" => VariableType::Image,
            "data" | "byte" => VariableType::Data,
            _ => VariableType::String,
        }
    }
}

impl FromStr for VariableType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(VariableType::from_tag(s))
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableType::Integer => write!(f, "integer"),
            VariableType::Double => write!(f, "double"),
            VariableType::String => write!(f, "string"),
            VariableType::Image => write!(f, "image"),
            VariableType::Data => write!(f, "data"),
        }
    }
}

/// A global variable or a block parameter. `value` is always the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub var_type: VariableType,
}

impl Variable {
    pub fn new(key: impl Into<String>, value: impl Into<String>, var_type: VariableType) -> Self {
        Variable {
            key: key.into(),
            value: value.into(),
            var_type,
        }
    }
}

// =============================================================================
// CANVAS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// Free-form annotation. `line` is the 1-based source line it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub line: usize,
    pub text: String,
    pub position: Position,
}

// =============================================================================
// BLOCKS AND CONNECTIONS
// =============================================================================

/// Named, typed block input or output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    #[serde(rename = "type")]
    pub port_type: VariableType,
}

impl Port {
    pub fn new(name: impl Into<String>, type_tag: &str) -> Self {
        Port {
            name: name.into(),
            port_type: VariableType::from_tag(type_tag),
        }
    }
}

/// One processing step ("glyph"). `inputs`/`outputs` are never filled by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: i32,
    #[serde(rename = "type")]
    pub block_type: String,
    pub host_machine: String,
    pub position: Position,
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub inputs: Vec<Port>,
    #[serde(default)]
    pub outputs: Vec<Port>,
}

/// Directed edge from `start_block`'s output port to `end_block`'s input port.
///
/// `id` is the ordinal of the connection among all connections in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: usize,
    pub start_block: i32,
    pub output_start_block: String,
    pub end_block: i32,
    pub input_end_block: String,
}

// =============================================================================
// TOP-LEVEL WORKFLOW
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub global_variables: Vec<Variable>,
    pub blocks: Vec<Block>,
    pub connections: Vec<Connection>,
    pub comments: Vec<Comment>,
}

impl Workflow {
    pub fn block(&self, id: i32) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }
}
