//! Emit phase: `Workflow` → `.wksp` lines.
//!
//! Public API: `convert_workflow_to_lines(workflow) -> Vec<String>`

mod writer;

use tracing::debug;

use crate::parse::types::{Block, Connection, Variable, VariableType, Workflow};
pub use writer::LineWriter;

const HEADER: [&str; 5] = [
    "// Workspace file",
    "// Blocks are Glyph lines, edges are NodeConnection lines.",
    "// Global variables sit between VariablesBegin: and VariablesEnd:.",
    "// Annotations sit between AnnotationsBegin and AnnotationsEnd.",
    "// Generated file, edit with care.",
];

/// Render `workflow` as workspace file lines, without line terminators.
pub fn convert_workflow_to_lines(workflow: &Workflow) -> Vec<String> {
    let mut w = LineWriter::new();

    // 1. HEADER
    for line in HEADER {
        w.line(line);
    }
    w.blanks(3);
    w.line("WorkspaceBegin: 1.0");
    w.blank();

    // 2. GLOBAL VARIABLES
    w.line("VariablesBegin: ");
    for var in &workflow.global_variables {
        w.line(format!("{} = {}", var.key, var.value));
    }
    w.line("VariablesEnd: ");
    w.blanks(2);

    // 3. GLYPHS
    for block in &workflow.blocks {
        w.line(glyph_line(block));
    }
    w.blanks(2);

    // 4. CONNECTIONS
    for conn in &workflow.connections {
        w.line(connection_line(conn));
    }
    w.blanks(2);

    // 5. ANNOTATIONS
    w.line("AnnotationsBegin");
    for comment in &workflow.comments {
        w.line(format!("#{}", comment.text));
    }
    w.line("AnnotationsEnd");
    w.blanks(2);

    w.line("WorkspaceEnd: 1.0");

    let lines = w.finish();
    debug!(lines = lines.len(), "serialized workflow");
    lines
}

/// `Glyph:VGL_CL:<type>:<host>:<id>:<x>:<y>: -<key> <value> ...`, trailing space included.
pub fn glyph_line(block: &Block) -> String {
    let mut line = format!(
        "Glyph:VGL_CL:{}:{}:{}:{}:{}: ",
        block.block_type,
        block.host_machine,
        block.id,
        coordinate(block.position.x),
        coordinate(block.position.y),
    );
    for var in &block.variables {
        line.push_str(&format!("-{} {} ", var.key, emit_value(var)));
    }
    line
}

pub fn connection_line(conn: &Connection) -> String {
    format!(
        "NodeConnection:data:{}:{}:{}:{}",
        conn.start_block, conn.output_start_block, conn.end_block, conn.input_end_block
    )
}

/// Parameter value as written in a glyph line. Strings are quoted again.
pub fn emit_value(var: &Variable) -> String {
    match var.var_type {
        VariableType::String => format!("'{}'", var.value),
        _ => var.value.clone(),
    }
}

fn coordinate(v: f64) -> i64 {
    v.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::types::{Comment, Position};

    fn block() -> Block {
        Block {
            id: 2,
            block_type: "vglClBlurSq3".into(),
            host_machine: "localhost".into(),
            position: Position::new(310.0, 95.4),
            variables: vec![
                Variable::new("winname", "blur", VariableType::String),
                Variable::new("times", "3", VariableType::Integer),
            ],
            inputs: vec![],
            outputs: vec![],
        }
    }

    #[test]
    fn glyph_line_format() {
        assert_eq!(
            glyph_line(&block()),
            "Glyph:VGL_CL:vglClBlurSq3:localhost:2:310:95: -winname 'blur' -times 3 "
        );
    }

    #[test]
    fn glyph_line_without_parameters() {
        let mut b = block();
        b.variables.clear();
        b.host_machine.clear();
        assert_eq!(glyph_line(&b), "Glyph:VGL_CL:vglClBlurSq3::2:310:95: ");
    }

    #[test]
    fn connection_line_format() {
        let conn = Connection {
            id: 0,
            start_block: 1,
            output_start_block: "retval".into(),
            end_block: 2,
            input_end_block: "img".into(),
        };
        assert_eq!(connection_line(&conn), "NodeConnection:data:1:retval:2:img");
    }

    #[test]
    fn empty_workflow_layout() {
        let lines = convert_workflow_to_lines(&Workflow::default());
        assert_eq!(lines.len(), 23);
        assert_eq!(lines[8], "WorkspaceBegin: 1.0");
        assert_eq!(lines[10], "VariablesBegin: ");
        assert_eq!(lines[11], "VariablesEnd: ");
        assert_eq!(lines[18], "AnnotationsBegin");
        assert_eq!(lines[19], "AnnotationsEnd");
        assert_eq!(lines.last().map(String::as_str), Some("WorkspaceEnd: 1.0"));
    }

    #[test]
    fn annotations_keep_text() {
        let workflow = Workflow {
            comments: vec![Comment {
                line: 40,
                text: " keep me ".into(),
                position: Position::default(),
            }],
            ..Workflow::default()
        };
        let lines = convert_workflow_to_lines(&workflow);
        let begin = lines.iter().position(|l| l == "AnnotationsBegin").unwrap();
        assert_eq!(lines[begin + 1], "# keep me ");
        assert_eq!(lines[begin + 2], "AnnotationsEnd");
    }
}
