#![allow(dead_code)]

use wksp::parse::*;

// =============================================================================
// Line builders
// =============================================================================

pub fn lines(src: &[&str]) -> Vec<String> {
    src.iter().map(|s| s.to_string()).collect()
}

/// Lines of `tests/fixtures/demo_convolution.wksp`.
pub fn demo_lines() -> Vec<String> {
    include_str!("../fixtures/demo_convolution.wksp")
        .lines()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Workflow builders
// =============================================================================

pub fn block(id: i32, block_type: &str, x: f64, y: f64, variables: Vec<Variable>) -> Block {
    Block {
        id,
        block_type: block_type.into(),
        host_machine: "localhost".into(),
        position: Position::new(x, y),
        variables,
        inputs: vec![],
        outputs: vec![],
    }
}

pub fn connection(id: usize, from: i32, output: &str, to: i32, input: &str) -> Connection {
    Connection {
        id,
        start_block: from,
        output_start_block: output.into(),
        end_block: to,
        input_end_block: input.into(),
    }
}

pub fn comment(line: usize, text: &str) -> Comment {
    Comment {
        line,
        text: text.into(),
        position: Position::default(),
    }
}

/// Two blocks joined by one connection, with one global and one annotation.
pub fn small_workflow() -> Workflow {
    Workflow {
        global_variables: vec![Variable::new("winname", "demo", VariableType::Integer)],
        blocks: vec![
            block(
                1,
                "vglLoadImage",
                10.0,
                20.0,
                vec![Variable::new("filename", "lena.png", VariableType::String)],
            ),
            block(
                2,
                "vglShowImage",
                200.0,
                20.0,
                vec![
                    Variable::new("winname", "demo", VariableType::String),
                    Variable::new("delay", "30", VariableType::Integer),
                ],
            ),
        ],
        connections: vec![connection(0, 1, "retval", 2, "img")],
        comments: vec![comment(1, "load and show")],
    }
}
