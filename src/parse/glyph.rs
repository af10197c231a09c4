//! `Glyph` lines: one processing block per line.
//!
//! ```text
//! Glyph:VGL_CL:<type>:<hostMachine>:<id>:<x>:<y>: -<key> <value> -<key> <value> ...
//! ```

use tracing::{debug, trace};

use super::lexical::{FieldCursor, split_parameter_tokens};
use super::types::{Block, Position};
use super::variable::parse_variable;
use crate::error::{Result, WorkspaceError};

pub const GLYPH_TAG: &str = "Glyph";

/// Field of a glyph line currently being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GlyphField {
    Library,
    Type,
    Host,
    Id,
    X,
    Y,
    Params,
}

impl GlyphField {
    fn next(self) -> Self {
        match self {
            GlyphField::Library => GlyphField::Type,
            GlyphField::Type => GlyphField::Host,
            GlyphField::Host => GlyphField::Id,
            GlyphField::Id => GlyphField::X,
            GlyphField::X => GlyphField::Y,
            GlyphField::Y | GlyphField::Params => GlyphField::Params,
        }
    }
}

/// Parse one `Glyph:` line. `line_no` is 1-based and only used for error reporting.
pub fn parse_block_line(line: &str, line_no: usize) -> Result<Block> {
    let body = line
        .strip_prefix(GLYPH_TAG)
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or_else(|| {
            WorkspaceError::invalid_format(format!("'{line}' is not a glyph line"))
                .at_line(line_no)
        })?;

    let mut block = Block {
        id: 0,
        block_type: String::new(),
        host_machine: String::new(),
        position: Position::default(),
        variables: Vec::new(),
        inputs: Vec::new(),
        outputs: Vec::new(),
    };

    let mut cursor = FieldCursor::new(body);
    let mut state = GlyphField::Library;

    while state != GlyphField::Params {
        let field = cursor.next_field().unwrap_or_default();
        trace!(?state, field, "glyph field");

        match state {
            GlyphField::Library | GlyphField::Params => {}
            GlyphField::Type => block.block_type = field.to_string(),
            GlyphField::Host => block.host_machine = field.to_string(),
            GlyphField::Id => block.id = parse_int("id", field, line_no)?,
            GlyphField::X => block.position.x = f64::from(parse_int("x", field, line_no)?),
            GlyphField::Y => block.position.y = f64::from(parse_int("y", field, line_no)?),
        }
        state = state.next();
    }

    for token in split_parameter_tokens(cursor.remainder()) {
        let variable = parse_variable(token).map_err(|e| e.at_line(line_no))?;
        trace!(key = %variable.key, value = %variable.value, "glyph parameter");
        block.variables.push(variable);
    }

    Ok(block)
}

fn parse_int(field: &'static str, raw: &str, line_no: usize) -> Result<i32> {
    raw.trim()
        .parse()
        .map_err(|_| WorkspaceError::numeric(field, raw).at_line(line_no))
}

/// Parse every line starting with `Glyph`, in file order.
pub fn parse_workflow_blocks(lines: &[String]) -> Result<Vec<Block>> {
    let mut blocks = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if line.starts_with(GLYPH_TAG) {
            debug!(line = i + 1, text = %line, "found glyph");
            blocks.push(parse_block_line(line, i + 1)?);
        }
    }

    Ok(blocks)
}
