//! Lexical helpers shared by the record parsers.

/// Parameter tokens in a glyph line start after this delimiter.
pub const PARAM_DELIMITER: &str = " -";

pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

pub fn first_char(line: &str) -> Option<char> {
    line.chars().next()
}

/// True when `line` is the marker `marker`, ignoring trailing whitespace.
pub fn is_marker(line: &str, marker: &str) -> bool {
    line.trim_end() == marker
}

/// Cursor over colon-delimited fields.
///
/// A `::` yields an empty field; it never merges two fields. Once the input is exhausted
/// every further field is empty.
#[derive(Debug, Clone)]
pub struct FieldCursor<'a> {
    rest: Option<&'a str>,
}

impl<'a> FieldCursor<'a> {
    pub fn new(input: &'a str) -> Self {
        FieldCursor { rest: Some(input) }
    }

    /// Next field, up to (not including) the next `:` or the end of input.
    pub fn next_field(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match rest.find(':') {
            Some(end) => {
                self.rest = Some(&rest[end + 1..]);
                Some(&rest[..end])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }

    /// Everything not yet consumed, colons included.
    pub fn remainder(&self) -> &'a str {
        self.rest.unwrap_or("")
    }

    pub fn is_exhausted(&self) -> bool {
        self.rest.is_none()
    }
}

/// Split the parameter section of a glyph line into `key value` tokens.
///
/// Text before the first ` -` is ignored. Each token runs to the next ` -` or the end of
/// the line and is trimmed of trailing whitespace.
pub fn split_parameter_tokens(params: &str) -> Vec<&str> {
    let Some(start) = params.find(PARAM_DELIMITER) else {
        return vec![];
    };
    params[start + PARAM_DELIMITER.len()..]
        .split(PARAM_DELIMITER)
        .map(str::trim_end)
        .collect()
}
