//! Block parameter tokens and the global `VariablesBegin:` / `VariablesEnd:` section.

use tracing::{debug, trace};

use super::lexical::{first_char, is_marker};
use super::types::{Variable, VariableType};
use crate::error::{Result, WorkspaceError};

pub const VARIABLES_BEGIN: &str = "VariablesBegin:";
pub const VARIABLES_END: &str = "VariablesEnd:";

/// Parse a `<key> <value>` parameter token. The shape of the value decides its type.
pub fn parse_variable(token: &str) -> Result<Variable> {
    let separator = match token.find(' ') {
        Some(0) | None => {
            return Err(WorkspaceError::invalid_format(format!(
                "parameter '{token}' must look like 'key value'"
            )));
        }
        Some(i) => i,
    };
    let key = &token[..separator];
    let raw = &token[separator + 1..];

    let variable = match first_char(raw) {
        Some('\'') => {
            let value = raw
                .strip_prefix('\'')
                .and_then(|v| v.strip_suffix('\''))
                .ok_or_else(|| {
                    WorkspaceError::invalid_format(format!(
                        "unterminated quoted value for parameter '{key}'"
                    ))
                })?;
            Variable::new(key, value, VariableType::String)
        }
        Some('[') => Variable::new(key, raw, VariableType::Image),
        Some(c) if c.is_ascii_digit() => Variable::new(key, raw, VariableType::Integer),
        _ => Variable::new(key, raw, VariableType::String),
    };
    Ok(variable)
}

/// Collect the `key = value` lines between the first `VariablesBegin:` and the
/// following `VariablesEnd:`.
///
/// Every global variable is recorded as `Integer`; no type inference happens here.
pub fn parse_workflow_global_variables(lines: &[String]) -> Result<Vec<Variable>> {
    let mut variables = Vec::new();
    let mut active = false;

    for (i, line) in lines.iter().enumerate() {
        trace!(line = i + 1, text = %line, "scanning for globals");

        if is_marker(line, VARIABLES_END) {
            debug!("finished parsing global variables");
            break;
        }

        if active && !matches!(first_char(line), None | Some('\n' | ' ' | '#' | '\0')) {
            let variable = parse_assignment(line).map_err(|e| e.at_line(i + 1))?;
            debug!(key = %variable.key, value = %variable.value, "global variable");
            variables.push(variable);
        }

        // Checked last so the marker line itself is never read as an assignment.
        if is_marker(line, VARIABLES_BEGIN) {
            debug!("started parsing global variables");
            active = true;
        }
    }

    Ok(variables)
}

/// `key = value`: key runs to the first space, value starts two characters after `=`.
fn parse_assignment(line: &str) -> Result<Variable> {
    let eq = line.find('=').ok_or_else(|| {
        WorkspaceError::invalid_format(format!("global variable '{line}' has no '='"))
    })?;
    let key = match line.find(' ') {
        Some(space) if space < eq => &line[..space],
        _ => &line[..eq],
    };
    if key.is_empty() {
        return Err(WorkspaceError::invalid_format(format!(
            "global variable '{line}' has no name"
        )));
    }
    let value = line[eq..]
        .char_indices()
        .nth(2)
        .map_or("", |(offset, _)| &line[eq + offset..]);
    Ok(Variable::new(key, value, VariableType::Integer))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn quoted_value_is_string() {
        let var = parse_variable("winname 'demoConvolution'").unwrap();
        assert_eq!(var, Variable::new("winname", "demoConvolution", VariableType::String));
    }

    #[test]
    fn digit_value_is_integer() {
        let var = parse_variable("count 42").unwrap();
        assert_eq!(var, Variable::new("count", "42", VariableType::Integer));
    }

    #[test]
    fn bracket_value_is_image_verbatim() {
        let var = parse_variable("window [1,2,3]").unwrap();
        assert_eq!(var.value, "[1,2,3]");
        assert_eq!(var.var_type, VariableType::Image);
    }

    #[test]
    fn bare_word_is_string_verbatim() {
        let var = parse_variable("mode reflect").unwrap();
        assert_eq!(var, Variable::new("mode", "reflect", VariableType::String));
        let negative = parse_variable("offset -3").unwrap();
        assert_eq!(negative.var_type, VariableType::String);
    }

    #[test]
    fn empty_quotes_give_empty_string() {
        let var = parse_variable("name ''").unwrap();
        assert_eq!(var.value, "");
        assert_eq!(var.var_type, VariableType::String);
    }

    #[test]
    fn missing_space_is_invalid() {
        let err = parse_variable("count42").unwrap_err();
        assert_eq!(err.code(), "W002");
        assert!(parse_variable(" 42").is_err());
    }

    #[test]
    fn unterminated_quote_is_invalid() {
        assert!(parse_variable("name 'abc").is_err());
        assert!(parse_variable("name '").is_err());
    }

    #[test]
    fn globals_between_markers() {
        let src = lines(&[
            "outside = 1",
            "VariablesBegin:",
            "winname = demo",
            "",
            "# note",
            " indented = 2",
            "threshold = 0.5",
            "VariablesEnd:",
            "late = 3",
        ]);
        let vars = parse_workflow_global_variables(&src).unwrap();
        assert_eq!(
            vars,
            vec![
                Variable::new("winname", "demo", VariableType::Integer),
                Variable::new("threshold", "0.5", VariableType::Integer),
            ]
        );
    }

    #[test]
    fn globals_stop_at_first_end_marker() {
        let src = lines(&[
            "VariablesBegin: ",
            "a = 1",
            "VariablesEnd: ",
            "VariablesBegin:",
            "b = 2",
            "VariablesEnd:",
        ]);
        let vars = parse_workflow_global_variables(&src).unwrap();
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].key, "a");
    }

    #[test]
    fn globals_without_section_are_empty() {
        let src = lines(&["a = 1", "Glyph:VGL_CL:x:y:1:0:0:"]);
        assert!(parse_workflow_global_variables(&src).unwrap().is_empty());
        assert!(parse_workflow_global_variables(&[]).unwrap().is_empty());
    }

    #[test]
    fn global_line_without_equals_reports_line() {
        let src = lines(&["VariablesBegin:", "a = 1", "broken", "VariablesEnd:"]);
        let err = parse_workflow_global_variables(&src).unwrap_err();
        assert_eq!(err.code(), "W002");
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn end_marker_before_begin_stops_scan() {
        let src = lines(&["VariablesEnd:", "VariablesBegin:", "a = 1", "VariablesEnd:"]);
        assert!(parse_workflow_global_variables(&src).unwrap().is_empty());
    }

    #[test]
    fn nul_led_line_inside_block_is_skipped() {
        let src = lines(&["VariablesBegin:", "\0junk", "a = 1", "VariablesEnd:"]);
        let vars = parse_workflow_global_variables(&src).unwrap();
        assert_eq!(vars, vec![Variable::new("a", "1", VariableType::Integer)]);
    }

    #[test]
    fn global_without_name_reports_line() {
        let src = lines(&["VariablesBegin:", "= 5", "VariablesEnd:"]);
        let err = parse_workflow_global_variables(&src).unwrap_err();
        assert_eq!(err.code(), "W002");
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn value_offset_counts_characters() {
        assert_eq!(parse_assignment("k=éa").unwrap().value, "a");
        assert_eq!(parse_assignment("name = Convolução").unwrap().value, "Convolução");
        assert_eq!(parse_assignment("k=é").unwrap().value, "");
    }

    #[test]
    fn assignment_edge_cases() {
        assert_eq!(parse_assignment("a =").unwrap().value, "");
        assert_eq!(parse_assignment("path = /tmp/a b").unwrap().value, "/tmp/a b");
        assert_eq!(parse_assignment("k= v").unwrap().key, "k");
    }
}
