use crate::error::{InspectorError, Result};
use regex::Regex;

/// Compiled patterns that recognise translation calls inside an interpolation
#[derive(Debug, Clone)]
pub struct CallPatterns {
    /// Matches any configured callee followed by `(`; group 1 is the callee
    pub call: Regex,
    /// Matches a call whose first argument is a quoted literal; groups 2-4 hold the key
    pub literal_key: Regex,
}

/// Alternation of escaped function names, longest first so `$t` wins over `t`
fn callee_alternation(functions: &[String]) -> String {
    let mut names: Vec<&String> = functions.iter().collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    names.dedup();
    names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|")
}

/// Build the call and key patterns for a set of translation function names
///
/// The callee must not be preceded by an identifier character, `$` or `.`,
/// so `format(x)` and `obj.t(x)` are not treated as translation calls.
pub fn call_patterns(functions: &[String]) -> Result<CallPatterns> {
    let callees = callee_alternation(functions);
    let boundary = r"(?:^|[^\w$.])";

    let call_src = format!(r"{}({})\s*\(", boundary, callees);
    let call = Regex::new(&call_src).map_err(|e| InspectorError::invalid_pattern(&call_src, e))?;

    let key_src = format!(
        r#"{}({})\s*\(\s*(?:'([^'\n]+)'|"([^"\n]+)"|`([^`$\n]+)`)\s*[,)]"#,
        boundary, callees
    );
    let literal_key =
        Regex::new(&key_src).map_err(|e| InspectorError::invalid_pattern(&key_src, e))?;

    Ok(CallPatterns { call, literal_key })
}
