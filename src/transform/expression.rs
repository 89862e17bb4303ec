use crate::config::CallPatterns;

/// A translation call detected inside an interpolated expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationCall {
    /// Function name as written (`t`, `$t`, ...)
    pub callee: String,
    /// Byte offset of the callee within the expression
    pub offset: usize,
    /// Literal key when the call takes a quoted string as first argument
    pub key: Option<String>,
}

/// Detect a translation call in an interpolation expression.
///
/// When the expression has a call with a literal key, that call is reported
/// (its key and position); otherwise the first call is reported without a
/// key. Returns `None` when no configured function is called.
pub fn find_translation(expression: &str, patterns: &CallPatterns) -> Option<TranslationCall> {
    if let Some(caps) = patterns.literal_key.captures(expression) {
        let callee = caps.get(1)?;
        let key = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str().to_string());
        return Some(TranslationCall {
            callee: callee.as_str().to_string(),
            offset: callee.start(),
            key,
        });
    }

    let caps = patterns.call.captures(expression)?;
    let callee = caps.get(1)?;
    Some(TranslationCall {
        callee: callee.as_str().to_string(),
        offset: callee.start(),
        key: None,
    })
}
