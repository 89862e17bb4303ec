use crate::sfc::locator::find_tag_end;

/// One interpolation found in template text, offsets relative to the template content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpolation {
    /// Offset of the opening delimiter
    pub start: usize,
    /// Offset just past the closing delimiter
    pub end: usize,
    /// Offset of the first expression byte
    pub expr_start: usize,
    /// Offset just past the last expression byte
    pub expr_end: usize,
}

impl Interpolation {
    pub fn expression<'a>(&self, content: &'a str) -> &'a str {
        &content[self.expr_start..self.expr_end]
    }

    pub fn source<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start..self.end]
    }
}

/// Collect interpolations that sit in text positions of template markup.
///
/// A single left-to-right pass: HTML comments and tag bodies (including
/// attribute values) are stepped over, so delimiters inside them are not
/// reported. An interpolation always ends at the first closing delimiter.
pub fn scan_interpolations(content: &str, open: &str, close: &str) -> Vec<Interpolation> {
    let mut found = Vec::new();
    let Some(open_first) = open.chars().next() else {
        return found;
    };
    let mut pos = 0;

    while let Some(rel) = content[pos..].find(|c: char| c == '<' || c == open_first) {
        let at = pos + rel;
        let rest = &content[at..];

        if rest.starts_with(open) {
            let expr_start = at + open.len();
            match content[expr_start..].find(close) {
                Some(len) => {
                    let expr_end = expr_start + len;
                    let end = expr_end + close.len();
                    found.push(Interpolation {
                        start: at,
                        end,
                        expr_start,
                        expr_end,
                    });
                    pos = end;
                }
                None => break,
            }
        } else if rest.starts_with("<!--") {
            pos = rest
                .find("-->")
                .map(|end| at + end + 3)
                .unwrap_or(content.len());
        } else if starts_tag(rest) {
            pos = skip_tag(content, at);
        } else {
            pos = at + rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    found
}

fn starts_tag(rest: &str) -> bool {
    let mut chars = rest.chars();
    chars.next() == Some('<')
        && chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/')
}

/// Offset just past the `>` ending the tag at `at`, honouring quoted attribute values
fn skip_tag(content: &str, at: usize) -> usize {
    find_tag_end(content, at).map_or(content.len(), |gt| gt + 1)
}
