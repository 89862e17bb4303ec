use crate::error::{InspectorError, Result};
use crate::sfc::block::TemplateBlock;

/// An opening tag found at some offset of the source
struct OpenTag {
    name: String,
    /// Raw text between the tag name and the closing `>`
    attributes: String,
    /// Offset just past the closing `>`
    end: usize,
    self_closing: bool,
}

/// Locate the root `<template>` block of a Vue single-file component.
///
/// Only top-level blocks are considered: `<script>`, `<style>` and custom
/// blocks are skipped whole, so template-looking text inside them is ignored.
/// Nested `<template>` tags (slots, `v-if` groups) are balanced so the block
/// ends at the tag that closes the root one.
///
/// Returns `Ok(None)` when the component has no template.
pub fn locate_template(code: &str) -> Result<Option<TemplateBlock>> {
    let mut found: Option<TemplateBlock> = None;
    let mut pos = 0;

    while let Some(rel) = code[pos..].find('<') {
        let at = pos + rel;
        let rest = &code[at..];

        if rest.starts_with("<!--") {
            match rest.find("-->") {
                Some(end) => {
                    pos = at + end + 3;
                    continue;
                }
                // Everything after an unterminated comment is commented out
                None => break,
            }
        }

        if rest.starts_with("</") || rest.starts_with("<!") || rest.starts_with("<?") {
            pos = rest.find('>').map(|end| at + end + 1).unwrap_or(code.len());
            continue;
        }

        let Some(tag) = parse_open_tag(code, at)? else {
            pos = at + 1;
            continue;
        };

        if tag.name.eq_ignore_ascii_case("template") {
            if found.is_some() {
                return Err(InspectorError::malformed(
                    "a component can contain only one top-level <template> block",
                ));
            }

            let (content_end, after) = if tag.self_closing {
                (tag.end, tag.end)
            } else {
                find_template_close(code, tag.end)?.ok_or_else(|| {
                    InspectorError::malformed(format!(
                        "<template> opened at offset {} is never closed",
                        at
                    ))
                })?
            };

            found = Some(TemplateBlock {
                start: tag.end,
                end: content_end,
                lang: attribute_value(&tag.attributes, "lang"),
                src: attribute_value(&tag.attributes, "src"),
            });
            pos = after;
        } else if tag.self_closing {
            pos = tag.end;
        } else {
            pos = find_closing_tag(code, tag.end, &tag.name)
                .map(|(_, after)| after)
                .ok_or_else(|| {
                    InspectorError::malformed(format!("<{}> block is never closed", tag.name))
                })?;
        }
    }

    Ok(found)
}

/// Parse the opening tag starting at `at` (which holds `<`).
///
/// Returns `Ok(None)` when the `<` does not start a tag name, and an error
/// when the tag runs to the end of input.
fn parse_open_tag(code: &str, at: usize) -> Result<Option<OpenTag>> {
    let after_lt = &code[at + 1..];
    let name_len = after_lt
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_alphanumeric() || c == '-' || (i > 0 && c == ':')))
        .map(|(i, _)| i)
        .unwrap_or(after_lt.len());

    if name_len == 0 || !after_lt.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Ok(None);
    }

    let name = after_lt[..name_len].to_string();
    let attrs_start = at + 1 + name_len;

    let Some(gt) = find_tag_end(code, attrs_start) else {
        return Err(InspectorError::malformed(format!(
            "<{}> tag at offset {} is not terminated",
            name, at
        )));
    };

    let raw = code[attrs_start..gt].trim_end();
    Ok(Some(OpenTag {
        name,
        attributes: raw.trim_end_matches('/').to_string(),
        end: gt + 1,
        self_closing: raw.ends_with('/'),
    }))
}

/// Offset of the `>` that ends the tag body starting at `from`.
///
/// Quotes only open a value directly after `=`, so an apostrophe inside an
/// unquoted value (`title=don't`) is plain text.
pub(crate) fn find_tag_end(code: &str, from: usize) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut after_eq = false;

    for (i, c) in code[from..].char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '>' => return Some(from + i),
            '"' | '\'' if after_eq => quote = Some(c),
            _ => {}
        }
        if !c.is_whitespace() {
            after_eq = c == '=';
        }
    }

    None
}

/// If a closing tag for `name` starts at `at`, return the offset past its `>`
fn closing_tag_at(code: &str, at: usize, name: &str) -> Option<usize> {
    let rest = code.get(at..)?;
    let after_slash = rest.strip_prefix("</")?;
    let candidate = after_slash.get(..name.len())?;
    if !candidate.eq_ignore_ascii_case(name) {
        return None;
    }
    let tail = &after_slash[name.len()..];
    let trimmed = tail.trim_start();
    if trimmed.starts_with('>') {
        Some(at + 2 + name.len() + (tail.len() - trimmed.len()) + 1)
    } else {
        None
    }
}

/// Find `</name>` after `from`; returns (start of closing tag, offset past it)
fn find_closing_tag(code: &str, from: usize, name: &str) -> Option<(usize, usize)> {
    let mut pos = from;
    while let Some(rel) = code[pos..].find("</") {
        let at = pos + rel;
        if let Some(after) = closing_tag_at(code, at, name) {
            return Some((at, after));
        }
        pos = at + 2;
    }
    None
}

/// Balance nested `<template>` tags until the root one closes
fn find_template_close(code: &str, from: usize) -> Result<Option<(usize, usize)>> {
    let mut depth = 1usize;
    let mut pos = from;

    while let Some(rel) = code[pos..].find('<') {
        let at = pos + rel;
        let rest = &code[at..];

        if rest.starts_with("<!--") {
            match rest.find("-->") {
                Some(end) => {
                    pos = at + end + 3;
                    continue;
                }
                None => return Ok(None),
            }
        }

        if let Some(after) = closing_tag_at(code, at, "template") {
            depth -= 1;
            if depth == 0 {
                return Ok(Some((at, after)));
            }
            pos = after;
            continue;
        }

        // Step over every opening tag so markup inside attribute values is not counted
        match parse_open_tag(code, at) {
            Ok(Some(tag)) => {
                if tag.name.eq_ignore_ascii_case("template") && !tag.self_closing {
                    depth += 1;
                }
                pos = tag.end;
                continue;
            }
            Ok(None) => {}
            Err(e) if opens_template(rest) => return Err(e),
            Err(_) => {}
        }

        pos = at + 1;
    }

    Ok(None)
}

fn opens_template(rest: &str) -> bool {
    rest.get(1..9)
        .is_some_and(|name| name.eq_ignore_ascii_case("template"))
        && rest[9..].starts_with(|c: char| c.is_whitespace() || c == '>' || c == '/')
}

/// Read a single attribute value out of raw tag attribute text.
///
/// Boolean attributes (no `=`) yield an empty string.
fn attribute_value(attributes: &str, wanted: &str) -> Option<String> {
    let mut rest = attributes.trim_start();

    while !rest.is_empty() {
        let name_len = rest
            .find(|c: char| c.is_whitespace() || c == '=')
            .unwrap_or(rest.len());
        let name = &rest[..name_len];
        rest = rest[name_len..].trim_start();

        let value = if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            let (value, remaining) = match after_eq.chars().next() {
                Some(q @ ('"' | '\'')) => {
                    let body = &after_eq[1..];
                    let close = body.find(q).unwrap_or(body.len());
                    (&body[..close], body.get(close + 1..).unwrap_or(""))
                }
                _ => {
                    let end = after_eq
                        .find(char::is_whitespace)
                        .unwrap_or(after_eq.len());
                    (&after_eq[..end], &after_eq[end..])
                }
            };
            rest = remaining.trim_start();
            value
        } else {
            ""
        };

        if name.eq_ignore_ascii_case(wanted) {
            return Some(value.to_string());
        }
    }

    None
}
