pub mod expression;
pub mod location;
pub mod marker;
pub mod scanner;

pub use expression::{find_translation, TranslationCall};
pub use location::LineIndex;
pub use marker::TranslationMarker;
pub use scanner::{scan_interpolations, Interpolation};

use crate::config::{call_patterns, CallPatterns, InspectorConfig, COMPLEX_EXPRESSION_KEY};
use crate::error::Result;
use crate::sfc::locate_template;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of rewriting one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformOutput {
    /// The full component source with annotated template
    pub code: String,
    /// Source map; the rewrite only inserts wrappers, so none is produced
    pub map: Option<String>,
    /// Markers emitted, in template order
    pub markers: Vec<TranslationMarker>,
}

/// Rewrites translated interpolations in Vue templates into location-bearing markers
#[derive(Debug, Clone)]
pub struct Transformer {
    patterns: CallPatterns,
    open: String,
    close: String,
    key_attribute: String,
    location_attribute: String,
    root: Option<PathBuf>,
}

impl Transformer {
    pub fn new(config: &InspectorConfig) -> Result<Self> {
        config.validate()?;
        let [open, close] = config.delimiters.clone();
        Ok(Self {
            patterns: call_patterns(&config.functions)?,
            open,
            close,
            key_attribute: config.key_attribute.clone(),
            location_attribute: config.location_attribute.clone(),
            root: config.root.clone(),
        })
    }

    /// Transform hook: annotate `code` if it is a component with translated output.
    ///
    /// Failures never propagate to the host; they are logged with the module id
    /// and the file is left untouched.
    pub fn transform(&self, code: &str, id: &str) -> Option<TransformOutput> {
        match self.try_transform(code, id) {
            Ok(output) => output,
            Err(e) => {
                log::error!("Error processing file {}: {}", id, e);
                None
            }
        }
    }

    /// Like [`Transformer::transform`], but reports malformed input as an error
    pub fn try_transform(&self, code: &str, id: &str) -> Result<Option<TransformOutput>> {
        if !id.ends_with(".vue") {
            return Ok(None);
        }

        let Some(block) = locate_template(code)? else {
            return Ok(None);
        };
        if !block.is_html() {
            log::debug!(
                "Skipping {}: template lang {:?} is not rewritable",
                id,
                block.lang
            );
            return Ok(None);
        }

        let content = block.content(code);
        let index = LineIndex::new(code);
        let file = self.display_path(id);

        let mut rewritten = String::with_capacity(content.len() + 128);
        let mut markers = Vec::new();
        let mut cursor = 0;

        for interpolation in scan_interpolations(content, &self.open, &self.close) {
            let expression = interpolation.expression(content);
            let Some(call) = find_translation(expression, &self.patterns) else {
                continue;
            };

            let offset = block.start + interpolation.expr_start + call.offset;
            let (line, column) = index.position(code, offset);
            let marker = TranslationMarker {
                key: call
                    .key
                    .unwrap_or_else(|| COMPLEX_EXPRESSION_KEY.to_string()),
                file: file.clone(),
                line,
                column,
            };

            rewritten.push_str(&content[cursor..interpolation.start]);
            rewritten.push_str(&marker.wrap(
                interpolation.source(content),
                &self.key_attribute,
                &self.location_attribute,
            ));
            cursor = interpolation.end;
            markers.push(marker);
        }

        if markers.is_empty() {
            return Ok(None);
        }
        rewritten.push_str(&content[cursor..]);

        let mut output = String::with_capacity(code.len() + rewritten.len() - content.len());
        output.push_str(&code[..block.start]);
        output.push_str(&rewritten);
        output.push_str(&code[block.end..]);

        log::debug!(
            "Annotated {} translated expression(s) in {}",
            markers.len(),
            id
        );

        Ok(Some(TransformOutput {
            code: output,
            map: None,
            markers,
        }))
    }

    /// Module id as written into markers: relative to the root when under it
    pub fn display_path(&self, id: &str) -> String {
        let path = Path::new(id);
        let relative = self
            .root
            .as_deref()
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path);
        relative.to_string_lossy().replace('\\', "/")
    }
}
