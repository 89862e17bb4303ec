use crate::error::{InspectorError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up by [`InspectorConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "i18n-inspector.json";

/// Key returned when a translated expression has no single literal key
pub const COMPLEX_EXPRESSION_KEY: &str = "complex-expression";

/// When the host should rewrite templates. The overlay is dev-server only regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyMode {
    /// Only while the dev server is running
    Serve,
    /// Only for production builds
    Build,
    /// Both serve and build
    #[default]
    Always,
}

/// Key that must be held for a click to open the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    #[default]
    Alt,
    Ctrl,
    Meta,
    Shift,
}

impl Modifier {
    /// Name of the matching boolean property on a DOM `MouseEvent` / `KeyboardEvent`
    pub fn event_property(self) -> &'static str {
        match self {
            Self::Alt => "altKey",
            Self::Ctrl => "ctrlKey",
            Self::Meta => "metaKey",
            Self::Shift => "shiftKey",
        }
    }

    /// Value of `KeyboardEvent.key` when only the modifier itself is pressed
    pub fn key_name(self) -> &'static str {
        match self {
            Self::Alt => "Alt",
            Self::Ctrl => "Control",
            Self::Meta => "Meta",
            Self::Shift => "Shift",
        }
    }
}

/// How the browser overlay opens a source location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OpenStrategy {
    /// Ask the dev server to launch the editor (`GET endpoint?file=path:line:col`)
    DevServer { endpoint: String },
    /// Navigate to an editor URL; `{root}`, `{file}`, `{line}` and `{column}` are substituted
    EditorUrl { template: String },
}

impl Default for OpenStrategy {
    fn default() -> Self {
        Self::DevServer {
            endpoint: "/__open-in-editor".to_string(),
        }
    }
}

/// Options accepted by the inspector, usually read from `i18n-inspector.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct InspectorConfig {
    /// Project root; module ids under it are written relative to it
    pub root: Option<PathBuf>,
    /// Translation function names recognised inside interpolations
    pub functions: Vec<String>,
    /// Interpolation delimiters, `["{{", "}}"]` unless the project overrides them
    pub delimiters: [String; 2],
    /// Attribute carrying the translation key
    pub key_attribute: String,
    /// Attribute carrying `path:line:column`
    pub location_attribute: String,
    pub apply: ApplyMode,
    pub modifier: Modifier,
    pub open: OpenStrategy,
    /// Outline colour used when highlighting is on
    pub highlight_color: String,
    /// Highlight state used until the developer toggles it
    pub highlight_by_default: bool,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            root: None,
            functions: vec!["t".to_string(), "$t".to_string()],
            delimiters: ["{{".to_string(), "}}".to_string()],
            key_attribute: "data-i18n".to_string(),
            location_attribute: "data-file-path".to_string(),
            apply: ApplyMode::default(),
            modifier: Modifier::default(),
            open: OpenStrategy::default(),
            highlight_color: "#42b883".to_string(),
            highlight_by_default: false,
        }
    }
}

impl InspectorConfig {
    /// Read and validate a JSON config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| InspectorError::config_parse(path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `i18n-inspector.json` from `dir` if present, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            log::debug!("Loading config from {}", candidate.display());
            Self::from_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = Some(root);
        self
    }

    /// Reject option values that would produce broken markup or patterns
    pub fn validate(&self) -> Result<()> {
        if self.functions.is_empty() {
            return Err(InspectorError::invalid_config(
                "functions",
                "at least one translation function is required",
            ));
        }

        let identifier = Regex::new(r"^[A-Za-z_$][\w$]*(\.[A-Za-z_$][\w$]*)*$")
            .map_err(|e| InspectorError::invalid_pattern("identifier", e))?;
        for name in &self.functions {
            if !identifier.is_match(name) {
                return Err(InspectorError::invalid_config(
                    "functions",
                    format!("'{}' is not a valid function name", name),
                ));
            }
        }

        let [open, close] = &self.delimiters;
        if open.is_empty() || close.is_empty() {
            return Err(InspectorError::invalid_config(
                "delimiters",
                "delimiters cannot be empty",
            ));
        }

        let attribute = Regex::new(r"^[A-Za-z_:][-A-Za-z0-9_:.]*$")
            .map_err(|e| InspectorError::invalid_pattern("attribute", e))?;
        for (option, value) in [
            ("keyAttribute", &self.key_attribute),
            ("locationAttribute", &self.location_attribute),
        ] {
            if !attribute.is_match(value) {
                return Err(InspectorError::invalid_config(
                    option,
                    format!("'{}' is not a valid attribute name", value),
                ));
            }
        }
        if self.key_attribute == self.location_attribute {
            return Err(InspectorError::invalid_config(
                "locationAttribute",
                "must differ from keyAttribute",
            ));
        }

        if let OpenStrategy::EditorUrl { template } = &self.open {
            if !template.contains("{file}") {
                return Err(InspectorError::invalid_config(
                    "open.template",
                    "editor URL template must contain {file}",
                ));
            }
        }

        Ok(())
    }
}
