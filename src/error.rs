use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for inspector operations
#[derive(Debug, Error)]
pub enum InspectorError {
    /// The component file could not be split into blocks
    #[error("Malformed component file: {reason}\n\nTip: Check that every <template> tag is closed")]
    MalformedSfc { reason: String },

    /// A configuration value was rejected
    #[error("Invalid configuration option '{option}': {reason}")]
    InvalidConfig { option: String, reason: String },

    /// A detection pattern built from the configuration failed to compile
    #[error("Failed to build pattern for '{source_text}': {reason}")]
    InvalidPattern { source_text: String, reason: String },

    /// Failed to read a configuration file
    #[error("Failed to parse config file {file}:\n{reason}\n\nTip: The config file must be a JSON object")]
    ConfigParse { file: PathBuf, reason: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InspectorError {
    /// Create a MalformedSfc error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedSfc {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            option: option.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidPattern error from the text the pattern was built from
    pub fn invalid_pattern(source_text: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            source_text: source_text.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a ConfigParse error
    pub fn config_parse(file: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ConfigParse {
            file: file.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for InspectorError
pub type Result<T> = std::result::Result<T, InspectorError>;
