pub mod exclusions;
pub mod options;
pub mod patterns;

pub use exclusions::{default_exclusions, is_excluded};
pub use options::{
    ApplyMode, InspectorConfig, Modifier, OpenStrategy, COMPLEX_EXPRESSION_KEY, CONFIG_FILE_NAME,
};
pub use patterns::{call_patterns, CallPatterns};
