pub mod config;
pub mod error;
pub mod output;
pub mod overlay;
pub mod plugin;
pub mod search;
pub mod sfc;
pub mod transform;

use std::fs;
use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use config::{ApplyMode, InspectorConfig, Modifier, OpenStrategy};
pub use error::{InspectorError, Result};
pub use output::{MarkerFormatter, SimpleFormatter};
pub use overlay::{inject_client_tag, ClientScript, CLIENT_PUBLIC_PATH, STORAGE_KEY};
pub use plugin::{BuildHook, Enforce, I18nInspector, Mode, ServedAsset};
pub use search::{ComponentSearcher, ScanReport};
pub use sfc::{locate_template, TemplateBlock};
pub use transform::{TransformOutput, Transformer, TranslationMarker};

/// Query parameters for scanning a project
#[derive(Debug, Clone)]
pub struct ScanQuery {
    pub base_dir: Option<PathBuf>,
    pub exclude_patterns: Vec<String>,
    pub respect_gitignore: bool,
}

impl ScanQuery {
    pub fn new() -> Self {
        Self {
            base_dir: None,
            exclude_patterns: Vec::new(),
            respect_gitignore: true,
        }
    }

    pub fn with_base_dir(mut self, base_dir: PathBuf) -> Self {
        self.base_dir = Some(base_dir);
        self
    }

    pub fn with_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.exclude_patterns = exclusions;
        self
    }

    pub fn with_respect_gitignore(mut self, respect_gitignore: bool) -> Self {
        self.respect_gitignore = respect_gitignore;
        self
    }
}

impl Default for ScanQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan a project for components and report the markers each would receive.
///
/// Default exclusions (`node_modules`, `dist`, ...) always apply. When the
/// config has no root, the scanned directory is used so marker paths come
/// out project-relative.
#[must_use = "this function returns a Result that should be handled"]
pub fn run_scan(query: ScanQuery, config: &InspectorConfig) -> Result<ScanReport> {
    let base_dir = query
        .base_dir
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let mut exclusions: Vec<String> = crate::config::default_exclusions()
        .iter()
        .map(|&s| s.to_string())
        .collect();
    exclusions.extend(query.exclude_patterns.clone());

    let config = match config.root {
        Some(_) => config.clone(),
        None => config.clone().with_root(base_dir.clone()),
    };
    let transformer = Transformer::new(&config)?;

    ComponentSearcher::new(base_dir)
        .add_exclusions(exclusions)
        .respect_gitignore(query.respect_gitignore)
        .scan(&transformer)
}

/// Read a component from disk and run the transform hook over it.
///
/// Returns `Ok(None)` when the file needs no rewrite or could not be parsed;
/// parse failures are logged, matching how a host sees the hook behave.
#[must_use = "this function returns a Result that should be handled"]
pub fn transform_file(path: &Path, plugin: &I18nInspector) -> Result<Option<TransformOutput>> {
    let code = fs::read_to_string(path)?;
    let id = search::module_id(path);
    Ok(plugin.transform(&code, &id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_query_builder() {
        let query = ScanQuery::new()
            .with_base_dir(PathBuf::from("web"))
            .with_exclusions(vec!["legacy".to_string()])
            .with_respect_gitignore(false);
        assert_eq!(query.base_dir, Some(PathBuf::from("web")));
        assert_eq!(query.exclude_patterns, vec!["legacy"]);
        assert!(!query.respect_gitignore);
    }

    #[test]
    fn test_run_scan_uses_base_dir_as_root() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(
            src.join("Hello.vue"),
            "<template>\n  <p>{{ $t('hello') }}</p>\n</template>\n",
        )
        .unwrap();
        let legacy = temp_dir.path().join("legacy");
        fs::create_dir_all(&legacy).unwrap();
        fs::write(legacy.join("Old.vue"), "<template>{{ t('old') }}</template>").unwrap();

        let query = ScanQuery::new()
            .with_base_dir(temp_dir.path().to_path_buf())
            .with_exclusions(vec!["legacy".to_string()]);
        let report = run_scan(query, &InspectorConfig::default()).unwrap();

        assert_eq!(report.visited, 1);
        let marker = &report.components[0].markers[0];
        assert_eq!(marker.file, "src/Hello.vue");
        assert_eq!((marker.line, marker.column), (2, 9));
    }

    #[test]
    fn test_transform_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Greeting.vue");
        fs::write(&path, "<template><h1>{{ t('greeting') }}</h1></template>").unwrap();

        let plugin = I18nInspector::new(&InspectorConfig::default(), Mode::Build).unwrap();
        let output = transform_file(&path, &plugin).unwrap().unwrap();
        assert!(output.code.contains(r#"data-i18n="greeting""#));

        let missing = temp_dir.path().join("Missing.vue");
        assert!(transform_file(&missing, &plugin).is_err());
    }
}
