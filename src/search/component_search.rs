use crate::config::is_excluded;
use crate::error::Result;
use crate::transform::{TranslationMarker, Transformer};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Markers that would be emitted for one component
#[derive(Debug, Clone)]
pub struct ComponentMatch {
    pub path: PathBuf,
    pub markers: Vec<TranslationMarker>,
}

/// A component that could not be processed
#[derive(Debug, Clone)]
pub struct SkippedComponent {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of scanning a directory tree
#[derive(Debug, Default)]
pub struct ScanReport {
    pub components: Vec<ComponentMatch>,
    pub skipped: Vec<SkippedComponent>,
    /// Number of `.vue` files visited
    pub visited: usize,
}

impl ScanReport {
    pub fn marker_count(&self) -> usize {
        self.components.iter().map(|c| c.markers.len()).sum()
    }
}

/// Walks a project for `.vue` files and runs the transform over each
pub struct ComponentSearcher {
    base_dir: PathBuf,
    exclusions: Vec<String>,
    respect_gitignore: bool,
}

impl ComponentSearcher {
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            exclusions: Vec::new(),
            respect_gitignore: true,
        }
    }

    pub fn add_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.exclusions.extend(exclusions);
        self
    }

    /// Set whether to respect .gitignore files (default: true)
    pub fn respect_gitignore(mut self, value: bool) -> Self {
        self.respect_gitignore = value;
        self
    }

    /// Every `.vue` file under the base directory, sorted by path
    pub fn components(&self) -> Vec<PathBuf> {
        let walker = WalkBuilder::new(&self.base_dir)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .require_git(false)
            .hidden(false)
            .build();

        let mut paths: Vec<PathBuf> = walker
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().map(|ft| ft.is_file()).unwrap_or(false))
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "vue"))
            .filter(|path| {
                let relative = path.strip_prefix(&self.base_dir).unwrap_or(path.as_path());
                !is_excluded(relative, &self.exclusions)
            })
            .collect();
        paths.sort();
        paths
    }

    /// Transform every component and collect the markers it would receive
    pub fn scan(&self, transformer: &Transformer) -> Result<ScanReport> {
        let mut report = ScanReport::default();

        for path in self.components() {
            report.visited += 1;
            let code = match fs::read_to_string(&path) {
                Ok(code) => code,
                Err(e) => {
                    report.skipped.push(SkippedComponent {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let id = module_id(&path);
            match transformer.try_transform(&code, &id) {
                Ok(Some(output)) => report.components.push(ComponentMatch {
                    path,
                    markers: output.markers,
                }),
                Ok(None) => {}
                Err(e) => report.skipped.push(SkippedComponent {
                    path,
                    reason: e.to_string(),
                }),
            }
        }

        Ok(report)
    }
}

/// Module id for a path on disk, with forward slashes like bundler ids
pub fn module_id(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InspectorConfig;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_components_found_and_excluded() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "src/App.vue", "<template></template>");
        write(temp_dir.path(), "src/main.ts", "export {}");
        write(temp_dir.path(), "node_modules/lib/Button.vue", "<template></template>");

        let searcher = ComponentSearcher::new(temp_dir.path().to_path_buf())
            .add_exclusions(vec!["node_modules".to_string()]);
        let components = searcher.components();

        assert_eq!(components.len(), 1);
        assert!(components[0].ends_with("src/App.vue"));
    }

    #[test]
    fn test_scan_collects_markers_and_failures() {
        let temp_dir = TempDir::new().unwrap();
        write(
            temp_dir.path(),
            "src/A.vue",
            "<template>\n<p>{{ t('a') }}</p>\n<p>{{ t('b') }}</p>\n</template>",
        );
        write(temp_dir.path(), "src/B.vue", "<template><p>plain</p></template>");
        write(temp_dir.path(), "src/Broken.vue", "<template><p>{{ t('c') }}</p>");

        let config = InspectorConfig::default().with_root(temp_dir.path().to_path_buf());
        let transformer = Transformer::new(&config).unwrap();
        let report = ComponentSearcher::new(temp_dir.path().to_path_buf())
            .scan(&transformer)
            .unwrap();

        assert_eq!(report.visited, 3);
        assert_eq!(report.components.len(), 1);
        assert_eq!(report.marker_count(), 2);
        assert_eq!(report.components[0].markers[0].file, "src/A.vue");
        assert_eq!(report.skipped.len(), 1);
        assert!(report.skipped[0].path.ends_with("src/Broken.vue"));
    }
}
