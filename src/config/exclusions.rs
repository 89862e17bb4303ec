use std::path::Path;

/// Directories never worth scanning for components
pub fn default_exclusions() -> Vec<&'static str> {
    vec![
        ".git",
        ".svn",
        ".hg",
        ".idea",
        ".vscode",
        "node_modules",
        "dist",
        "build",
        "coverage",
        ".nuxt",
        ".output",
        ".vite",
    ]
}

/// Whether any component of `path` names an excluded directory
pub fn is_excluded(path: &Path, exclusions: &[String]) -> bool {
    path.components().any(|component| {
        let name = component.as_os_str().to_string_lossy();
        exclusions.iter().any(|ex| ex == name.as_ref())
    })
}
