use crate::search::ScanReport;
use colored::Colorize;
use std::path::Path;

/// Formatter for rendering scan results for a terminal
pub struct MarkerFormatter {
    max_width: usize,
}

impl MarkerFormatter {
    /// Create a new MarkerFormatter with default width (80 columns)
    pub fn new() -> Self {
        Self { max_width: 80 }
    }

    /// Create a MarkerFormatter with custom width
    pub fn with_width(max_width: usize) -> Self {
        Self { max_width }
    }

    /// Format a scan report, grouped by component
    pub fn format(&self, report: &ScanReport, base_dir: &Path) -> String {
        let mut output = String::new();

        for component in &report.components {
            let display = component
                .path
                .strip_prefix(base_dir)
                .unwrap_or(component.path.as_path());
            output.push_str(&format!("{}\n", display.display().to_string().bold()));

            let count = component.markers.len();
            for (i, marker) in component.markers.iter().enumerate() {
                let branch = if i == count - 1 { "└─> " } else { "├─> " };
                let position = format!("{}:{}", marker.line, marker.column);
                output.push_str(&format!(
                    "{}{} {}\n",
                    branch,
                    position.cyan(),
                    self.truncate(&marker.key, self.max_width.saturating_sub(16))
                ));
            }
        }

        for skipped in &report.skipped {
            output.push_str(&format!(
                "{} {}: {}\n",
                "skipped".yellow(),
                skipped.path.display(),
                skipped.reason.lines().next().unwrap_or_default()
            ));
        }

        if report.components.is_empty() {
            output.push_str(&format!(
                "No translated expressions found in {} component(s)\n",
                report.visited
            ));
        } else {
            output.push_str(&format!(
                "\n{} marker(s) in {} of {} component(s)\n",
                report.marker_count().to_string().green(),
                report.components.len(),
                report.visited
            ));
        }

        output
    }

    /// Truncate a string to fit within max length
    fn truncate(&self, s: &str, max_len: usize) -> String {
        if s.chars().count() <= max_len {
            s.to_string()
        } else {
            let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
            format!("{}...", kept)
        }
    }
}

impl Default for MarkerFormatter {
    fn default() -> Self {
        Self::new()
    }
}
