use crate::search::ScanReport;
use crate::transform::TransformOutput;

/// Formatter for simple, machine-readable output (grep-compatible)
pub struct SimpleFormatter;

impl SimpleFormatter {
    pub fn new() -> Self {
        Self
    }

    /// One `file:line:column:key` line per marker
    pub fn format(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        for component in &report.components {
            for marker in &component.markers {
                output.push_str(&format!("{}:{}\n", marker.location(), marker.key));
            }
        }

        output
    }

    /// JSON document describing a single transform, for hosts that shell out
    pub fn format_transform(&self, output: &TransformOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_default()
    }
}

impl Default for SimpleFormatter {
    fn default() -> Self {
        Self::new()
    }
}
