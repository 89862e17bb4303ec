use serde::Serialize;
use std::fmt;

/// Location-bearing metadata attached to one translated interpolation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationMarker {
    /// Translation key, or the complex-expression placeholder
    pub key: String,
    /// Module path as written into the markup
    pub file: String,
    /// 1-based line of the translation call in the component file
    pub line: usize,
    /// 1-based column of the translation call in the component file
    pub column: usize,
}

impl TranslationMarker {
    /// `path:line:column`, the value of the location attribute
    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.file, self.line, self.column)
    }

    /// Wrap an interpolation's source text in a marker element
    pub fn wrap(&self, interpolation: &str, key_attribute: &str, location_attribute: &str) -> String {
        format!(
            r#"<span {}="{}" {}="{}">{}</span>"#,
            key_attribute,
            html_escape::encode_double_quoted_attribute(&self.key),
            location_attribute,
            html_escape::encode_double_quoted_attribute(&self.location()),
            interpolation
        )
    }
}

impl fmt::Display for TranslationMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key, self.location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(key: &str) -> TranslationMarker {
        TranslationMarker {
            key: key.to_string(),
            file: "src/App.vue".to_string(),
            line: 3,
            column: 12,
        }
    }

    #[test]
    fn test_location() {
        assert_eq!(marker("title").location(), "src/App.vue:3:12");
    }

    #[test]
    fn test_wrap() {
        let wrapped = marker("title").wrap("{{ $t('title') }}", "data-i18n", "data-file-path");
        assert_eq!(
            wrapped,
            r#"<span data-i18n="title" data-file-path="src/App.vue:3:12">{{ $t('title') }}</span>"#
        );
    }

    #[test]
    fn test_wrap_escapes_attribute_values() {
        let wrapped = marker(r#"say "hi" & <bye>"#).wrap("{{ x }}", "data-i18n", "data-file-path");
        assert!(wrapped.contains("&quot;hi&quot;"));
        assert!(wrapped.contains("&amp;"));
        assert!(!wrapped.contains(r#""hi""#));
    }

    #[test]
    fn test_display() {
        assert_eq!(marker("title").to_string(), "title (src/App.vue:3:12)");
    }
}
