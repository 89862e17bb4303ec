use crate::config::{InspectorConfig, OpenStrategy};
use crate::error::{InspectorError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// URL the dev server exposes the overlay script under
pub const CLIENT_PUBLIC_PATH: &str = "/@i18n-inspector/client.js";

/// `localStorage` key holding the "highlight enabled" preference
pub const STORAGE_KEY: &str = "i18n-inspector:highlight";

const CLIENT_TEMPLATE: &str = include_str!("client.js");
const OPTIONS_PLACEHOLDER: &str = "__I18N_INSPECTOR_OPTIONS__";

/// Closing tags the script is inserted before, in order of preference
static INSERTION_POINTS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"(?i)</head\s*>").unwrap(),
        Regex::new(r"(?i)</body\s*>").unwrap(),
    ]
});

/// Options embedded into the client script as a JSON literal
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientOptions<'a> {
    key_attribute: &'a str,
    location_attribute: &'a str,
    modifier: &'static str,
    modifier_key: &'static str,
    open: &'a OpenStrategy,
    root: String,
    highlight_color: &'a str,
    highlight_by_default: bool,
    storage_key: &'static str,
}

/// The browser overlay, rendered once per configuration
#[derive(Debug, Clone)]
pub struct ClientScript {
    source: String,
}

impl ClientScript {
    pub fn new(config: &InspectorConfig) -> Result<Self> {
        let options = ClientOptions {
            key_attribute: &config.key_attribute,
            location_attribute: &config.location_attribute,
            modifier: config.modifier.event_property(),
            modifier_key: config.modifier.key_name(),
            open: &config.open,
            root: config
                .root
                .as_ref()
                .map(|root| root.to_string_lossy().replace('\\', "/"))
                .unwrap_or_default(),
            highlight_color: &config.highlight_color,
            highlight_by_default: config.highlight_by_default,
            storage_key: STORAGE_KEY,
        };
        let json = serde_json::to_string(&options)
            .map_err(|e| InspectorError::invalid_config("overlay", e.to_string()))?;

        Ok(Self {
            source: CLIENT_TEMPLATE.replace(OPTIONS_PLACEHOLDER, &json),
        })
    }

    /// The ES module served to the browser
    pub fn render(&self) -> &str {
        &self.source
    }
}

/// Insert the overlay `<script>` tag into an HTML document.
///
/// The tag goes before `</head>`, else before `</body>`, else at the end.
/// Documents that already reference the script are returned unchanged.
pub fn inject_client_tag(html: &str) -> String {
    if html.contains(CLIENT_PUBLIC_PATH) {
        return html.to_string();
    }

    let tag = format!(
        r#"<script type="module" src="{}"></script>"#,
        CLIENT_PUBLIC_PATH
    );

    for pattern in INSERTION_POINTS.iter() {
        if let Some(m) = pattern.find(html) {
            let mut output = String::with_capacity(html.len() + tag.len() + 1);
            output.push_str(&html[..m.start()]);
            output.push_str(&tag);
            output.push('\n');
            output.push_str(&html[m.start()..]);
            return output;
        }
    }

    let mut output = html.to_string();
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    output.push_str(&tag);
    output.push('\n');
    output
}
