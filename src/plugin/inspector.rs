use crate::config::{ApplyMode, InspectorConfig};
use crate::error::Result;
use crate::overlay::{inject_client_tag, ClientScript, CLIENT_PUBLIC_PATH};
use crate::plugin::hooks::{BuildHook, Enforce, Mode, ServedAsset};
use crate::transform::{TransformOutput, Transformer};

/// Name the plugin registers under
pub const PLUGIN_NAME: &str = "vite-plugin-i18n-attribute";

/// Bare import specifier for the overlay module
pub const CLIENT_MODULE_ID: &str = "virtual:i18n-inspector/client";

/// Resolved id of the overlay module; the NUL prefix keeps other plugins off it
pub const RESOLVED_CLIENT_MODULE_ID: &str = "\0virtual:i18n-inspector/client";

/// The i18n inspector plugin: template transform plus browser overlay.
///
/// `mode` is what the host is doing for this run. Template markers follow
/// the configured [`ApplyMode`]; the overlay hooks only answer in
/// [`Mode::Serve`].
#[derive(Debug, Clone)]
pub struct I18nInspector {
    transformer: Transformer,
    client: ClientScript,
    apply: ApplyMode,
    mode: Mode,
}

impl I18nInspector {
    pub fn new(config: &InspectorConfig, mode: Mode) -> Result<Self> {
        Ok(Self {
            transformer: Transformer::new(config)?,
            client: ClientScript::new(config)?,
            apply: config.apply,
            mode,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn overlay_enabled(&self) -> bool {
        self.mode == Mode::Serve
    }

    pub fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    pub fn client(&self) -> &ClientScript {
        &self.client
    }
}

impl BuildHook for I18nInspector {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn enforce(&self) -> Option<Enforce> {
        Some(Enforce::Pre)
    }

    fn apply(&self, mode: Mode) -> bool {
        match self.apply {
            ApplyMode::Always => true,
            ApplyMode::Serve => mode == Mode::Serve,
            ApplyMode::Build => mode == Mode::Build,
        }
    }

    fn transform(&self, code: &str, id: &str) -> Option<TransformOutput> {
        self.transformer.transform(code, id)
    }

    fn resolve_id(&self, id: &str) -> Option<String> {
        if !self.overlay_enabled() {
            return None;
        }
        (id == CLIENT_MODULE_ID || id == CLIENT_PUBLIC_PATH)
            .then(|| RESOLVED_CLIENT_MODULE_ID.to_string())
    }

    fn load(&self, id: &str) -> Option<String> {
        if !self.overlay_enabled() {
            return None;
        }
        (id == RESOLVED_CLIENT_MODULE_ID).then(|| self.client.render().to_string())
    }

    fn transform_index_html(&self, html: &str) -> Option<String> {
        if !self.overlay_enabled() {
            log::debug!("Skipping overlay injection outside the dev server");
            return None;
        }
        let output = inject_client_tag(html);
        (output != html).then_some(output)
    }

    fn serve(&self, path: &str) -> Option<ServedAsset> {
        if !self.overlay_enabled() {
            return None;
        }
        let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or(path);
        (path == CLIENT_PUBLIC_PATH).then(|| ServedAsset {
            content_type: "application/javascript; charset=utf-8",
            body: self.client.render().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inspector() -> I18nInspector {
        I18nInspector::new(&InspectorConfig::default(), Mode::Serve).unwrap()
    }

    #[test]
    fn test_identity() {
        let plugin = inspector();
        assert_eq!(plugin.name(), "vite-plugin-i18n-attribute");
        assert_eq!(plugin.enforce(), Some(Enforce::Pre));
    }

    #[test]
    fn test_apply_modes() {
        let plugin = inspector();
        assert!(plugin.apply(Mode::Serve));
        assert!(plugin.apply(Mode::Build));

        let mut config = InspectorConfig::default();
        config.apply = ApplyMode::Serve;
        let plugin = I18nInspector::new(&config, Mode::Serve).unwrap();
        assert!(plugin.apply(Mode::Serve));
        assert!(!plugin.apply(Mode::Build));

        config.apply = ApplyMode::Build;
        let plugin = I18nInspector::new(&config, Mode::Build).unwrap();
        assert!(!plugin.apply(Mode::Serve));
        assert!(plugin.apply(Mode::Build));
    }

    #[test]
    fn test_overlay_hooks_silent_in_build() {
        let plugin = I18nInspector::new(&InspectorConfig::default(), Mode::Build).unwrap();
        assert_eq!(plugin.mode(), Mode::Build);
        assert!(plugin
            .transform_index_html("<html><head></head><body></body></html>")
            .is_none());
        assert!(plugin.resolve_id(CLIENT_MODULE_ID).is_none());
        assert!(plugin.resolve_id(CLIENT_PUBLIC_PATH).is_none());
        assert!(plugin.load(RESOLVED_CLIENT_MODULE_ID).is_none());
        assert!(plugin.serve(CLIENT_PUBLIC_PATH).is_none());

        // markers are still emitted for the production bundle
        let output = plugin
            .transform("<template><p>{{ t('a') }}</p></template>", "A.vue")
            .unwrap();
        assert_eq!(output.markers.len(), 1);
    }

    #[test]
    fn test_resolve_and_load_client() {
        let plugin = inspector();
        let resolved = plugin.resolve_id(CLIENT_MODULE_ID).unwrap();
        assert_eq!(resolved, RESOLVED_CLIENT_MODULE_ID);
        assert_eq!(
            plugin.resolve_id(CLIENT_PUBLIC_PATH).as_deref(),
            Some(RESOLVED_CLIENT_MODULE_ID)
        );
        assert!(plugin.resolve_id("vue").is_none());

        let source = plugin.load(&resolved).unwrap();
        assert!(source.contains("__I18N_INSPECTOR__"));
        assert!(plugin.load("src/main.ts").is_none());
    }

    #[test]
    fn test_serve_client_path() {
        let plugin = inspector();
        let asset = plugin.serve("/@i18n-inspector/client.js?t=123").unwrap();
        assert!(asset.content_type.starts_with("application/javascript"));
        assert_eq!(asset.body, plugin.client().render());
        assert!(plugin.serve("/src/main.ts").is_none());
    }

    #[test]
    fn test_transform_index_html() {
        let plugin = inspector();
        let html = "<html><head></head><body></body></html>";
        let output = plugin.transform_index_html(html).unwrap();
        assert!(output.contains(CLIENT_PUBLIC_PATH));
        assert!(plugin.transform_index_html(&output).is_none());
    }

    #[test]
    fn test_transform_hook_delegates() {
        let plugin = inspector();
        let output = plugin
            .transform("<template><p>{{ t('a') }}</p></template>", "A.vue")
            .unwrap();
        assert_eq!(output.markers[0].key, "a");
        assert!(plugin.transform("export {}", "main.ts").is_none());
    }
}
