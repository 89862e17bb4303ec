use i18n_inspector::{
    ApplyMode, BuildHook, Enforce, I18nInspector, InspectorConfig, Mode, OpenStrategy,
    CLIENT_PUBLIC_PATH,
};
use i18n_inspector::plugin::{CLIENT_MODULE_ID, RESOLVED_CLIENT_MODULE_ID};
use std::fs;
use std::path::PathBuf;

fn fixture(relative: &str) -> String {
    let path = PathBuf::from("tests/fixtures/project").join(relative);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {}", path.display(), e))
}

fn project_config() -> InspectorConfig {
    let root = std::env::current_dir()
        .unwrap()
        .join("tests/fixtures/project");
    InspectorConfig::from_file(&root.join("i18n-inspector.json"))
        .unwrap()
        .with_root(root)
}

/// Drive the plugin the way a dev server would for one page load
#[test]
fn test_dev_server_page_load() {
    let plugin = I18nInspector::new(&project_config(), Mode::Serve).unwrap();
    assert!(plugin.apply(Mode::Serve));
    assert_eq!(plugin.enforce(), Some(Enforce::Pre));

    let html = plugin.transform_index_html(&fixture("index.html")).unwrap();
    assert!(html.contains(CLIENT_PUBLIC_PATH));

    let asset = plugin.serve(CLIENT_PUBLIC_PATH).unwrap();
    assert!(asset.body.contains(r##""highlightColor":"#ff8800""##));

    let root = project_config().root.unwrap();
    let app_id = root.join("src/App.vue");
    let output = plugin
        .transform(&fixture("src/App.vue"), &app_id.to_string_lossy())
        .unwrap();
    let locations: Vec<String> = output.markers.iter().map(|m| m.location()).collect();
    assert_eq!(locations, vec!["src/App.vue:11:12", "src/App.vue:12:31"]);

    // plain components and non-component modules pass through
    let plain_id = root.join("src/components/Plain.vue");
    assert!(plugin
        .transform(&fixture("src/components/Plain.vue"), &plain_id.to_string_lossy())
        .is_none());
    assert!(plugin.transform("export {}", "/src/main.ts").is_none());
}

#[test]
fn test_production_build_has_markers_but_no_overlay() {
    let plugin = I18nInspector::new(&project_config(), Mode::Build).unwrap();
    assert!(plugin.apply(Mode::Build));

    let output = plugin
        .transform(&fixture("src/App.vue"), "src/App.vue")
        .unwrap();
    assert_eq!(output.markers.len(), 2);

    assert!(plugin.transform_index_html(&fixture("index.html")).is_none());
    assert!(plugin.resolve_id(CLIENT_MODULE_ID).is_none());
    assert!(plugin.load(RESOLVED_CLIENT_MODULE_ID).is_none());
    assert!(plugin.serve(CLIENT_PUBLIC_PATH).is_none());
}

#[test]
fn test_overlay_stays_out_of_build_when_always_applied() {
    let mut config = project_config();
    config.apply = ApplyMode::Always;
    let plugin = I18nInspector::new(&config, Mode::Build).unwrap();
    assert!(plugin.apply(Mode::Build));
    assert!(plugin
        .transform_index_html("<html><head></head><body></body></html>")
        .is_none());
}

#[test]
fn test_serve_only_config_skips_build() {
    let mut config = project_config();
    config.apply = ApplyMode::Serve;
    let plugin = I18nInspector::new(&config, Mode::Build).unwrap();
    assert!(!plugin.apply(Mode::Build));
}

#[test]
fn test_malformed_component_passes_through() {
    let plugin = I18nInspector::new(&project_config(), Mode::Serve).unwrap();
    assert!(plugin
        .transform(&fixture("src/components/Broken.vue"), "src/components/Broken.vue")
        .is_none());
}

#[test]
fn test_nested_templates_and_complex_keys() {
    let plugin = I18nInspector::new(&project_config(), Mode::Serve).unwrap();
    let output = plugin
        .transform(
            &fixture("src/components/SaveBar.vue"),
            "src/components/SaveBar.vue",
        )
        .unwrap();

    let keys: Vec<&str> = output.markers.iter().map(|m| m.key.as_str()).collect();
    assert_eq!(keys, vec!["buttons.save", "buttons.cancel", "complex-expression"]);
    assert!(output.code.contains("<template v-if=\"dirty\">"));
    assert!(output.code.contains("export default {"));
}

#[test]
fn test_custom_delimiters_and_editor_url() {
    let mut config = InspectorConfig::default();
    config.delimiters = ["[[".to_string(), "]]".to_string()];
    config.open = OpenStrategy::EditorUrl {
        template: "idea://open?file={root}/{file}&line={line}".to_string(),
    };
    let plugin = I18nInspector::new(&config, Mode::Serve).unwrap();

    let code = "<template>\n  <p>[[ t('custom') ]] {{ t('ignored') }}</p>\n</template>";
    let output = plugin.transform(code, "Custom.vue").unwrap();
    assert_eq!(output.markers.len(), 1);
    assert_eq!(output.markers[0].location(), "Custom.vue:2:9");
    assert!(output
        .code
        .contains(r#"<span data-i18n="custom" data-file-path="Custom.vue:2:9">[[ t('custom') ]]</span>"#));

    let source = plugin.serve(CLIENT_PUBLIC_PATH).unwrap().body;
    assert!(source.contains("idea://open?file={root}/{file}&line={line}"));
}
