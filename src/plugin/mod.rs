pub mod hooks;
pub mod inspector;

pub use hooks::{BuildHook, Enforce, Mode, ServedAsset};
pub use inspector::{I18nInspector, CLIENT_MODULE_ID, PLUGIN_NAME, RESOLVED_CLIENT_MODULE_ID};
