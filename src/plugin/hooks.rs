use crate::transform::TransformOutput;

/// Ordering hint for the host: run before or after its core plugins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enforce {
    Pre,
    Post,
}

/// What the host is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Dev server
    Serve,
    /// Production build
    Build,
}

/// A static response a plugin serves from the dev server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedAsset {
    pub content_type: &'static str,
    pub body: String,
}

/// Hook surface a host build tool calls into.
///
/// Every hook but `name` has a no-op default, mirroring how hosts treat
/// plugins that leave a hook out.
pub trait BuildHook {
    fn name(&self) -> &'static str;

    fn enforce(&self) -> Option<Enforce> {
        None
    }

    /// Whether the plugin takes part in the given mode at all
    fn apply(&self, _mode: Mode) -> bool {
        true
    }

    /// Rewrite a module; `None` leaves it untouched
    fn transform(&self, _code: &str, _id: &str) -> Option<TransformOutput> {
        None
    }

    /// Claim an import specifier; returns the resolved id
    fn resolve_id(&self, _id: &str) -> Option<String> {
        None
    }

    /// Provide the source of a previously resolved id
    fn load(&self, _id: &str) -> Option<String> {
        None
    }

    /// Rewrite the HTML entry document
    fn transform_index_html(&self, _html: &str) -> Option<String> {
        None
    }

    /// Answer a dev-server request path
    fn serve(&self, _path: &str) -> Option<ServedAsset> {
        None
    }
}
