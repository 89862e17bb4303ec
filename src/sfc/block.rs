/// The root `<template>` block of a single-file component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBlock {
    /// Byte offset of the first content byte (just after the opening tag)
    pub start: usize,
    /// Byte offset one past the last content byte (the `<` of `</template>`)
    pub end: usize,
    /// Value of the `lang` attribute, if any
    pub lang: Option<String>,
    /// Value of the `src` attribute, if any
    pub src: Option<String>,
}

impl TemplateBlock {
    /// Slice the block content out of the component source it was located in
    pub fn content<'a>(&self, code: &'a str) -> &'a str {
        &code[self.start..self.end]
    }

    /// Plain HTML templates are the only ones whose markup can be rewritten
    pub fn is_html(&self) -> bool {
        matches!(self.lang.as_deref(), None | Some("html"))
    }

    /// Template content lives in another file
    pub fn is_external(&self) -> bool {
        self.src.is_some()
    }
}
