//! The Snippet entity

/// A named text entry with a visibility flag.
///
/// `keyword` uniquely identifies the snippet; at most one row per keyword
/// exists in the store. `hidden` excludes the snippet from the catalog
/// listing while still allowing direct retrieval by keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub keyword: String,
    pub message: String,
    pub hidden: bool,
}

impl Snippet {
    pub fn new(keyword: impl Into<String>, message: impl Into<String>, hidden: bool) -> Self {
        Self {
            keyword: keyword.into(),
            message: message.into(),
            hidden,
        }
    }
}
