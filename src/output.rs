//! Rendering of operation results into user-facing lines.
//!
//! Expected absence (unknown keyword, empty catalog, no search matches) is
//! rendered as a sentinel line here; the store itself reports absence as
//! `None` or an empty sequence.

use crate::snippet::Snippet;

/// Confirmation line for a stored snippet
pub fn stored(snippet: &Snippet) -> String {
    format!(
        "Stored {:?} as {:?}, hidden is {}",
        snippet.message, snippet.keyword, snippet.hidden
    )
}

/// Retrieved-snippet line, or the not-found sentinel
pub fn retrieved(message: Option<&str>) -> String {
    match message {
        Some(message) => format!("Retrieved snippet: {message:?}"),
        None => "Error! snippet not found!".to_string(),
    }
}

/// Visible keywords one per line, or the empty sentinel
pub fn catalog(keywords: &[String]) -> String {
    if keywords.is_empty() {
        "Empty table!".to_string()
    } else {
        keywords.join("\n")
    }
}

/// Matching messages one per line, or the no-match sentinel embedding the
/// searched pattern
pub fn search(pattern: &str, messages: &[String]) -> String {
    if messages.is_empty() {
        format!("No snippet contains {pattern}")
    } else {
        messages.join("\n")
    }
}
