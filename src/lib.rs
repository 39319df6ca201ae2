//! # Snips - Snippet Store CLI
//!
//! Store and retrieve short named snippets of text in one SQLite table.
//!
//! Snips provides:
//! - A `snippets(keyword, message, hidden)` table as the system of record
//! - Four operations: put (store-or-update), get, catalog, search
//! - A clap-based CLI dispatching one operation per invocation

pub mod config;
pub mod output;
pub mod snippet;
pub mod storage;

// Re-exports for convenient access
pub use snippet::Snippet;
pub use storage::SnippetStore;

/// Result type alias for Snips operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Snips operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}
