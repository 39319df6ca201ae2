//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with one table:
//! - snippets(keyword, message, hidden)
//!
//! The table is created by an external setup step (see [`schema`] for the
//! canonical statement); the store assumes it exists and runs no DDL when
//! opening a file database.

pub mod schema;
pub mod sqlite;

pub use sqlite::SnippetStore;
