//! Database schema definitions
//!
//! Schema ownership is external: the CLI never runs these statements against
//! a file database. They are published here for the setup step and applied
//! directly only to in-memory databases, which have no external setup.

/// SQL to create the snippets table
pub const CREATE_SNIPPETS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS snippets (
    keyword TEXT PRIMARY KEY,
    message TEXT NOT NULL,
    hidden INTEGER NOT NULL DEFAULT 0
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_SNIPPETS_TABLE]
}
