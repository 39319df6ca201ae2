//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use super::schema;
use crate::Result;
use crate::snippet::Snippet;

/// SQLite-backed store for the snippets table.
///
/// Holds the single process-wide connection; one store is opened per CLI
/// invocation and released at process exit. Each operation runs one
/// parameterized statement whose handle is scoped to the call.
pub struct SnippetStore {
    conn: Connection,
}

impl SnippetStore {
    /// Open a database file.
    ///
    /// The snippets table must already exist (external setup step); no DDL
    /// runs here, and a missing table surfaces as a storage error on first
    /// use.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database with the schema applied (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Apply the schema statements.
    ///
    /// This is the external setup step's job for file databases; exposed so
    /// setup tooling and tests can run it against a fresh file.
    pub fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Store a snippet, updating message and hidden in place if the keyword
    /// already exists.
    ///
    /// Single upsert with an explicit conflict target, so a duplicate
    /// keyword updates while any other failure surfaces directly.
    pub fn put(&self, snippet: &Snippet) -> Result<()> {
        tracing::info!(
            "Storing snippet {:?}: {:?}",
            snippet.keyword,
            snippet.message
        );
        self.conn.execute(
            r#"
            INSERT INTO snippets (keyword, message, hidden)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(keyword) DO UPDATE SET
                message = excluded.message,
                hidden = excluded.hidden
            "#,
            params![snippet.keyword, snippet.message, snippet.hidden],
        )?;
        tracing::debug!("Snippet {:?} stored", snippet.keyword);
        Ok(())
    }

    /// Get the message stored under a keyword, or `None` if absent
    pub fn get(&self, keyword: &str) -> Result<Option<String>> {
        tracing::info!("Querying snippet {:?}", keyword);
        let message = self
            .conn
            .query_row(
                "SELECT message FROM snippets WHERE keyword = ?1",
                [keyword],
                |row| row.get(0),
            )
            .optional()?;
        tracing::debug!("Query {:?} found = {}", keyword, message.is_some());
        Ok(message)
    }

    /// List all visible keywords, ascending
    pub fn catalog(&self) -> Result<Vec<String>> {
        tracing::info!("Listing visible keywords");
        let mut stmt = self
            .conn
            .prepare("SELECT keyword FROM snippets WHERE NOT hidden ORDER BY keyword ASC")?;

        let keywords = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        tracing::debug!("Catalog has {} visible keywords", keywords.len());
        Ok(keywords)
    }

    /// Find messages whose keyword matches a SQL LIKE pattern.
    ///
    /// The pattern is bound verbatim; callers embed `%` wildcards
    /// themselves. Matching is on `keyword`, not `message`.
    pub fn search(&self, pattern: &str) -> Result<Vec<String>> {
        tracing::info!("Searching keywords matching {:?}", pattern);
        let mut stmt = self
            .conn
            .prepare("SELECT message FROM snippets WHERE keyword LIKE ?1")?;

        let messages = stmt
            .query_map([pattern], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        tracing::debug!("Search {:?} matched {} rows", pattern, messages.len());
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(keyword: &str, message: &str, hidden: bool) -> Snippet {
        Snippet::new(keyword, message, hidden)
    }

    #[test]
    fn test_put_then_get_round_trip() {
        let store = SnippetStore::open_in_memory().unwrap();

        store
            .put(&sample("greeting", "hello world", false))
            .unwrap();

        let message = store.get("greeting").unwrap();
        assert_eq!(message.as_deref(), Some("hello world"));
    }

    #[test]
    fn test_put_updates_in_place() {
        let store = SnippetStore::open_in_memory().unwrap();

        store
            .put(&sample("greeting", "hello world", false))
            .unwrap();
        store.put(&sample("greeting", "hi", false)).unwrap();

        assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hi"));
        // Update, not duplication: still one visible keyword
        assert_eq!(store.catalog().unwrap(), vec!["greeting"]);
    }

    #[test]
    fn test_put_can_toggle_hidden() {
        let store = SnippetStore::open_in_memory().unwrap();

        store.put(&sample("secret", "shh", false)).unwrap();
        assert_eq!(store.catalog().unwrap(), vec!["secret"]);

        store.put(&sample("secret", "shh", true)).unwrap();
        assert!(store.catalog().unwrap().is_empty());
    }

    #[test]
    fn test_get_unknown_keyword_is_none() {
        let store = SnippetStore::open_in_memory().unwrap();

        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_catalog_sorted_and_excludes_hidden() {
        let store = SnippetStore::open_in_memory().unwrap();

        store.put(&sample("zebra", "stripes", false)).unwrap();
        store.put(&sample("secret", "shh", true)).unwrap();
        store.put(&sample("apple", "fruit", false)).unwrap();

        assert_eq!(store.catalog().unwrap(), vec!["apple", "zebra"]);
        // Hidden snippets stay retrievable by keyword
        assert_eq!(store.get("secret").unwrap().as_deref(), Some("shh"));
    }

    #[test]
    fn test_catalog_empty_when_no_visible_rows() {
        let store = SnippetStore::open_in_memory().unwrap();

        assert!(store.catalog().unwrap().is_empty());

        store.put(&sample("secret", "shh", true)).unwrap();
        assert!(store.catalog().unwrap().is_empty());
    }

    #[test]
    fn test_search_pattern_is_verbatim() {
        let store = SnippetStore::open_in_memory().unwrap();

        store.put(&sample("greeting", "hello world", false)).unwrap();
        store.put(&sample("greet", "hi", false)).unwrap();

        // No implicit wildcards: a bare substring matches only exactly
        assert_eq!(store.search("greet%").unwrap().len(), 2);
        assert_eq!(store.search("greet").unwrap(), vec!["hi"]);
        assert!(store.search("eet").unwrap().is_empty());
    }

    #[test]
    fn test_search_matches_keyword_not_message() {
        let store = SnippetStore::open_in_memory().unwrap();

        store.put(&sample("greeting", "hello world", false)).unwrap();

        assert!(store.search("%hello%").unwrap().is_empty());
        assert_eq!(store.search("%greet%").unwrap(), vec!["hello world"]);
    }

    #[test]
    fn test_search_includes_hidden_rows() {
        let store = SnippetStore::open_in_memory().unwrap();

        store.put(&sample("secret", "shh", true)).unwrap();

        assert_eq!(store.search("%secret%").unwrap(), vec!["shh"]);
    }

    #[test]
    fn test_open_without_setup_fails_on_first_use() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnippetStore::open(&dir.path().join("snippets.db")).unwrap();

        // No external setup ran, so the table is missing
        assert!(store.get("anything").is_err());
    }
}
