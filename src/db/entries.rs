//! Entry CRUD operations.
//!
//! This module provides functions for creating, reading, updating, and querying
//! journal entries. Each entry carries the raw text plus the analysis fields
//! derived from it; the analysis fields are written as a unit and replaced as
//! a unit on update.

use crate::analysis::Analysis;
use crate::constants::TIMESTAMP_FORMAT;
use crate::errors::{AppResult, DatabaseError};
use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

/// Represents a journal entry in the database.
#[derive(Debug, Clone)]
pub struct Entry {
    pub id: i64,
    /// Creation time, ISO-8601 local time. Basis for ordering and range queries.
    pub timestamp: String,
    pub content: String,
    /// Prompt shown when the entry was written. Immutable after creation.
    pub prompt: Option<String>,
    pub word_count: i64,
    pub token_count: i64,
    pub unique_words: i64,
    pub sentiment_label: Option<String>,
    pub sentiment_score: Option<f64>,
    /// Theme tags in provider order. Empty when the stored value was absent
    /// or unreadable.
    pub themes: Vec<String>,
    /// Row creation time, server-assigned, never updated.
    pub created_at: String,
}

const ENTRY_COLUMNS: &str = "id, timestamp, content, prompt, word_count, token_count, \
     unique_words, sentiment_label, sentiment_score, themes, created_at";

/// Maps a SELECT row (in `ENTRY_COLUMNS` order) to an `Entry`.
fn entry_from_row(row: &Row) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        timestamp: row.get(1)?,
        content: row.get(2)?,
        prompt: row.get(3)?,
        word_count: row.get(4)?,
        token_count: row.get(5)?,
        unique_words: row.get(6)?,
        sentiment_label: row.get(7)?,
        sentiment_score: row.get(8)?,
        themes: themes_from_stored(row.get(9)?),
        created_at: row.get(10)?,
    })
}

/// Deserializes a stored themes value.
///
/// NULL or unparseable values become an empty list so reads stay resilient
/// to legacy or partially written rows.
fn themes_from_stored(stored: Option<String>) -> Vec<String> {
    stored
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

/// Serializes a themes list for storage.
fn themes_to_stored(themes: &[String]) -> AppResult<String> {
    serde_json::to_string(themes)
        .map_err(|e| DatabaseError::Custom(format!("Failed to serialize themes: {}", e)).into())
}

/// Creates a new journal entry and returns its id.
///
/// The entry timestamp is assigned from the current wall clock; `created_at`
/// is assigned by the database. Whether `content` is non-empty is a caller
/// concern - the store persists whatever it is given.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `content` - The raw entry text
/// * `prompt` - Optional prompt the entry was written against
/// * `analysis` - Derived analysis fields (missing pieces default to zero/absent)
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn create_entry(
    conn: &Connection,
    content: &str,
    prompt: Option<&str>,
    analysis: &Analysis,
) -> AppResult<i64> {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    debug!("Creating entry at {}", timestamp);

    let themes_json = themes_to_stored(&analysis.themes)?;
    let sentiment = analysis.sentiment.as_ref();

    conn.execute(
        r#"
        INSERT INTO entries (
            timestamp, content, prompt, word_count, token_count,
            unique_words, sentiment_label, sentiment_score, themes
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
        params![
            timestamp,
            content,
            prompt,
            analysis.word_count,
            analysis.token_count,
            analysis.unique_words,
            sentiment.map(|s| s.label.as_str()),
            sentiment.map(|s| s.score),
            themes_json,
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    let entry_id = conn.last_insert_rowid();
    debug!("Entry created with id {}", entry_id);
    Ok(entry_id)
}

/// Lists entries ordered by timestamp descending (most recent first).
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `limit` - Maximum number of entries to return; `None` returns all
///
/// # Errors
///
/// Returns an error if the database operation fails. An empty table yields
/// an empty vec, not an error.
pub fn list_entries(conn: &Connection, limit: Option<i64>) -> AppResult<Vec<Entry>> {
    debug!("Listing entries (limit: {:?})", limit);

    // LIMIT -1 means "no limit" in SQLite; the bound is always a parameter,
    // never interpolated into the query text.
    let limit = limit.unwrap_or(-1);

    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM entries ORDER BY timestamp DESC LIMIT ?1",
            ENTRY_COLUMNS
        ))
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt
        .query_map(params![limit], entry_from_row)
        .map_err(DatabaseError::Sqlite)?;

    let entries = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;
    Ok(entries)
}

/// Retrieves an entry by id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no entry has the given id.
pub fn get_entry(conn: &Connection, entry_id: i64) -> AppResult<Option<Entry>> {
    debug!("Getting entry with id {}", entry_id);

    let result = conn
        .query_row(
            &format!("SELECT {} FROM entries WHERE id = ?1", ENTRY_COLUMNS),
            params![entry_id],
            entry_from_row,
        )
        .optional()
        .map_err(DatabaseError::Sqlite)?;

    Ok(result)
}

/// Lists entries whose timestamp falls within `[start, end]` inclusive,
/// ordered by timestamp descending.
///
/// Both bounds are caller-supplied ISO-8601 strings compared lexically;
/// the store does not validate their format.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_entries_by_date_range(
    conn: &Connection,
    start: &str,
    end: &str,
) -> AppResult<Vec<Entry>> {
    debug!("Listing entries between {} and {}", start, end);

    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM entries WHERE timestamp BETWEEN ?1 AND ?2 ORDER BY timestamp DESC",
            ENTRY_COLUMNS
        ))
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt
        .query_map(params![start, end], entry_from_row)
        .map_err(DatabaseError::Sqlite)?;

    let entries = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;
    Ok(entries)
}

/// Overwrites the content and analysis fields of an existing entry.
///
/// `timestamp`, `prompt`, and `created_at` are untouched. Concurrent updates
/// to the same id are not reconciled - last write wins.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(false)` if no entry has the given id.
pub fn update_entry(
    conn: &Connection,
    entry_id: i64,
    content: &str,
    analysis: &Analysis,
) -> AppResult<bool> {
    debug!("Updating entry with id {}", entry_id);

    let themes_json = themes_to_stored(&analysis.themes)?;
    let sentiment = analysis.sentiment.as_ref();

    let rows_affected = conn
        .execute(
            r#"
            UPDATE entries
            SET content = ?1, word_count = ?2, token_count = ?3,
                unique_words = ?4, sentiment_label = ?5,
                sentiment_score = ?6, themes = ?7
            WHERE id = ?8
            "#,
            params![
                content,
                analysis.word_count,
                analysis.token_count,
                analysis.unique_words,
                sentiment.map(|s| s.label.as_str()),
                sentiment.map(|s| s.score),
                themes_json,
                entry_id,
            ],
        )
        .map_err(DatabaseError::Sqlite)?;

    Ok(rows_affected > 0)
}

/// Deletes an entry by id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(false)` if no entry has the given id.
pub fn delete_entry(conn: &Connection, entry_id: i64) -> AppResult<bool> {
    debug!("Deleting entry with id {}", entry_id);

    let rows_affected = conn
        .execute("DELETE FROM entries WHERE id = ?1", params![entry_id])
        .map_err(DatabaseError::Sqlite)?;

    Ok(rows_affected > 0)
}

/// Deletes every entry unconditionally. Preferences are untouched.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn clear_entries(conn: &Connection) -> AppResult<()> {
    debug!("Clearing all entries");

    conn.execute("DELETE FROM entries", [])
        .map_err(DatabaseError::Sqlite)?;
    Ok(())
}
