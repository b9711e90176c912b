//! User preference storage.
//!
//! Preferences are plain key/value strings with upsert semantics: setting an
//! existing key overwrites its value, and no history is kept. They live in
//! their own table, fully independent of entries.

use crate::errors::{AppResult, DatabaseError};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

/// Returns the stored value for `key`, or `default` if the key is absent.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn get_preference(conn: &Connection, key: &str, default: &str) -> AppResult<String> {
    debug!("Getting preference '{}'", key);

    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(DatabaseError::Sqlite)?;

    Ok(value.unwrap_or_else(|| default.to_string()))
}

/// Upserts a preference. Later calls with the same key overwrite the value.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn set_preference(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    debug!("Setting preference '{}'", key);

    conn.execute(
        r#"
        INSERT INTO preferences (key, value) VALUES (?1, ?2)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value
        "#,
        params![key, value],
    )
    .map_err(DatabaseError::Sqlite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::schema::create_tables(&conn).unwrap();
        conn
    }

    #[test]
    fn test_round_trip() {
        let conn = setup_test_db();

        set_preference(&conn, "daily_prompt", "What went well?").unwrap();
        let value = get_preference(&conn, "daily_prompt", "default").unwrap();
        assert_eq!(value, "What went well?");
    }

    #[test]
    fn test_missing_key_returns_default() {
        let conn = setup_test_db();
        let value = get_preference(&conn, "missing", "fallback").unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_set_overwrites() {
        let conn = setup_test_db();

        set_preference(&conn, "theme", "light").unwrap();
        set_preference(&conn, "theme", "dark").unwrap();

        let value = get_preference(&conn, "theme", "none").unwrap();
        assert_eq!(value, "dark");

        // Still exactly one row for the key
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM preferences WHERE key = 'theme'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }
}
