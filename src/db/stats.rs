//! Aggregate statistics over the entries table.
//!
//! Everything here is computed on demand from the stored rows; nothing is
//! cached or maintained incrementally.

use crate::constants::{DATE_FORMAT_ISO, SENTIMENT_POSITIVE};
use crate::errors::{AppResult, DatabaseError};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use tracing::debug;

/// Overall journal statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Count of all entries.
    pub total_entries: i64,
    /// Sum of `word_count` across all entries; 0 when there are none.
    pub total_words: i64,
    /// Mean signed sentiment over labeled entries, `None` when no entry
    /// carries a label. Positive labels contribute their score, all other
    /// labels contribute the negated score, so the scale is centered at zero.
    pub avg_sentiment: Option<f64>,
    /// Consecutive calendar days with at least one entry, counted backward
    /// from the most recent entry's date.
    pub current_streak: i64,
}

/// Computes the full statistics bundle.
///
/// # Errors
///
/// Returns an error if any of the underlying queries fail.
pub fn collect_stats(conn: &Connection) -> AppResult<Stats> {
    debug!("Collecting statistics");

    let total_entries: i64 = conn
        .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
        .map_err(DatabaseError::Sqlite)?;

    let total_words: i64 = conn
        .query_row(
            "SELECT COALESCE(SUM(word_count), 0) FROM entries",
            [],
            |row| row.get(0),
        )
        .map_err(DatabaseError::Sqlite)?;

    // AVG over zero rows is NULL, which maps to None
    let avg_sentiment: Option<f64> = conn
        .query_row(
            r#"
            SELECT AVG(CASE
                WHEN sentiment_label = ?1 THEN sentiment_score
                ELSE -sentiment_score
            END)
            FROM entries
            WHERE sentiment_label IS NOT NULL
            "#,
            params![SENTIMENT_POSITIVE],
            |row| row.get(0),
        )
        .map_err(DatabaseError::Sqlite)?;

    let current_streak = streak_from_dates(&distinct_dates_desc(conn)?);

    Ok(Stats {
        total_entries,
        total_words,
        avg_sentiment,
        current_streak,
    })
}

/// Returns the distinct calendar dates of all entries, newest first.
///
/// Rows whose timestamp SQLite cannot interpret as a date are skipped rather
/// than failing the whole aggregate.
fn distinct_dates_desc(conn: &Connection) -> AppResult<Vec<NaiveDate>> {
    let mut stmt = conn
        .prepare("SELECT DISTINCT DATE(timestamp) AS day FROM entries ORDER BY day DESC")
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt
        .query_map([], |row| row.get::<_, Option<String>>(0))
        .map_err(DatabaseError::Sqlite)?;

    let mut dates = Vec::new();
    for row in rows {
        let day = row.map_err(DatabaseError::Sqlite)?;
        if let Some(day) = day {
            if let Ok(date) = NaiveDate::parse_from_str(&day, DATE_FORMAT_ISO) {
                dates.push(date);
            }
        }
    }
    Ok(dates)
}

/// Walks a descending list of distinct dates and counts the run of
/// one-day gaps starting at the newest date.
///
/// The streak breaks at the first gap larger than one day; dates behind the
/// gap never count, even if they form a longer run of their own.
fn streak_from_dates(dates: &[NaiveDate]) -> i64 {
    if dates.is_empty() {
        return 0;
    }

    let mut streak = 1;
    for pair in dates.windows(2) {
        if pair[0].signed_duration_since(pair[1]).num_days() == 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}
