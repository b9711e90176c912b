//! End-to-end tests for the entry store, driven through the `Database`
//! handle the way the application uses it: one pooled connection per
//! operation against a real on-disk database.

use mull::analysis::{Analysis, Sentiment};
use mull::db::{entries, prefs, stats, Database};
use rusqlite::params;
use tempfile::TempDir;

fn open_test_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open(&temp_dir.path().join("journal.db")).unwrap();
    db.initialize_schema().unwrap();
    (temp_dir, db)
}

fn analysis_with_sentiment(label: &str, score: f64) -> Analysis {
    Analysis {
        word_count: 5,
        token_count: 6,
        unique_words: 5,
        sentiment: Some(Sentiment {
            label: label.to_string(),
            score,
        }),
        themes: vec!["health".to_string(), "gratitude".to_string()],
    }
}

/// Inserts a row with a controlled timestamp. The store assigns wall-clock
/// timestamps on create, so date-sensitive scenarios write rows directly.
fn insert_dated(db: &Database, timestamp: &str, word_count: i64) {
    let conn = db.get_conn().unwrap();
    conn.execute(
        "INSERT INTO entries (timestamp, content, word_count, themes) VALUES (?1, 'dated', ?2, '[]')",
        params![timestamp, word_count],
    )
    .unwrap();
}

#[test]
fn test_create_then_get_matches_inputs() {
    let (_guard, db) = open_test_db();
    let conn = db.get_conn().unwrap();

    let analysis = analysis_with_sentiment("POSITIVE", 0.87);
    let id = entries::create_entry(&conn, "walked by the river", Some("Anything new?"), &analysis)
        .unwrap();
    drop(conn);

    let conn = db.get_conn().unwrap();
    let entry = entries::get_entry(&conn, id).unwrap().unwrap();

    assert_eq!(entry.content, "walked by the river");
    assert_eq!(entry.prompt.as_deref(), Some("Anything new?"));
    assert_eq!(entry.word_count, 5);
    assert_eq!(entry.token_count, 6);
    assert_eq!(entry.unique_words, 5);
    assert_eq!(entry.sentiment_label.as_deref(), Some("POSITIVE"));
    assert_eq!(entry.sentiment_score, Some(0.87));
    assert_eq!(
        entry.themes,
        vec!["health".to_string(), "gratitude".to_string()]
    );
}

#[test]
fn test_list_returns_all_in_descending_order() {
    let (_guard, db) = open_test_db();
    insert_dated(&db, "2024-03-01T08:00:00", 1);
    insert_dated(&db, "2024-03-03T08:00:00", 1);
    insert_dated(&db, "2024-03-02T08:00:00", 1);

    let conn = db.get_conn().unwrap();
    let all = entries::list_entries(&conn, None).unwrap();
    let timestamps: Vec<&str> = all.iter().map(|e| e.timestamp.as_str()).collect();
    assert_eq!(
        timestamps,
        vec![
            "2024-03-03T08:00:00",
            "2024-03-02T08:00:00",
            "2024-03-01T08:00:00"
        ]
    );

    // limit returns a prefix of the same order
    let limited = entries::list_entries(&conn, Some(2)).unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].timestamp, all[0].timestamp);
    assert_eq!(limited[1].timestamp, all[1].timestamp);
}

#[test]
fn test_delete_then_get_absent() {
    let (_guard, db) = open_test_db();
    let conn = db.get_conn().unwrap();

    let id = entries::create_entry(&conn, "short lived", None, &Analysis::default()).unwrap();
    assert!(entries::delete_entry(&conn, id).unwrap());
    assert!(entries::get_entry(&conn, id).unwrap().is_none());

    assert!(!entries::delete_entry(&conn, 12345).unwrap());
}

#[test]
fn test_update_semantics() {
    let (_guard, db) = open_test_db();
    let conn = db.get_conn().unwrap();

    // Nonexistent id: false, and no row appears
    assert!(!entries::update_entry(&conn, 42, "ghost", &Analysis::default()).unwrap());
    assert!(entries::list_entries(&conn, None).unwrap().is_empty());

    let id = entries::create_entry(
        &conn,
        "first draft",
        Some("What happened?"),
        &analysis_with_sentiment("NEGATIVE", 0.7),
    )
    .unwrap();
    let before = entries::get_entry(&conn, id).unwrap().unwrap();

    let revised = analysis_with_sentiment("POSITIVE", 0.95);
    assert!(entries::update_entry(&conn, id, "second draft", &revised).unwrap());

    let after = entries::get_entry(&conn, id).unwrap().unwrap();
    assert_eq!(after.content, "second draft");
    assert_eq!(after.sentiment_label.as_deref(), Some("POSITIVE"));
    assert_eq!(after.sentiment_score, Some(0.95));
    assert_eq!(after.timestamp, before.timestamp);
    assert_eq!(after.prompt, before.prompt);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn test_preference_round_trip() {
    let (_guard, db) = open_test_db();
    let conn = db.get_conn().unwrap();

    prefs::set_preference(&conn, "k", "v").unwrap();
    assert_eq!(prefs::get_preference(&conn, "k", "default").unwrap(), "v");
    assert_eq!(
        prefs::get_preference(&conn, "missing", "default").unwrap(),
        "default"
    );
}

#[test]
fn test_streak_consecutive_then_gap() {
    let (_guard, db) = open_test_db();
    insert_dated(&db, "2024-01-01T09:00:00", 10);
    insert_dated(&db, "2024-01-02T09:00:00", 10);
    insert_dated(&db, "2024-01-03T09:00:00", 10);

    let conn = db.get_conn().unwrap();
    assert_eq!(stats::collect_stats(&conn).unwrap().current_streak, 3);
    drop(conn);

    // A fourth entry dated 01-05 skips 01-04: the newest date has no
    // predecessor one day prior, so the streak collapses to 1
    insert_dated(&db, "2024-01-05T09:00:00", 10);
    let conn = db.get_conn().unwrap();
    assert_eq!(stats::collect_stats(&conn).unwrap().current_streak, 1);
}

#[test]
fn test_avg_sentiment_signed_mean() {
    let (_guard, db) = open_test_db();
    let conn = db.get_conn().unwrap();

    entries::create_entry(&conn, "up", None, &analysis_with_sentiment("POSITIVE", 0.9)).unwrap();
    entries::create_entry(&conn, "down", None, &analysis_with_sentiment("NEGATIVE", 0.8)).unwrap();

    let stats = stats::collect_stats(&conn).unwrap();
    let avg = stats.avg_sentiment.expect("expected an average");
    assert!((avg - 0.05).abs() < 1e-9, "got {}", avg);
}

#[test]
fn test_avg_sentiment_absent_without_labels() {
    let (_guard, db) = open_test_db();
    let conn = db.get_conn().unwrap();

    entries::create_entry(&conn, "unlabeled", None, &Analysis::default()).unwrap();
    assert_eq!(stats::collect_stats(&conn).unwrap().avg_sentiment, None);
}

#[test]
fn test_clear_all_preserves_preferences() {
    let (_guard, db) = open_test_db();
    let conn = db.get_conn().unwrap();

    entries::create_entry(&conn, "one", None, &Analysis::default()).unwrap();
    entries::create_entry(&conn, "two", None, &Analysis::default()).unwrap();
    prefs::set_preference(&conn, "reminder_time", "21:00").unwrap();

    entries::clear_entries(&conn).unwrap();

    assert_eq!(stats::collect_stats(&conn).unwrap().total_entries, 0);
    assert_eq!(
        prefs::get_preference(&conn, "reminder_time", "unset").unwrap(),
        "21:00"
    );
}

#[test]
fn test_ids_increase_and_are_not_reused() {
    let (_guard, db) = open_test_db();
    let conn = db.get_conn().unwrap();

    let first = entries::create_entry(&conn, "a", None, &Analysis::default()).unwrap();
    let second = entries::create_entry(&conn, "b", None, &Analysis::default()).unwrap();
    assert!(second > first);

    entries::delete_entry(&conn, second).unwrap();
    let third = entries::create_entry(&conn, "c", None, &Analysis::default()).unwrap();
    assert!(third > second);
}

#[test]
fn test_date_range_through_store() {
    let (_guard, db) = open_test_db();
    insert_dated(&db, "2024-06-01T12:00:00", 1);
    insert_dated(&db, "2024-06-15T12:00:00", 1);
    insert_dated(&db, "2024-07-01T12:00:00", 1);

    let conn = db.get_conn().unwrap();
    let june = entries::list_entries_by_date_range(&conn, "2024-06-01", "2024-06-30").unwrap();
    assert_eq!(june.len(), 2);
    assert_eq!(june[0].timestamp, "2024-06-15T12:00:00");
    assert_eq!(june[1].timestamp, "2024-06-01T12:00:00");
}
