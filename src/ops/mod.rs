//! Command handlers.
//!
//! One function per CLI subcommand. Each handler checks a connection out of
//! the pool, performs its single store operation, and prints a plain-text
//! result. Not-found outcomes are reported as messages, not errors.

use crate::analysis::AnalysisProvider;
use crate::db::entries::{self, Entry};
use crate::db::{prefs, stats, Database};
use crate::errors::{AppError, AppResult};
use std::io::{self, Read, Write};
use tracing::info;

/// Reads entry text from stdin, for piped usage.
fn read_stdin() -> AppResult<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Resolves the entry text from the CLI argument or stdin and rejects
/// blank input. The store itself does not enforce non-emptiness; this is
/// the caller-side check.
fn resolve_text(text: Option<String>) -> AppResult<String> {
    let content = match text {
        Some(t) => t,
        None => read_stdin()?,
    };
    let content = content.trim_end_matches('\n').to_string();
    if content.trim().is_empty() {
        return Err(AppError::Input("Entry text is empty".to_string()));
    }
    Ok(content)
}

fn print_entry(entry: &Entry) {
    println!("[{}] {}", entry.id, entry.timestamp);
    if let Some(prompt) = &entry.prompt {
        println!("  prompt: {}", prompt);
    }
    println!("  {}", entry.content);
    if let Some(label) = &entry.sentiment_label {
        println!(
            "  sentiment: {} ({:.2})",
            label,
            entry.sentiment_score.unwrap_or(0.0)
        );
    }
    if !entry.themes.is_empty() {
        println!("  themes: {}", entry.themes.join(", "));
    }
}

/// Prompts the user for a yes/no answer with a default.
///
/// Returns the default when the user just presses Enter.
fn prompt_yes_no(question: &str, default: bool) -> AppResult<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };

    loop {
        print!("{} {} ", question, hint);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        match input.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer yes or no."),
        }
    }
}

/// Analyzes and persists a new entry.
pub fn write_entry(
    db: &Database,
    provider: &dyn AnalysisProvider,
    text: Option<String>,
    prompt: Option<String>,
) -> AppResult<()> {
    let content = resolve_text(text)?;
    let analysis = provider.analyze(&content);

    let conn = db.get_conn()?;
    let id = entries::create_entry(&conn, &content, prompt.as_deref(), &analysis)?;

    info!("Entry {} created", id);
    println!("Entry {} saved", id);
    Ok(())
}

/// Lists entries, most recent first.
pub fn list(db: &Database, limit: Option<i64>) -> AppResult<()> {
    let conn = db.get_conn()?;
    let entries = entries::list_entries(&conn, limit)?;

    if entries.is_empty() {
        println!("No entries yet");
        return Ok(());
    }
    for entry in &entries {
        print_entry(entry);
    }
    Ok(())
}

/// Shows a single entry by id.
pub fn show(db: &Database, id: i64) -> AppResult<()> {
    let conn = db.get_conn()?;
    match entries::get_entry(&conn, id)? {
        Some(entry) => print_entry(&entry),
        None => println!("Entry {} not found", id),
    }
    Ok(())
}

/// Lists entries between two timestamps, inclusive.
pub fn range(db: &Database, start: &str, end: &str) -> AppResult<()> {
    let conn = db.get_conn()?;
    let entries = entries::list_entries_by_date_range(&conn, start, end)?;

    if entries.is_empty() {
        println!("No entries between {} and {}", start, end);
        return Ok(());
    }
    for entry in &entries {
        print_entry(entry);
    }
    Ok(())
}

/// Replaces an entry's text and re-analyzes it.
pub fn edit(
    db: &Database,
    provider: &dyn AnalysisProvider,
    id: i64,
    text: Option<String>,
) -> AppResult<()> {
    let content = resolve_text(text)?;
    let analysis = provider.analyze(&content);

    let conn = db.get_conn()?;
    if entries::update_entry(&conn, id, &content, &analysis)? {
        println!("Entry {} updated", id);
    } else {
        println!("Entry {} not found", id);
    }
    Ok(())
}

/// Deletes an entry by id.
pub fn delete(db: &Database, id: i64) -> AppResult<()> {
    let conn = db.get_conn()?;
    if entries::delete_entry(&conn, id)? {
        println!("Entry {} deleted", id);
    } else {
        println!("Entry {} not found", id);
    }
    Ok(())
}

/// Deletes every entry, after confirmation unless `yes` is set.
pub fn clear(db: &Database, yes: bool) -> AppResult<()> {
    if !yes && !prompt_yes_no("Delete ALL entries? This cannot be undone.", false)? {
        println!("Aborted");
        return Ok(());
    }

    let conn = db.get_conn()?;
    entries::clear_entries(&conn)?;
    info!("All entries cleared");
    println!("All entries deleted");
    Ok(())
}

/// Prints journal statistics.
pub fn show_stats(db: &Database) -> AppResult<()> {
    let conn = db.get_conn()?;
    let stats = stats::collect_stats(&conn)?;

    println!("Entries:       {}", stats.total_entries);
    println!("Words:         {}", stats.total_words);
    match stats.avg_sentiment {
        Some(avg) => println!("Avg sentiment: {:+.3}", avg),
        None => println!("Avg sentiment: n/a"),
    }
    println!("Streak:        {} day(s)", stats.current_streak);
    Ok(())
}

/// Prints a preference value, falling back to the supplied default.
pub fn pref_get(db: &Database, key: &str, default: &str) -> AppResult<()> {
    let conn = db.get_conn()?;
    let value = prefs::get_preference(&conn, key, default)?;
    println!("{}", value);
    Ok(())
}

/// Sets a preference value.
pub fn pref_set(db: &Database, key: &str, value: &str) -> AppResult<()> {
    let conn = db.get_conn()?;
    prefs::set_preference(&conn, key, value)?;
    println!("{} = {}", key, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_text_rejects_blank() {
        assert!(resolve_text(Some("   ".to_string())).is_err());
        assert!(resolve_text(Some("".to_string())).is_err());
    }

    #[test]
    fn test_resolve_text_strips_trailing_newline() {
        let text = resolve_text(Some("piped input\n".to_string())).unwrap();
        assert_eq!(text, "piped input");
    }

    #[test]
    fn test_resolve_text_keeps_inner_whitespace() {
        let text = resolve_text(Some("line one\nline two".to_string())).unwrap();
        assert_eq!(text, "line one\nline two");
    }
}
