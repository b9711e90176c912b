/*!
# Mull - A Sentiment-Aware Journaling Tool

Mull is a command-line tool for keeping a journal that understands how you
felt while writing it. Every entry is analyzed as it is saved and the derived
fields are stored alongside the text in a local SQLite database.

This file contains the main application flow, coordinating the various
components to implement the journal functionality.

## Usage

```
mull <COMMAND>

Commands:
  write   Write a new entry (reads from stdin when TEXT is omitted)
  list    List entries, most recent first
  show    Show a single entry
  range   List entries between two timestamps, inclusive
  edit    Replace an entry's text and re-analyze it
  delete  Delete an entry
  clear   Delete every entry (irreversible)
  stats   Show journal statistics
  pref    Get or set a preference
```

## Configuration

The application can be configured with the following environment variables:
- `MULL_DB`: Path to the database file (defaults to "~/.local/share/mull/journal.db")
- `RUST_LOG`: Log filter (defaults to "info", or "debug" with --verbose)
*/

use clap::Parser;
use mull::analysis::LexiconAnalyzer;
use mull::cli::{CliArgs, Command, PrefCommand};
use mull::config::Config;
use mull::constants::DEFAULT_LOG_FILTER;
use mull::db::Database;
use mull::errors::AppResult;
use mull::ops;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the mull application.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads configuration and ensures the data directory exists
/// 4. Opens the database and initializes the schema
/// 5. Constructs the analysis provider
/// 6. Dispatches to the requested command handler
///
/// # Errors
///
/// This function can return various types of errors, including:
/// - Configuration errors (missing or invalid configuration)
/// - I/O errors (file not found, permission denied, etc.)
/// - Database errors (failed to open, corrupted file, etc.)
fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    // Logs go to stderr so command output on stdout stays clean
    let default_filter = if args.verbose { "debug" } else { DEFAULT_LOG_FILTER };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting mull");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    config.ensure_data_dir()?;

    let db = Database::open(&config.db_path)?;
    db.initialize_schema()?;

    // Single analyzer instance, constructed at startup and passed down
    // explicitly to whichever handler needs it
    let analyzer = LexiconAnalyzer::new();

    match args.command {
        Command::Write { text, prompt } => ops::write_entry(&db, &analyzer, text, prompt),
        Command::List { limit } => ops::list(&db, limit),
        Command::Show { id } => ops::show(&db, id),
        Command::Range { start, end } => ops::range(&db, &start, &end),
        Command::Edit { id, text } => ops::edit(&db, &analyzer, id, text),
        Command::Delete { id } => ops::delete(&db, id),
        Command::Clear { yes } => ops::clear(&db, yes),
        Command::Stats => ops::show_stats(&db),
        Command::Pref { action } => match action {
            PrefCommand::Get { key, default } => ops::pref_get(&db, &key, &default),
            PrefCommand::Set { key, value } => ops::pref_set(&db, &key, &value),
        },
    }
}
