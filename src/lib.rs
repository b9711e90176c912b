/*!
# Mull

Mull is a sentiment-aware journaling tool. Entries are analyzed as they are
written (word and token counts, a sentiment classification, theme tags) and
persisted together with the derived fields in a local SQLite store, which also
answers range queries and aggregate statistics such as the current writing
streak.

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `analysis`: Analysis types and the provider seam
- `db`: The entry store (schema, CRUD, statistics, preferences)
- `ops`: One handler per CLI subcommand

## Usage Example

```rust,no_run
use mull::analysis::{AnalysisProvider, LexiconAnalyzer};
use mull::db::{entries, Database};
use mull::Config;

fn main() -> mull::AppResult<()> {
    let config = Config::load()?;
    config.ensure_data_dir()?;

    let db = Database::open(&config.db_path)?;
    db.initialize_schema()?;

    let analyzer = LexiconAnalyzer::new();
    let analysis = analyzer.analyze("Grateful for a quiet day.");

    let conn = db.get_conn()?;
    let id = entries::create_entry(&conn, "Grateful for a quiet day.", None, &analysis)?;
    println!("saved entry {}", id);
    Ok(())
}
```
*/

/// Text analysis types and the provider seam
pub mod analysis;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized constants
pub mod constants;
/// The entry store: schema, CRUD, statistics, preferences
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// Command handlers
pub mod ops;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
