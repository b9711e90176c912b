//! Constants used throughout the application.
//!
//! This module contains all constants used in the Mull application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "mull";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A sentiment-aware journaling tool";

// Configuration Keys & Environment Variables
/// Environment variable overriding the database file location.
pub const ENV_VAR_MULL_DB: &str = "MULL_DB";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-path for the database file within the user's home directory.
pub const DEFAULT_DB_SUBPATH: &str = ".local/share/mull/journal.db";

// Date/Time Logic
/// Format for entry timestamps: ISO-8601 local time with sub-second
/// precision. Lexicographically ordered, and accepted by SQLite's DATE().
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

// Sentiment Labels
/// Label an analysis provider assigns to positive text.
pub const SENTIMENT_POSITIVE: &str = "POSITIVE";
/// Label an analysis provider assigns to negative text.
pub const SENTIMENT_NEGATIVE: &str = "NEGATIVE";

// Logging Configuration
/// Default log filter when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";
