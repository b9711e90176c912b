//! Configuration management for the mull application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. The only setting is the location of the backing
//! database file.
//!
//! # Environment Variables
//!
//! - `MULL_DB`: Path to the database file (defaults to ~/.local/share/mull/journal.db)
//! - `HOME`: Used for expanding the default database path

use crate::constants::{DEFAULT_DB_SUBPATH, ENV_VAR_HOME, ENV_VAR_MULL_DB};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Configuration for the mull application.
///
/// This struct holds the configuration settings needed for the application:
/// the path to the SQLite file that backs the entry store.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use mull::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("/path/to/journal.db"),
/// };
/// ```
///
/// Loading configuration from environment variables:
/// ```no_run
/// use mull::Config;
/// use std::env;
///
/// env::set_var("MULL_DB", "/custom/journal.db");
///
/// let config = Config::load().expect("Failed to load configuration");
/// assert_eq!(config.db_path, std::path::PathBuf::from("/custom/journal.db"));
/// ```
pub struct Config {
    /// Path to the SQLite database file.
    ///
    /// This is loaded from the MULL_DB environment variable with a fallback
    /// to ~/.local/share/mull/journal.db if not specified.
    pub db_path: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_path", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// This method reads the database path from the `MULL_DB` environment variable,
    /// falling back to a conventional location under the user's home directory.
    /// The path is expanded using `shellexpand` to handle `~` and environment
    /// variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The path expansion fails
    /// - The resulting path is empty
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mull::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Database at {:?}", config.db_path),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        // Get database path from MULL_DB env var, fallback to ~/.local/share/mull/journal.db
        let db_path_str = env::var(ENV_VAR_MULL_DB).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DB_SUBPATH)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&db_path_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let db_path = PathBuf::from(expanded_path.into_owned());

        if db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        Ok(Config { db_path })
    }

    /// Ensures the directory that will hold the database file exists.
    ///
    /// Creates all missing parent directories. Idempotent and safe to call
    /// on every startup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if directory creation fails.
    pub fn ensure_data_dir(&self) -> AppResult<()> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}
