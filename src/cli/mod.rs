use clap::{Parser, Subcommand};

/// A sentiment-aware journaling tool
#[derive(Parser, Debug)]
#[clap(name = "mull", about = "A sentiment-aware journaling tool")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a new entry (reads from stdin when TEXT is omitted)
    Write {
        /// The entry text
        text: Option<String>,

        /// Prompt the entry was written against
        #[clap(short, long)]
        prompt: Option<String>,
    },

    /// List entries, most recent first
    List {
        /// Maximum number of entries to show
        #[clap(short = 'n', long)]
        limit: Option<i64>,
    },

    /// Show a single entry
    Show {
        /// Entry id
        id: i64,
    },

    /// List entries between two timestamps, inclusive (ISO-8601, e.g. 2024-01-01)
    Range {
        /// Start of the range
        start: String,
        /// End of the range
        end: String,
    },

    /// Replace an entry's text and re-analyze it
    Edit {
        /// Entry id
        id: i64,
        /// The new text (reads from stdin when omitted)
        text: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: i64,
    },

    /// Delete every entry (irreversible)
    Clear {
        /// Skip the confirmation prompt
        #[clap(short = 'y', long)]
        yes: bool,
    },

    /// Show journal statistics
    Stats,

    /// Get or set a preference
    Pref {
        #[clap(subcommand)]
        action: PrefCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrefCommand {
    /// Print a preference value
    Get {
        /// Preference key
        key: String,

        /// Value to report when the key is absent
        #[clap(short, long, default_value = "")]
        default: String,
    },

    /// Set a preference value
    Set {
        /// Preference key
        key: String,
        /// Preference value
        value: String,
    },
}
