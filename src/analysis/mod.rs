//! Text analysis types and the provider seam.
//!
//! Entries are analyzed before they are stored: word/token counts, an optional
//! sentiment classification, and a list of theme tags. The store persists
//! whatever the provider produced; it never computes analysis itself.
//!
//! The provider is deliberately a trait so the storage layer stays decoupled
//! from any particular model. The bundled [`LexiconAnalyzer`] is a local,
//! deterministic implementation; a model-backed provider would implement the
//! same trait.

pub mod lexicon;

pub use lexicon::LexiconAnalyzer;

use serde::{Deserialize, Serialize};

/// A sentiment classification for a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Classification label, e.g. "POSITIVE" or "NEGATIVE".
    pub label: String,
    /// Confidence score in (0.0, 1.0].
    pub score: f64,
}

/// The structured result of analyzing entry text.
///
/// All fields may be partially populated; a missing sentiment means the
/// provider could not classify the text, and downstream aggregates must
/// skip it. `Default` yields the all-absent value (zero counts, no
/// sentiment, no themes).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Number of whitespace-separated words.
    pub word_count: i64,
    /// Approximate number of model tokens.
    pub token_count: i64,
    /// Number of distinct words, case-folded.
    pub unique_words: i64,
    /// Sentiment classification, if one could be made.
    pub sentiment: Option<Sentiment>,
    /// Theme tags, in provider order.
    pub themes: Vec<String>,
}

/// A source of text analysis results.
///
/// Implementations must be pure with respect to their input: the same text
/// always yields the same analysis. Providers are constructed once at startup
/// and passed by reference into the operations that need them.
pub trait AnalysisProvider {
    /// Analyzes the given text and returns the structured result.
    fn analyze(&self, text: &str) -> Analysis;
}
