//! A local, deterministic analysis provider.
//!
//! This implementation covers the counting and theme heuristics with a small
//! sentiment lexicon, so the application works offline with no model to load.
//! Scores are confidence values derived from hit ratios, on the same scale a
//! classifier would report.

use super::{Analysis, AnalysisProvider, Sentiment};
use crate::constants::{SENTIMENT_NEGATIVE, SENTIMENT_POSITIVE};
use std::collections::HashSet;

/// Theme categories and the keywords that indicate them.
///
/// Matching walks this list in order, so reported themes always come back in
/// this order.
const THEMES: &[(&str, &[&str])] = &[
    ("work stress", &["work", "deadline", "boss", "meeting", "overtime", "burnout"]),
    ("relationships", &["partner", "boyfriend", "girlfriend", "relationship", "date", "love"]),
    ("family", &["family", "mom", "dad", "mother", "father", "sister", "brother", "kids"]),
    ("health", &["health", "doctor", "sleep", "exercise", "sick", "tired", "gym"]),
    ("creativity", &["creative", "writing", "painting", "music", "drawing", "idea"]),
    ("personal growth", &["learn", "learning", "growth", "goal", "habit", "improve"]),
    ("anxiety", &["anxious", "anxiety", "worried", "worry", "nervous", "overwhelmed"]),
    ("gratitude", &["grateful", "gratitude", "thankful", "appreciate", "blessed"]),
    ("accomplishments", &["accomplished", "finished", "achieved", "completed", "proud"]),
    ("challenges", &["difficult", "challenge", "struggle", "hard", "problem", "obstacle"]),
    ("hobbies", &["hobby", "reading", "cooking", "gardening", "hiking", "game"]),
    ("social life", &["friend", "friends", "party", "dinner", "hangout", "social"]),
];

/// Words counted as positive sentiment signals.
const POSITIVE_WORDS: &[&str] = &[
    "happy", "joy", "great", "good", "wonderful", "love", "excited", "grateful",
    "proud", "calm", "hopeful", "amazing", "fun", "glad", "peaceful", "better",
];

/// Words counted as negative sentiment signals.
const NEGATIVE_WORDS: &[&str] = &[
    "sad", "angry", "terrible", "bad", "awful", "hate", "anxious", "stressed",
    "tired", "worried", "lonely", "frustrated", "upset", "afraid", "worse", "hurt",
];

/// Analysis provider backed by static keyword lexicons.
///
/// Constructed once at startup and passed by reference wherever analysis is
/// needed; it holds no state and performs no I/O.
#[derive(Debug, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    /// Creates a new analyzer.
    pub fn new() -> Self {
        LexiconAnalyzer
    }
}

/// Lowercases a word and strips surrounding punctuation.
///
/// Returns `None` when nothing remains (e.g. a bare "--").
fn normalize(word: &str) -> Option<String> {
    let trimmed = word.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

impl AnalysisProvider for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Analysis {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Analysis::default();
        }

        let normalized: Vec<String> = words.iter().filter_map(|w| normalize(w)).collect();
        let unique: HashSet<&str> = normalized.iter().map(|s| s.as_str()).collect();

        let word_count = words.len() as i64;
        let unique_words = unique.len() as i64;

        // Rough subword estimate: about four characters per token, and never
        // fewer tokens than words.
        let token_count = (text.chars().count() as i64 / 4).max(word_count);

        let positive_hits = normalized
            .iter()
            .filter(|w| POSITIVE_WORDS.contains(&w.as_str()))
            .count() as f64;
        let negative_hits = normalized
            .iter()
            .filter(|w| NEGATIVE_WORDS.contains(&w.as_str()))
            .count() as f64;

        let sentiment = if positive_hits + negative_hits > 0.0 {
            let (label, dominant) = if positive_hits >= negative_hits {
                (SENTIMENT_POSITIVE, positive_hits)
            } else {
                (SENTIMENT_NEGATIVE, negative_hits)
            };
            Some(Sentiment {
                label: label.to_string(),
                score: dominant / (positive_hits + negative_hits),
            })
        } else {
            None
        };

        let themes = THEMES
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| unique.contains(k)))
            .map(|(name, _)| name.to_string())
            .collect();

        Analysis {
            word_count,
            token_count,
            unique_words,
            sentiment,
            themes,
        }
    }
}
