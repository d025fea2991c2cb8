//! Weighted word counting primitives.
//!
//! A "word" is a maximal run of alphanumeric/underscore characters; runs of
//! whitespace or punctuation between words never affect the count. Every
//! ASCII letter carries a configurable weight (0.5 by default) used for
//! per-character weight reporting; whitespace, punctuation and digits carry
//! weight 0.0.
//!
//! Note that the character weights are diagnostic only: the weighted word
//! count normalizes every word to 1.0, so [`WordCounter::weighted_count`] is
//! always numerically equal to [`WordCounter::count_words`]. See the method
//! docs for details.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default weight assigned to ASCII letters.
pub const DEFAULT_LETTER_WEIGHT: f64 = 0.5;

/// Word-boundary tokenization pattern: maximal runs of word characters.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern should be valid"));

/// Per-character-class counts over a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClassCounts {
    /// Number of ASCII letters.
    pub letters: usize,
    /// Number of ASCII digits.
    pub digits: usize,
    /// Number of ASCII punctuation characters.
    pub punctuation: usize,
    /// Number of whitespace characters.
    pub whitespace: usize,
    /// Total number of characters in the text.
    pub total: usize,
}

/// Word-count analysis produced by [`WordCounter::analyze_text`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextReport {
    /// Number of word tokens in the text.
    pub word_count: usize,
    /// Weighted word count; equal to `word_count` as a float.
    pub weighted_count: f64,
    /// Per-character-class counts.
    pub character_counts: CharacterClassCounts,
    /// Accumulated weight per distinct character present in the text.
    pub character_weights: HashMap<char, f64>,
    /// Total token length divided by token count; 0.0 when there are no tokens.
    pub average_word_length: f64,
}

/// A weighted word counter.
///
/// Letters are assigned a per-character weight for diagnostic reporting,
/// while complete words always contribute 1.0 to the weighted total.
#[derive(Debug, Clone)]
pub struct WordCounter {
    letter_weight: f64,
    char_weights: HashMap<char, f64>,
}

impl WordCounter {
    /// Create a word counter with the default letter weight.
    pub fn new() -> Self {
        Self::with_letter_weight(DEFAULT_LETTER_WEIGHT)
    }

    /// Create a word counter with a custom letter weight (between 0 and 1).
    pub fn with_letter_weight(letter_weight: f64) -> Self {
        let mut char_weights = HashMap::new();
        for c in ('a'..='z').chain('A'..='Z') {
            char_weights.insert(c, letter_weight);
        }
        for c in ('0'..='9').chain(" \t\n\r\x0b\x0c".chars()) {
            char_weights.insert(c, 0.0);
        }
        for c in (0u8..=127).map(char::from).filter(|c| c.is_ascii_punctuation()) {
            char_weights.insert(c, 0.0);
        }

        WordCounter {
            letter_weight,
            char_weights,
        }
    }

    /// Get the configured letter weight.
    pub fn letter_weight(&self) -> f64 {
        self.letter_weight
    }

    /// Count the number of words in the text.
    ///
    /// Empty or whitespace-only text yields 0.
    pub fn count_words(&self, text: &str) -> usize {
        WORD_PATTERN.find_iter(text).count()
    }

    /// Perform a weighted count of the text.
    ///
    /// Each word contributes a weight of 1.0 to the total regardless of the
    /// configured letter weight, so this always equals
    /// [`count_words`](Self::count_words) as a float.
    pub fn weighted_count(&self, text: &str) -> f64 {
        self.count_words(text) as f64
    }

    /// Accumulate, for every distinct character in the text, the sum of its
    /// weight across all occurrences.
    ///
    /// Characters without a configured weight (non-ASCII) contribute 0.0.
    pub fn get_character_weights(&self, text: &str) -> HashMap<char, f64> {
        let mut totals: HashMap<char, f64> = HashMap::new();

        for c in text.chars() {
            let weight = self.char_weights.get(&c).copied().unwrap_or(0.0);
            *totals.entry(c).or_insert(0.0) += weight;
        }

        totals
    }

    /// Perform a full word-count analysis of the text.
    pub fn analyze_text(&self, text: &str) -> TextReport {
        let word_count = self.count_words(text);
        let weighted_count = self.weighted_count(text);
        let character_weights = self.get_character_weights(text);

        let character_counts = CharacterClassCounts {
            letters: text.chars().filter(|c| c.is_ascii_alphabetic()).count(),
            digits: text.chars().filter(|c| c.is_ascii_digit()).count(),
            punctuation: text.chars().filter(|c| c.is_ascii_punctuation()).count(),
            whitespace: text.chars().filter(|c| c.is_whitespace()).count(),
            total: text.chars().count(),
        };

        let total_token_len: usize = WORD_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().chars().count())
            .sum();
        let average_word_length = total_token_len as f64 / word_count.max(1) as f64;

        TextReport {
            word_count,
            weighted_count,
            character_counts,
            character_weights,
            average_word_length,
        }
    }

    /// Get the weight of each word; every word has a weight of 1.0 in this
    /// design.
    pub fn word_weights(&self, words: &[&str]) -> HashMap<String, f64> {
        words.iter().map(|w| (w.to_string(), 1.0)).collect()
    }

    /// Generate cumulative word-count data points for charting word count
    /// growth: one `(position, running count)` pair per word.
    pub fn progression_points(&self, text: &str) -> Vec<(usize, usize)> {
        (1..=self.count_words(text)).map(|i| (i, i)).collect()
    }

    /// Calculate the weighted count using custom character weights.
    ///
    /// The supplied weights are currently ignored and every word counts as
    /// 1.0, mirroring [`weighted_count`](Self::weighted_count). This looks
    /// like an incomplete feature inherited from the original design, but the
    /// behavior is asserted by existing callers and is kept as-is.
    pub fn custom_weighted_count(&self, text: &str, _char_weights: &HashMap<char, f64>) -> f64 {
        self.count_words(text) as f64
    }
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::new()
    }
}
