//! Readability and keyword analysis.
//!
//! Builds on [`WordCounter`] to derive readability metrics (Flesch family),
//! stop-word-filtered keywords, longitudinal progress over text snapshots,
//! and two-text comparisons.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::word_counter::{TextReport, WordCounter};

/// Default number of keywords returned by analysis.
pub const DEFAULT_KEYWORD_COUNT: usize = 5;

/// Number of keywords extracted per side when comparing two texts.
const COMPARISON_KEYWORD_COUNT: usize = 20;

/// Sentence segmentation pattern: runs of sentence terminators.
static SENTENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern should be valid"));

/// Common words excluded from keyword extraction: articles, conjunctions,
/// prepositions and frequent pronouns.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "with", "by",
        "about", "of", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
        "do", "does", "did", "i", "you", "he", "she", "it", "we", "they", "them", "their",
        "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    ]
    .into_iter()
    .collect()
});

/// Readability metrics for a text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Flesch-Kincaid Grade Level.
    pub flesch_kincaid_grade: f64,
    /// Flesch Reading Ease score.
    pub flesch_reading_ease: f64,
    /// Average number of words per sentence.
    pub average_words_per_sentence: f64,
    /// Average number of syllables per word.
    pub average_syllables_per_word: f64,
}

/// Full analysis of a text: word counts, readability, keywords and sentence
/// segmentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Word-count analysis from the underlying [`WordCounter`].
    pub counts: TextReport,
    /// Readability metrics.
    pub readability: ReadabilityReport,
    /// Top keywords by frequency.
    pub keywords: Vec<String>,
    /// Number of segments produced by splitting on sentence terminators.
    ///
    /// This is a raw split count, so a single-sentence text ending in "."
    /// yields 2 segments (the trailing empty segment is included). The
    /// readability formulas use `max(1, segments - 1)` instead.
    pub sentence_count: usize,
}

/// Progress metrics over an ordered sequence of text snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Word count of each snapshot.
    pub word_counts: Vec<usize>,
    /// Difference from the previous snapshot's count; the first entry is the
    /// first snapshot's count itself rather than a true delta.
    pub word_deltas: Vec<i64>,
    /// Per-snapshot totals. Despite the name this is each snapshot's own
    /// count, not a running sum; the behavior is kept from the original
    /// design since callers depend on it.
    pub cumulative_counts: Vec<usize>,
    /// Full analysis of each snapshot.
    pub analyses: Vec<AnalysisReport>,
}

/// Difference in readability scores between two texts (second minus first).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityDelta {
    /// Flesch-Kincaid grade difference.
    pub flesch_kincaid_grade: f64,
    /// Flesch Reading Ease difference.
    pub flesch_reading_ease: f64,
}

/// Comparison of two text samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextComparison {
    /// Full analysis of the first text.
    pub text1_analysis: AnalysisReport,
    /// Full analysis of the second text.
    pub text2_analysis: AnalysisReport,
    /// Keywords present in both texts, sorted lexicographically.
    pub common_keywords: Vec<String>,
    /// Keywords present only in the first text, sorted lexicographically.
    pub unique_to_text1: Vec<String>,
    /// Keywords present only in the second text, sorted lexicographically.
    pub unique_to_text2: Vec<String>,
    /// Word count of the second text minus that of the first.
    pub word_count_difference: i64,
    /// Readability score differences (second minus first).
    pub readability_difference: ReadabilityDelta,
}

/// Comprehensive text analyzer.
///
/// Combines the word counter's report with readability estimation and
/// keyword extraction. All operations are pure and synchronous.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    word_counter: WordCounter,
}

impl TextAnalyzer {
    /// Create a text analyzer with a default word counter.
    pub fn new() -> Self {
        Self::with_word_counter(WordCounter::new())
    }

    /// Create a text analyzer backed by a specific word counter.
    pub fn with_word_counter(word_counter: WordCounter) -> Self {
        TextAnalyzer { word_counter }
    }

    /// Get the underlying word counter.
    pub fn word_counter(&self) -> &WordCounter {
        &self.word_counter
    }

    /// Perform a comprehensive analysis of the text.
    pub fn analyze_text(&self, text: &str) -> AnalysisReport {
        AnalysisReport {
            counts: self.word_counter.analyze_text(text),
            readability: self.calculate_readability(text),
            keywords: self.extract_keywords(text, DEFAULT_KEYWORD_COUNT),
            sentence_count: SENTENCE_PATTERN.split(text).count(),
        }
    }

    /// Calculate readability metrics for the text.
    ///
    /// Both Flesch scores are 0 when the text contains no words.
    pub fn calculate_readability(&self, text: &str) -> ReadabilityReport {
        let word_count = self.word_counter.count_words(text);

        // Splitting leaves a trailing empty segment after a final terminator,
        // hence the - 1 correction.
        let segments = SENTENCE_PATTERN.split(text).count();
        let sentence_count = segments.saturating_sub(1).max(1);

        let syllable_count = count_syllables(text);

        let (flesch_kincaid_grade, flesch_reading_ease) = if word_count > 0 {
            let words_per_sentence = word_count as f64 / sentence_count as f64;
            let syllables_per_word = syllable_count as f64 / word_count as f64;
            (
                0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59,
                206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
            )
        } else {
            (0.0, 0.0)
        };

        ReadabilityReport {
            flesch_kincaid_grade,
            flesch_reading_ease,
            average_words_per_sentence: word_count as f64 / sentence_count.max(1) as f64,
            average_syllables_per_word: syllable_count as f64 / word_count.max(1) as f64,
        }
    }

    /// Extract the most frequent keywords from the text.
    ///
    /// The text is lowercased, punctuation is stripped to spaces, and stop
    /// words and tokens of length <= 2 are dropped. Ties in frequency keep
    /// first-encountered order.
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        let normalized: String = text
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
            .collect();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();

        for word in normalized.split_whitespace() {
            if STOP_WORDS.contains(word) || word.chars().count() <= 2 {
                continue;
            }
            let count = counts.entry(word).or_insert(0);
            if *count == 0 {
                order.push(word);
            }
            *count += 1;
        }

        // Stable sort over first-encountered order gives deterministic ties.
        order.sort_by(|a, b| counts[b].cmp(&counts[a]));
        order.into_iter().take(top_n).map(String::from).collect()
    }

    /// Track progress over a chronological sequence of text snapshots.
    pub fn track_progress<S: AsRef<str>>(&self, text_history: &[S]) -> ProgressReport {
        let word_counts: Vec<usize> = text_history
            .iter()
            .map(|text| self.word_counter.count_words(text.as_ref()))
            .collect();

        let word_deltas: Vec<i64> = word_counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                if i > 0 {
                    count as i64 - word_counts[i - 1] as i64
                } else {
                    count as i64
                }
            })
            .collect();

        let analyses = text_history
            .iter()
            .map(|text| self.analyze_text(text.as_ref()))
            .collect();

        ProgressReport {
            cumulative_counts: word_counts.clone(),
            word_counts,
            word_deltas,
            analyses,
        }
    }

    /// Compare two text samples.
    pub fn compare_texts(&self, text1: &str, text2: &str) -> TextComparison {
        let text1_analysis = self.analyze_text(text1);
        let text2_analysis = self.analyze_text(text2);

        let keywords1: HashSet<String> = self
            .extract_keywords(text1, COMPARISON_KEYWORD_COUNT)
            .into_iter()
            .collect();
        let keywords2: HashSet<String> = self
            .extract_keywords(text2, COMPARISON_KEYWORD_COUNT)
            .into_iter()
            .collect();

        let mut common_keywords: Vec<String> =
            keywords1.intersection(&keywords2).cloned().collect();
        let mut unique_to_text1: Vec<String> = keywords1.difference(&keywords2).cloned().collect();
        let mut unique_to_text2: Vec<String> = keywords2.difference(&keywords1).cloned().collect();
        common_keywords.sort();
        unique_to_text1.sort();
        unique_to_text2.sort();

        let word_count_difference =
            text2_analysis.counts.word_count as i64 - text1_analysis.counts.word_count as i64;
        let readability_difference = ReadabilityDelta {
            flesch_kincaid_grade: text2_analysis.readability.flesch_kincaid_grade
                - text1_analysis.readability.flesch_kincaid_grade,
            flesch_reading_ease: text2_analysis.readability.flesch_reading_ease
                - text1_analysis.readability.flesch_reading_ease,
        };

        TextComparison {
            text1_analysis,
            text2_analysis,
            common_keywords,
            unique_to_text1,
            unique_to_text2,
            word_count_difference,
            readability_difference,
        }
    }
}

/// Approximate the number of syllables in the text.
fn count_syllables(text: &str) -> usize {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect();

    normalized.split_whitespace().map(count_syllables_in_word).sum()
}

/// Approximate the number of syllables in a single word.
///
/// Words of up to 3 characters count as 1 syllable; otherwise vowel groups
/// are counted, with a correction for a trailing silent "e" and a floor of 1.
fn count_syllables_in_word(word: &str) -> usize {
    const VOWELS: &str = "aeiouy";

    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 3 {
        return 1;
    }

    let mut count = 0usize;
    let mut prev_is_vowel = false;
    for &c in &chars {
        let is_vowel = VOWELS.contains(c);
        if is_vowel && !prev_is_vowel {
            count += 1;
        }
        prev_is_vowel = is_vowel;
    }

    if chars.last() == Some(&'e') && !VOWELS.contains(chars[chars.len() - 2]) {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_counting() {
        assert_eq!(count_syllables_in_word("cat"), 1);
        assert_eq!(count_syllables_in_word("hello"), 2);
        assert_eq!(count_syllables_in_word("beautiful"), 3);
        // Trailing silent "e" after a consonant is not a syllable.
        assert_eq!(count_syllables_in_word("style"), 1);
        assert_eq!(count_syllables_in_word("there"), 1);
        // Floor of one syllable per word.
        assert_eq!(count_syllables_in_word("rhythm"), 1);
    }

    #[test]
    fn test_sentence_count_is_raw_segment_count() {
        let analyzer = TextAnalyzer::new();

        // Splitting "Hello world." on terminators yields ["Hello world", ""].
        assert_eq!(analyzer.analyze_text("Hello world.").sentence_count, 2);
        assert_eq!(analyzer.analyze_text("One. Two. Three.").sentence_count, 4);
        assert_eq!(analyzer.analyze_text("no terminator").sentence_count, 1);
        assert_eq!(analyzer.analyze_text("").sentence_count, 1);
    }

    #[test]
    fn test_readability_zero_for_empty_text() {
        let analyzer = TextAnalyzer::new();
        let readability = analyzer.calculate_readability("");

        assert_eq!(readability.flesch_kincaid_grade, 0.0);
        assert_eq!(readability.flesch_reading_ease, 0.0);
        assert_eq!(readability.average_words_per_sentence, 0.0);
        assert_eq!(readability.average_syllables_per_word, 0.0);
    }

    #[test]
    fn test_readability_single_sentence() {
        let analyzer = TextAnalyzer::new();
        // 4 words, 1 sentence, 4 syllables (the/cat/sat/down).
        let readability = analyzer.calculate_readability("The cat sat down.");

        assert_eq!(readability.average_words_per_sentence, 4.0);
        assert_eq!(readability.average_syllables_per_word, 1.0);

        let expected_grade = 0.39 * 4.0 + 11.8 * 1.0 - 15.59;
        let expected_ease = 206.835 - 1.015 * 4.0 - 84.6 * 1.0;
        assert!((readability.flesch_kincaid_grade - expected_grade).abs() < 1e-9);
        assert!((readability.flesch_reading_ease - expected_ease).abs() < 1e-9);
    }

    #[test]
    fn test_extract_keywords_filters_stop_words_and_short_tokens() {
        let analyzer = TextAnalyzer::new();
        let keywords = analyzer.extract_keywords(
            "The notebook is a notebook for notes, and it keeps notes on a PC.",
            10,
        );

        assert!(keywords.contains(&"notebook".to_string()));
        assert!(keywords.contains(&"notes".to_string()));
        for kw in &keywords {
            assert!(!STOP_WORDS.contains(kw.as_str()));
            assert!(kw.chars().count() > 2);
        }
    }

    #[test]
    fn test_extract_keywords_frequency_order() {
        let analyzer = TextAnalyzer::new();
        let keywords =
            analyzer.extract_keywords("apple apple apple banana banana cherry", 3);

        assert_eq!(keywords, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_extract_keywords_stable_ties() {
        let analyzer = TextAnalyzer::new();
        // All words occur once; first-encountered order decides.
        let keywords = analyzer.extract_keywords("zebra yak walrus", 3);

        assert_eq!(keywords, vec!["zebra", "yak", "walrus"]);
    }

    #[test]
    fn test_extract_keywords_empty_text() {
        let analyzer = TextAnalyzer::new();
        assert!(analyzer.extract_keywords("", 5).is_empty());
        assert!(analyzer.extract_keywords("the a an of", 5).is_empty());
    }

    #[test]
    fn test_analyze_text_merges_reports() {
        let analyzer = TextAnalyzer::new();
        let report = analyzer.analyze_text("Plume keeps notebooks tidy. Plume searches fast.");

        assert_eq!(report.counts.word_count, 7);
        assert_eq!(report.sentence_count, 3);
        assert_eq!(report.keywords[0], "plume");
    }

    #[test]
    fn test_track_progress() {
        let analyzer = TextAnalyzer::new();
        let report = analyzer.track_progress(&["one two", "one two three four", "one"]);

        assert_eq!(report.word_counts, vec![2, 4, 1]);
        // The first "delta" is the initial count itself.
        assert_eq!(report.word_deltas, vec![2, 2, -3]);
        // Cumulative counts mirror the per-snapshot counts, not a running sum.
        assert_eq!(report.cumulative_counts, vec![2, 4, 1]);
        assert_eq!(report.analyses.len(), 3);
    }

    #[test]
    fn test_track_progress_empty_history() {
        let analyzer = TextAnalyzer::new();
        let report = analyzer.track_progress::<&str>(&[]);

        assert!(report.word_counts.is_empty());
        assert!(report.word_deltas.is_empty());
        assert!(report.analyses.is_empty());
    }

    #[test]
    fn test_compare_texts() {
        let analyzer = TextAnalyzer::new();
        let comparison = analyzer.compare_texts(
            "Rust programs compile quickly. Rust catches bugs.",
            "Rust programs run fast and catch mistakes early every single time.",
        );

        assert!(comparison.common_keywords.contains(&"rust".to_string()));
        assert!(comparison.common_keywords.contains(&"programs".to_string()));
        assert!(comparison.unique_to_text1.contains(&"compile".to_string()));
        assert!(comparison.unique_to_text2.contains(&"mistakes".to_string()));
        assert_eq!(comparison.word_count_difference, 11 - 7);
    }
}
