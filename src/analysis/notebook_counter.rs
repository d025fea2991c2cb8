//! Notebook-level word counting and frequency statistics.
//!
//! Unlike [`WordCounter`](crate::analysis::WordCounter), which operates on a
//! single string, this counter is bound to a whole notebook and aggregates
//! across its pages. Tokenization here is whitespace splitting with edge
//! punctuation stripped, matching what the page statistics views expect.
//!
//! An unbound counter answers every query with zero or an empty collection
//! rather than erroring.

use std::collections::{BTreeMap, HashMap};

use crate::notebook::Notebook;

/// Characters stripped from token edges before frequency counting.
const EDGE_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'', '-',
];

/// Default number of entries returned by [`NotebookCounter::most_common_words`].
pub const DEFAULT_COMMON_WORD_COUNT: usize = 10;

/// Word counting and frequency statistics over a bound notebook.
#[derive(Debug, Clone, Default)]
pub struct NotebookCounter<'a> {
    notebook: Option<&'a Notebook>,
}

impl<'a> NotebookCounter<'a> {
    /// Create an unbound counter.
    pub fn new() -> Self {
        NotebookCounter { notebook: None }
    }

    /// Create a counter bound to a notebook.
    pub fn for_notebook(notebook: &'a Notebook) -> Self {
        NotebookCounter {
            notebook: Some(notebook),
        }
    }

    /// Bind the counter to a notebook, replacing any previous binding.
    pub fn bind(&mut self, notebook: &'a Notebook) {
        self.notebook = Some(notebook);
    }

    /// Get the currently bound notebook, if any.
    pub fn notebook(&self) -> Option<&'a Notebook> {
        self.notebook
    }

    /// Count the words in a single page.
    ///
    /// Returns 0 when the counter is unbound or the page does not exist.
    pub fn count_words_in_page(&self, page_id: u64) -> usize {
        self.notebook
            .and_then(|nb| nb.get_page(page_id).ok())
            .map_or(0, |page| page.content().split_whitespace().count())
    }

    /// Count the total number of words across all pages.
    pub fn count_total_words(&self) -> usize {
        self.notebook.map_or(0, |nb| {
            nb.pages()
                .map(|page| page.content().split_whitespace().count())
                .sum()
        })
    }

    /// Get the frequency of each normalized word in the notebook.
    ///
    /// Words are lowercased and stripped of edge punctuation; empty tokens
    /// are dropped.
    pub fn word_frequency(&self) -> HashMap<String, usize> {
        let mut frequency = HashMap::new();

        if let Some(notebook) = self.notebook {
            for page in notebook.pages() {
                let content = page.content().to_lowercase();
                for word in content.split_whitespace() {
                    let word = word.trim_matches(EDGE_PUNCTUATION);
                    if !word.is_empty() {
                        *frequency.entry(word.to_string()).or_insert(0) += 1;
                    }
                }
            }
        }

        frequency
    }

    /// Get the word count for each page, keyed by page identifier.
    pub fn page_word_counts(&self) -> BTreeMap<u64, usize> {
        self.notebook.map_or_else(BTreeMap::new, |nb| {
            nb.pages()
                .map(|page| (page.id(), page.content().split_whitespace().count()))
                .collect()
        })
    }

    /// Get a weighted word count using per-word importance weights.
    ///
    /// Words found in `weights` contribute their weight; all other words
    /// contribute 1.0. With an empty weight map this falls back to the plain
    /// total word count.
    pub fn weighted_word_count(&self, weights: &HashMap<String, f64>) -> f64 {
        let Some(notebook) = self.notebook else {
            return 0.0;
        };
        if weights.is_empty() {
            return self.count_total_words() as f64;
        }

        let mut weighted = 0.0;
        for page in notebook.pages() {
            let content = page.content().to_lowercase();
            for word in content.split_whitespace() {
                let word = word.trim_matches(EDGE_PUNCTUATION);
                weighted += weights.get(word).copied().unwrap_or(1.0);
            }
        }
        weighted
    }

    /// Get the `n` most common words as `(word, count)` pairs, ordered by
    /// descending count.
    pub fn most_common_words(&self, n: usize) -> Vec<(String, usize)> {
        let mut words: Vec<(String, usize)> = self.word_frequency().into_iter().collect();
        // Secondary alphabetical key keeps ties deterministic.
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        words.truncate(n);
        words
    }
}
