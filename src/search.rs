//! Full-text search over a notebook's pages.
//!
//! The [`SearchEngine`] is either unbound (every search fails with an
//! invalid-state error) or bound to a notebook via [`SearchEngine::bind`];
//! it may be rebound at any time. All modes scan every page linearly in
//! ascending-identifier order; there is no index. That is an accepted
//! ceiling: notebooks are bounded (3000 pages of user-authored text by
//! default), so scans stay tractable.
//!
//! The engine only reads from the bound notebook. The caller must not mutate
//! the notebook while a search is in flight, and results borrow their pages,
//! so they are not stable across notebook mutation.

use std::cmp::Ordering;

use regex::{Regex, RegexBuilder, escape};
use serde::{Deserialize, Serialize};

use crate::error::{PlumeError, Result};
use crate::notebook::{Notebook, Page};

/// Characters of context included on each side of a match in snippets.
pub const DEFAULT_CONTEXT_SIZE: usize = 50;

/// Marker added to a snippet edge when the context window was truncated.
const ELLIPSIS: &str = "...";

/// A single search hit.
///
/// The relevance score's meaning depends on the search mode: a constant 1.0
/// for basic and regex search, the per-page aggregate match count for
/// advanced search, and a keyword density for keyword search.
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    /// The page the match was found in.
    pub page: &'a Page,
    /// Text excerpt around the match, with `...` markers where truncated.
    pub content_snippet: String,
    /// Match start, as a byte offset into the page content.
    pub match_start: usize,
    /// Match end, as a byte offset into the page content.
    pub match_end: usize,
    /// Relevance score; results are ordered by this, descending.
    pub relevance_score: f64,
}

/// Options for [`SearchEngine::advanced_search`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Match case-sensitively.
    pub case_sensitive: bool,
    /// Only match on whole-word (token) boundaries.
    pub whole_words: bool,
    /// Also match against page names, with a score bonus.
    pub include_page_names: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            case_sensitive: false,
            whole_words: false,
            include_page_names: true,
        }
    }
}

impl SearchOptions {
    /// Create the default options: case-insensitive substring matching with
    /// page names included.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set case-sensitive matching.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set whole-word matching.
    pub fn whole_words(mut self, whole_words: bool) -> Self {
        self.whole_words = whole_words;
        self
    }

    /// Set whether page names are searched.
    pub fn include_page_names(mut self, include_page_names: bool) -> Self {
        self.include_page_names = include_page_names;
        self
    }
}

/// Search engine over a bound notebook.
#[derive(Debug, Clone)]
pub struct SearchEngine<'a> {
    notebook: Option<&'a Notebook>,
    context_size: usize,
}

impl<'a> SearchEngine<'a> {
    /// Create an unbound search engine.
    pub fn new() -> Self {
        SearchEngine {
            notebook: None,
            context_size: DEFAULT_CONTEXT_SIZE,
        }
    }

    /// Create a search engine bound to a notebook.
    pub fn for_notebook(notebook: &'a Notebook) -> Self {
        SearchEngine {
            notebook: Some(notebook),
            context_size: DEFAULT_CONTEXT_SIZE,
        }
    }

    /// Set the snippet context window size (characters on each side).
    pub fn with_context_size(mut self, context_size: usize) -> Self {
        self.context_size = context_size;
        self
    }

    /// Bind the engine to a notebook, replacing any previous binding.
    pub fn bind(&mut self, notebook: &'a Notebook) {
        self.notebook = Some(notebook);
    }

    /// Check whether a notebook is currently bound.
    pub fn is_bound(&self) -> bool {
        self.notebook.is_some()
    }

    /// Get the currently bound notebook, if any.
    pub fn notebook(&self) -> Option<&'a Notebook> {
        self.notebook
    }

    /// Get the snippet context window size.
    pub fn context_size(&self) -> usize {
        self.context_size
    }

    fn bound_notebook(&self) -> Result<&'a Notebook> {
        self.notebook
            .ok_or_else(|| PlumeError::invalid_state("no notebook has been bound for search"))
    }

    /// Perform a literal substring search over every page's content.
    ///
    /// The query is escaped, never treated as a pattern. Each occurrence
    /// yields one result with a constant score of 1.0. Case-insensitive
    /// unless `case_sensitive` is set.
    pub fn basic_search(&self, query: &str, case_sensitive: bool) -> Result<Vec<SearchResult<'a>>> {
        let notebook = self.bound_notebook()?;
        let pattern = RegexBuilder::new(&escape(query))
            .case_insensitive(!case_sensitive)
            .build()?;

        let mut results = Vec::new();
        for page in notebook.pages() {
            for m in pattern.find_iter(page.content()) {
                results.push(SearchResult {
                    page,
                    content_snippet: self.context_snippet(page.content(), m.start(), m.end()),
                    match_start: m.start(),
                    match_end: m.end(),
                    relevance_score: 1.0,
                });
            }
        }

        sort_by_score(&mut results);
        Ok(results)
    }

    /// Perform a literal substring search with extra options.
    ///
    /// Every result for a page carries that page's aggregate score: 1.0 per
    /// content match, plus a 2.0 bonus when the page name also matches and
    /// name inclusion is enabled. A name match additionally emits a synthetic
    /// result whose snippet is labeled with the page name instead of a
    /// content excerpt; its match span refers to the page name rather than
    /// the content.
    pub fn advanced_search(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<Vec<SearchResult<'a>>> {
        let notebook = self.bound_notebook()?;

        let escaped = escape(query);
        let source = if options.whole_words {
            format!(r"\b{escaped}\b")
        } else {
            escaped
        };
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(!options.case_sensitive)
            .build()?;

        let mut results = Vec::new();
        for page in notebook.pages() {
            let content_matches: Vec<_> = pattern.find_iter(page.content()).collect();
            let mut page_score = content_matches.len() as f64;

            let name_match = if options.include_page_names {
                pattern.find(page.name())
            } else {
                None
            };
            if name_match.is_some() {
                // Matches in page names are weighted more heavily.
                page_score += 2.0;
            }

            for m in &content_matches {
                results.push(SearchResult {
                    page,
                    content_snippet: self.context_snippet(page.content(), m.start(), m.end()),
                    match_start: m.start(),
                    match_end: m.end(),
                    relevance_score: page_score,
                });
            }

            if let Some(m) = name_match {
                results.push(SearchResult {
                    page,
                    content_snippet: format!("[Page Name]: {}", page.name()),
                    match_start: m.start(),
                    match_end: m.end(),
                    relevance_score: page_score,
                });
            }
        }

        sort_by_score(&mut results);
        Ok(results)
    }

    /// Perform a search using a user-supplied regular expression.
    ///
    /// The pattern is compiled as-is; an invalid pattern fails with a
    /// pattern-syntax error carrying the compiler's message. Each match
    /// yields one result with a constant score of 1.0.
    pub fn regex_search(&self, pattern: &str) -> Result<Vec<SearchResult<'a>>> {
        let notebook = self.bound_notebook()?;
        let regex = Regex::new(pattern)?;

        let mut results = Vec::new();
        for page in notebook.pages() {
            for m in regex.find_iter(page.content()) {
                results.push(SearchResult {
                    page,
                    content_snippet: self.context_snippet(page.content(), m.start(), m.end()),
                    match_start: m.start(),
                    match_end: m.end(),
                    relevance_score: 1.0,
                });
            }
        }

        sort_by_score(&mut results);
        Ok(results)
    }

    /// Find pages containing every keyword as a whole word
    /// (case-insensitive).
    ///
    /// A page qualifies only if all keywords match; the scan short-circuits
    /// on the first missing keyword. Each qualifying page yields exactly one
    /// result, anchored at the first match of the first keyword, scored by
    /// keyword density: total matches across all keywords divided by the
    /// page's whitespace token count (at least 1).
    pub fn search_by_keywords<S: AsRef<str>>(
        &self,
        keywords: &[S],
    ) -> Result<Vec<SearchResult<'a>>> {
        let notebook = self.bound_notebook()?;

        let patterns = keywords
            .iter()
            .map(|kw| {
                RegexBuilder::new(&format!(r"\b{}\b", escape(kw.as_ref())))
                    .case_insensitive(true)
                    .build()
                    .map_err(PlumeError::from)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut results = Vec::new();
        for page in notebook.pages() {
            let mut first_matches = Vec::with_capacity(patterns.len());
            let mut match_all = true;

            for pattern in &patterns {
                match pattern.find(page.content()) {
                    Some(m) => first_matches.push(m),
                    None => {
                        match_all = false;
                        break;
                    }
                }
            }

            if !match_all || first_matches.is_empty() {
                continue;
            }

            let total_matches: usize = patterns
                .iter()
                .map(|p| p.find_iter(page.content()).count())
                .sum();
            let token_count = page.content().split_whitespace().count().max(1);
            let score = total_matches as f64 / token_count as f64;

            let anchor = first_matches[0];
            results.push(SearchResult {
                page,
                content_snippet: self.context_snippet(page.content(), anchor.start(), anchor.end()),
                match_start: anchor.start(),
                match_end: anchor.end(),
                relevance_score: score,
            });
        }

        sort_by_score(&mut results);
        Ok(results)
    }

    /// Extract a context snippet around a match span.
    ///
    /// `start` and `end` are byte offsets; the window is widened by the
    /// configured number of characters on each side, staying on UTF-8
    /// boundaries, and `...` markers are added where the window did not reach
    /// the content edge.
    fn context_snippet(&self, content: &str, start: usize, end: usize) -> String {
        let window_start = widen_left(content, start, self.context_size);
        let window_end = widen_right(content, end, self.context_size);

        let mut snippet = String::new();
        if window_start > 0 {
            snippet.push_str(ELLIPSIS);
        }
        snippet.push_str(&content[window_start..window_end]);
        if window_end < content.len() {
            snippet.push_str(ELLIPSIS);
        }
        snippet
    }
}

impl Default for SearchEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable descending sort by relevance score; equal scores keep discovery
/// order.
fn sort_by_score(results: &mut [SearchResult<'_>]) {
    results.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(Ordering::Equal)
    });
}

/// Move a byte offset left by up to `chars` characters.
fn widen_left(s: &str, from: usize, chars: usize) -> usize {
    s[..from]
        .char_indices()
        .rev()
        .take(chars)
        .last()
        .map_or(from, |(i, _)| i)
}

/// Move a byte offset right by up to `chars` characters.
fn widen_right(s: &str, from: usize, chars: usize) -> usize {
    s[from..]
        .char_indices()
        .nth(chars)
        .map_or(s.len(), |(i, _)| from + i)
}
