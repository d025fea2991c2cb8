//! # Plume
//!
//! A digital notebook core: pages organized into notebooks, weighted word
//! counting, readability and keyword analysis, and multi-mode full-text
//! search with relevance ranking and context snippets.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Notebooks of pages with monotonic, never-reused identifiers
//! - Weighted word counting and per-character weight reporting
//! - Flesch readability metrics and stop-word-filtered keyword extraction
//! - Basic, advanced, regex, and conjunctive keyword search with ranked,
//!   snippet-annotated results
//!
//! The core is single-threaded and synchronous: every operation runs to
//! completion on the calling thread and only reads from in-memory notebooks.
//! Callers needing responsiveness against very large notebooks or
//! pathological regex patterns should run searches off the interactive
//! thread themselves.

pub mod analysis;
pub mod error;
pub mod notebook;
pub mod search;

pub mod prelude {
    //! Convenient re-exports of the most commonly used types.

    pub use crate::analysis::{
        AnalysisReport, NotebookCounter, TextAnalyzer, TextComparison, WordCounter,
    };
    pub use crate::error::{PlumeError, Result};
    pub use crate::notebook::{Notebook, Page};
    pub use crate::search::{SearchEngine, SearchOptions, SearchResult};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
