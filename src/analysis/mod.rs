//! Text analysis: weighted word counting, readability estimation, keyword
//! extraction, and notebook-level word statistics.

pub mod notebook_counter;
pub mod text_analyzer;
pub mod word_counter;

pub use notebook_counter::{DEFAULT_COMMON_WORD_COUNT, NotebookCounter};
pub use text_analyzer::{
    AnalysisReport, DEFAULT_KEYWORD_COUNT, ProgressReport, ReadabilityDelta, ReadabilityReport,
    TextAnalyzer, TextComparison,
};
pub use word_counter::{
    CharacterClassCounts, DEFAULT_LETTER_WEIGHT, TextReport, WordCounter,
};
