//! Notebook and page data model.
//!
//! A [`Notebook`] is a collection of [`Page`]s keyed by identifier. Page
//! identifiers are assigned monotonically (max existing + 1, or 1 when the
//! notebook is empty) and are never reused after deletion. Iteration over
//! pages is always in ascending-identifier order.
//!
//! The analysis and search components only ever read from a notebook; the
//! owning application must not mutate a notebook while an analysis or search
//! call over it is in flight.

pub mod page;

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use page::Page;

use crate::error::{PlumeError, Result};

/// Default maximum number of pages a notebook can hold.
pub const DEFAULT_MAX_PAGES: usize = 3000;

/// A digital notebook containing multiple pages.
///
/// The notebook manages page creation, retrieval and deletion, and offers a
/// simple name/content substring search. The richer search modes live in
/// [`SearchEngine`](crate::search::SearchEngine).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Notebook {
    name: String,
    max_pages: usize,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    pages: BTreeMap<u64, Page>,
    metadata: HashMap<String, Value>,
}

impl Notebook {
    /// Create a new notebook with the default page limit.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::with_max_pages(name, DEFAULT_MAX_PAGES)
    }

    /// Create a new notebook with a custom page limit.
    pub fn with_max_pages<S: Into<String>>(name: S, max_pages: usize) -> Self {
        let now = Utc::now();
        Notebook {
            name: name.into(),
            max_pages,
            created_at: now,
            updated_at: now,
            pages: BTreeMap::new(),
            metadata: HashMap::new(),
        }
    }

    /// Get the notebook name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the maximum page count.
    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Get the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get the last-update timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Create a new page in the notebook and return a reference to it.
    ///
    /// The new page receives identifier `max existing + 1`, or 1 for an empty
    /// notebook. Identifiers of deleted pages are never reused.
    ///
    /// Returns an error if the notebook has reached its page limit; the
    /// notebook is left unchanged in that case.
    pub fn create_page(&mut self, name: Option<&str>, content: &str) -> Result<&Page> {
        if self.pages.len() >= self.max_pages {
            return Err(PlumeError::notebook(format!(
                "cannot create new page: maximum of {} pages reached",
                self.max_pages
            )));
        }

        let new_id = self.pages.keys().next_back().map_or(1, |id| id + 1);
        let page = Page::new(new_id, name, content);
        self.updated_at = Utc::now();

        Ok(self.pages.entry(new_id).or_insert(page))
    }

    /// Get a page by its identifier.
    pub fn get_page(&self, page_id: u64) -> Result<&Page> {
        self.pages
            .get(&page_id)
            .ok_or_else(|| PlumeError::page(format!("no page exists with ID {page_id}")))
    }

    /// Get a mutable reference to a page by its identifier.
    ///
    /// The notebook's update timestamp is touched, since the caller is
    /// assumed to mutate the page.
    pub fn get_page_mut(&mut self, page_id: u64) -> Result<&mut Page> {
        match self.pages.entry(page_id) {
            Entry::Occupied(entry) => {
                self.updated_at = Utc::now();
                Ok(entry.into_mut())
            }
            Entry::Vacant(_) => Err(PlumeError::page(format!(
                "no page exists with ID {page_id}"
            ))),
        }
    }

    /// Delete a page from the notebook, returning the removed page.
    pub fn delete_page(&mut self, page_id: u64) -> Result<Page> {
        let page = self
            .pages
            .remove(&page_id)
            .ok_or_else(|| PlumeError::page(format!("no page exists with ID {page_id}")))?;
        self.updated_at = Utc::now();
        Ok(page)
    }

    /// Iterate over all pages in ascending-identifier order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }

    /// Get all pages as a list, sorted by identifier.
    pub fn list_pages(&self) -> Vec<&Page> {
        self.pages.values().collect()
    }

    /// Get the number of pages in the notebook.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if the notebook has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Find pages whose name or content contains the query string
    /// (case-insensitive substring match).
    pub fn search_pages(&self, query: &str) -> Vec<&Page> {
        let query = query.to_lowercase();
        self.pages
            .values()
            .filter(|page| {
                page.name().to_lowercase().contains(&query)
                    || page.content().to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Set a metadata value for the notebook.
    pub fn set_metadata<S: Into<String>>(&mut self, key: S, value: Value) {
        self.metadata.insert(key.into(), value);
        self.updated_at = Utc::now();
    }

    /// Get a metadata value for the notebook.
    pub fn metadata(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new("My Notebook")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notebook_defaults() {
        let notebook = Notebook::default();

        assert_eq!(notebook.name(), "My Notebook");
        assert_eq!(notebook.max_pages(), DEFAULT_MAX_PAGES);
        assert!(notebook.is_empty());
    }

    #[test]
    fn test_create_page() {
        let mut notebook = Notebook::new("Test Notebook");
        let page = notebook.create_page(Some("Test Page"), "Test content").unwrap();

        assert_eq!(page.id(), 1);
        assert_eq!(page.name(), "Test Page");
        assert_eq!(page.content(), "Test content");
        assert_eq!(notebook.page_count(), 1);
    }

    #[test]
    fn test_monotonic_page_ids() {
        let mut notebook = Notebook::new("Test Notebook");

        assert_eq!(notebook.create_page(Some("Page 1"), "").unwrap().id(), 1);
        assert_eq!(notebook.create_page(Some("Page 2"), "").unwrap().id(), 2);
        assert_eq!(notebook.create_page(Some("Page 3"), "").unwrap().id(), 3);
    }

    #[test]
    fn test_ids_never_reused_after_deletion() {
        let mut notebook = Notebook::new("Test Notebook");
        notebook.create_page(Some("Page 1"), "").unwrap();
        notebook.create_page(Some("Page 2"), "").unwrap();
        notebook.create_page(Some("Page 3"), "").unwrap();

        notebook.delete_page(2).unwrap();
        let page = notebook.create_page(Some("Page 4"), "").unwrap();

        assert_eq!(page.id(), 4);
        assert!(notebook.get_page(2).is_err());
    }

    #[test]
    fn test_get_nonexistent_page() {
        let notebook = Notebook::new("Test Notebook");
        assert!(notebook.get_page(999).is_err());
    }

    #[test]
    fn test_delete_nonexistent_page() {
        let mut notebook = Notebook::new("Test Notebook");
        assert!(notebook.delete_page(999).is_err());
    }

    #[test]
    fn test_list_pages_sorted_by_id() {
        let mut notebook = Notebook::new("Test Notebook");
        notebook.create_page(Some("Page 1"), "").unwrap();
        notebook.create_page(Some("Page 2"), "").unwrap();
        notebook.create_page(Some("Page 3"), "").unwrap();

        let pages = notebook.list_pages();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].name(), "Page 1");
        assert_eq!(pages[1].name(), "Page 2");
        assert_eq!(pages[2].name(), "Page 3");
    }

    #[test]
    fn test_search_pages() {
        let mut notebook = Notebook::new("Test Notebook");
        notebook
            .create_page(Some("Apple Page"), "This page is about apples")
            .unwrap();
        notebook
            .create_page(Some("Banana Page"), "This page is about bananas")
            .unwrap();
        notebook
            .create_page(Some("Apple Banana"), "This page is about both fruits")
            .unwrap();

        let results = notebook.search_pages("apple");

        assert_eq!(results.len(), 2);
        assert!(results.iter().any(|p| p.name() == "Apple Page"));
        assert!(results.iter().any(|p| p.name() == "Apple Banana"));
    }

    #[test]
    fn test_max_pages_limit() {
        let mut notebook = Notebook::with_max_pages("Test Notebook", 2);
        notebook.create_page(Some("Page 1"), "").unwrap();
        notebook.create_page(Some("Page 2"), "").unwrap();

        let err = notebook.create_page(Some("Page 3"), "").unwrap_err();
        assert!(matches!(err, PlumeError::Notebook(_)));
        assert_eq!(notebook.page_count(), 2);
    }

    #[test]
    fn test_update_page_content() {
        let mut notebook = Notebook::new("Test Notebook");
        notebook.create_page(Some("Page 1"), "before").unwrap();

        notebook.get_page_mut(1).unwrap().update_content("after");
        assert_eq!(notebook.get_page(1).unwrap().content(), "after");
    }
}
