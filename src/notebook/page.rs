//! Page structure for the notebook.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single page in a notebook.
///
/// Each page has a unique identifier within its parent notebook, a display
/// name, a mutable text body, timestamps, and a free-form metadata map.
/// Pages are owned exclusively by their parent [`Notebook`](crate::notebook::Notebook).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page {
    id: u64,
    name: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    metadata: HashMap<String, Value>,
}

impl Page {
    /// Create a new page.
    ///
    /// When `name` is `None` the page is named `"Page {id}"`.
    pub fn new<S: Into<String>>(id: u64, name: Option<S>, content: S) -> Self {
        let now = Utc::now();
        Page {
            id,
            name: name
                .map(|n| n.into())
                .unwrap_or_else(|| format!("Page {id}")),
            content: content.into(),
            created_at: now,
            updated_at: now,
            metadata: HashMap::new(),
        }
    }

    /// Get the page identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the text body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the text body and touch the update timestamp.
    pub fn update_content<S: Into<String>>(&mut self, content: S) {
        self.content = content.into();
        self.updated_at = Utc::now();
    }

    /// Rename the page and touch the update timestamp.
    pub fn rename<S: Into<String>>(&mut self, new_name: S) {
        self.name = new_name.into();
        self.updated_at = Utc::now();
    }

    /// Set a metadata value and touch the update timestamp.
    pub fn set_metadata<S: Into<String>>(&mut self, key: S, value: Value) {
        self.metadata.insert(key.into(), value);
        self.updated_at = Utc::now();
    }

    /// Get a metadata value.
    pub fn metadata(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Get the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get the last-update timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_creation() {
        let page = Page::new(1, Some("Test Page"), "Test content");

        assert_eq!(page.id(), 1);
        assert_eq!(page.name(), "Test Page");
        assert_eq!(page.content(), "Test content");
        assert_eq!(page.created_at(), page.updated_at());
    }

    #[test]
    fn test_default_name() {
        let page = Page::new(42, None, "");
        assert_eq!(page.name(), "Page 42");
    }

    #[test]
    fn test_update_content() {
        let mut page = Page::new(1, None, "before");
        page.update_content("after");

        assert_eq!(page.content(), "after");
        assert!(page.updated_at() >= page.created_at());
    }

    #[test]
    fn test_rename() {
        let mut page = Page::new(1, Some("Old"), "");
        page.rename("New");
        assert_eq!(page.name(), "New");
    }

    #[test]
    fn test_metadata() {
        let mut page = Page::new(1, None, "");
        assert!(page.metadata("tags").is_none());

        page.set_metadata("tags", json!(["draft", "ideas"]));
        assert_eq!(page.metadata("tags"), Some(&json!(["draft", "ideas"])));
    }
}
