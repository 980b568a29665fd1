use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved reference to a module, or to a lesson within one.
///
/// Bookmarks are identified by the `(module_id, lesson_id)` composite key;
/// the title is display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub module_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<String>,
    pub title: String,
    pub timestamp: DateTime<Utc>,
}

impl Bookmark {
    /// Creates a bookmark, defaulting the title to `"Module {module_id}"`.
    #[must_use]
    pub fn new(
        module_id: impl Into<String>,
        lesson_id: Option<String>,
        title: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let module_id = module_id.into();
        let title = title.unwrap_or_else(|| format!("Module {module_id}"));
        Self {
            module_id,
            lesson_id,
            title,
            timestamp,
        }
    }

    fn matches(&self, module_id: &str, lesson_id: Option<&str>) -> bool {
        self.module_id == module_id && self.lesson_id.as_deref() == lesson_id
    }
}

/// Newest-first list of bookmarks with composite-key uniqueness.
///
/// This is the shape of the `bookmarks` blob in the state store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkList(Vec<Bookmark>);

impl BookmarkList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a bookmark unless one with the same composite key exists.
    ///
    /// Returns whether the bookmark was added.
    pub fn add(&mut self, bookmark: Bookmark) -> bool {
        if self.contains(&bookmark.module_id, bookmark.lesson_id.as_deref()) {
            return false;
        }
        self.0.insert(0, bookmark);
        true
    }

    /// Removes the bookmark matching the composite key; no-op if absent.
    pub fn remove(&mut self, module_id: &str, lesson_id: Option<&str>) {
        self.0.retain(|b| !b.matches(module_id, lesson_id));
    }

    #[must_use]
    pub fn contains(&self, module_id: &str, lesson_id: Option<&str>) -> bool {
        self.0.iter().any(|b| b.matches(module_id, lesson_id))
    }

    /// All bookmarks, newest first.
    #[must_use]
    pub fn entries(&self) -> &[Bookmark] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
