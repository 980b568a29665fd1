use storage::Blobs;
use tutor_core::model::{Bookmark, BookmarkList};

use crate::Clock;

/// Store key for the bookmarks blob.
pub(crate) const BOOKMARKS_KEY: &str = "bookmarks";

/// Keyed set of saved `(module, lesson)` references.
#[derive(Clone)]
pub struct BookmarkService {
    clock: Clock,
    blobs: Blobs,
}

impl BookmarkService {
    #[must_use]
    pub fn new(clock: Clock, blobs: Blobs) -> Self {
        Self { clock, blobs }
    }

    /// Saves a bookmark; a no-op when the composite key already exists.
    ///
    /// Without a title the bookmark is labelled `"Module {module_id}"`.
    pub fn add(&self, module_id: &str, lesson_id: Option<&str>, title: Option<&str>) {
        let mut list: BookmarkList = self.blobs.read(BOOKMARKS_KEY);
        let bookmark = Bookmark::new(
            module_id,
            lesson_id.map(ToOwned::to_owned),
            title.map(ToOwned::to_owned),
            self.clock.now(),
        );
        if list.add(bookmark) {
            self.blobs.write(BOOKMARKS_KEY, &list);
        }
    }

    /// Removes the bookmark with the given composite key; no-op if absent.
    pub fn remove(&self, module_id: &str, lesson_id: Option<&str>) {
        let mut list: BookmarkList = self.blobs.read(BOOKMARKS_KEY);
        list.remove(module_id, lesson_id);
        self.blobs.write(BOOKMARKS_KEY, &list);
    }

    /// All bookmarks, newest first.
    #[must_use]
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        let list: BookmarkList = self.blobs.read(BOOKMARKS_KEY);
        list.entries().to_vec()
    }

    #[must_use]
    pub fn is_bookmarked(&self, module_id: &str, lesson_id: Option<&str>) -> bool {
        let list: BookmarkList = self.blobs.read(BOOKMARKS_KEY);
        list.contains(module_id, lesson_id)
    }
}
