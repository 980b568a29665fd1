use storage::Blobs;
use tutor_core::model::{ExportDocument, ImportDocument};

use crate::Clock;
use crate::activity_service::ACTIVITY_KEY;
use crate::bookmark_service::BOOKMARKS_KEY;
use crate::progress_service::PROGRESS_KEY;

/// Bundles and restores user state as a single transferable document.
#[derive(Clone)]
pub struct TransferService {
    clock: Clock,
    blobs: Blobs,
}

impl TransferService {
    #[must_use]
    pub fn new(clock: Clock, blobs: Blobs) -> Self {
        Self { clock, blobs }
    }

    /// Serializes progress, activity, and bookmarks into one pretty-printed
    /// JSON document stamped with the export time.
    #[must_use]
    pub fn export(&self) -> String {
        let document = ExportDocument {
            progress: self.blobs.read(PROGRESS_KEY),
            activity: self.blobs.read(ACTIVITY_KEY),
            bookmarks: self.blobs.read(BOOKMARKS_KEY),
            export_date: self.clock.now(),
        };

        serde_json::to_string_pretty(&document).unwrap_or_else(|err| {
            log::warn!("failed to serialize export document: {err}");
            String::from("{}")
        })
    }

    /// Restores state from an export document.
    ///
    /// Returns `false` on a document that does not parse, without touching
    /// the store. On success each section present in the document replaces
    /// its stored blob; absent sections leave the existing blob untouched.
    pub fn import(&self, document: &str) -> bool {
        let parsed: ImportDocument = match serde_json::from_str(document) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!("rejecting import document: {err}");
                return false;
            }
        };

        if let Some(progress) = parsed.progress {
            self.blobs.write(PROGRESS_KEY, &progress);
        }
        if let Some(activity) = parsed.activity {
            self.blobs.write(ACTIVITY_KEY, &activity);
        }
        if let Some(bookmarks) = parsed.bookmarks {
            self.blobs.write(BOOKMARKS_KEY, &bookmarks);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storage::{MemoryStore, StateStore};
    use tutor_core::time::fixed_clock;

    fn service() -> (MemoryStore, TransferService) {
        let store = MemoryStore::new();
        let blobs = Blobs::new(Arc::new(store.clone()));
        (store, TransferService::new(fixed_clock(), blobs))
    }

    #[test]
    fn export_is_pretty_printed_and_stamped() {
        let (_, transfer) = service();
        let document = transfer.export();
        assert!(document.contains('\n'));
        assert!(document.contains("\"exportDate\""));
        assert!(document.contains("\"progress\""));
    }

    #[test]
    fn malformed_import_writes_nothing() {
        let (store, transfer) = service();
        assert!(!transfer.import("{not json"));
        assert!(store.read(PROGRESS_KEY).unwrap().is_none());
        assert!(store.read(ACTIVITY_KEY).unwrap().is_none());
    }

    #[test]
    fn partial_import_leaves_missing_sections_untouched() {
        let (store, transfer) = service();
        store.write(PROGRESS_KEY, r#"{"m1":{"moduleId":"m1","completedLessons":[],"currentLessonIndex":0,"completed":false,"percentage":0.0,"lastAccessed":"2023-11-14T22:13:20Z"}}"#).unwrap();

        assert!(transfer.import(r#"{"bookmarks": []}"#));

        // Progress blob survives; bookmarks blob was overwritten.
        assert!(store.read(PROGRESS_KEY).unwrap().is_some());
        assert_eq!(store.read(BOOKMARKS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn empty_object_imports_successfully() {
        let (_, transfer) = service();
        assert!(transfer.import("{}"));
    }
}
