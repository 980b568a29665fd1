use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::StateStore;

/// Typed view over a [`StateStore`]: one JSON document per key.
///
/// This is the adapter boundary for store failures. A missing blob, an
/// unreadable store, or a document that no longer parses all degrade to the
/// type's default value; failed writes are logged and dropped. Nothing
/// above this layer sees a storage error.
#[derive(Clone)]
pub struct Blobs {
    store: Arc<dyn StateStore>,
}

impl Blobs {
    #[must_use]
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Reads and decodes the blob under `key`, degrading to `T::default()`.
    #[must_use]
    pub fn read<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.store.read(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("discarding malformed `{key}` blob: {err}");
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(err) => {
                log::warn!("failed to read `{key}` blob: {err}");
                T::default()
            }
        }
    }

    /// Encodes `value` and replaces the blob under `key`.
    ///
    /// A write that cannot be serialized or persisted is logged and dropped.
    pub fn write<T>(&self, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(raw) => {
                if let Err(err) = self.store.write(key, &raw) {
                    log::warn!("dropping write of `{key}` blob: {err}");
                }
            }
            Err(err) => log::warn!("failed to serialize `{key}` blob: {err}"),
        }
    }

    /// Deletes the blob under `key`; failures are logged and dropped.
    pub fn remove(&self, key: &str) {
        if let Err(err) = self.store.remove(key) {
            log::warn!("failed to remove `{key}` blob: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::collections::HashMap;

    fn blobs() -> (MemoryStore, Blobs) {
        let store = MemoryStore::new();
        let blobs = Blobs::new(Arc::new(store.clone()));
        (store, blobs)
    }

    #[test]
    fn round_trips_a_typed_document() {
        let (_, blobs) = blobs();
        let mut doc: HashMap<String, u32> = HashMap::new();
        doc.insert("l1".to_owned(), 3);

        blobs.write("progress", &doc);
        let back: HashMap<String, u32> = blobs.read("progress");
        assert_eq!(back, doc);
    }

    #[test]
    fn missing_blob_reads_as_default() {
        let (_, blobs) = blobs();
        let doc: HashMap<String, u32> = blobs.read("progress");
        assert!(doc.is_empty());
    }

    #[test]
    fn malformed_blob_reads_as_default() {
        let (store, blobs) = blobs();
        store.write("progress", "not json").unwrap();

        let doc: HashMap<String, u32> = blobs.read("progress");
        assert!(doc.is_empty());
    }

    #[test]
    fn remove_clears_the_blob() {
        let (store, blobs) = blobs();
        blobs.write("bookmarks", &vec!["m1"]);
        blobs.remove("bookmarks");
        assert!(store.read("bookmarks").unwrap().is_none());
    }
}
