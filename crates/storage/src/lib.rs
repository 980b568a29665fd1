#![forbid(unsafe_code)]

pub mod blob;
pub mod json_file;
pub mod store;

pub use blob::Blobs;
pub use json_file::JsonFileStore;
pub use store::{MemoryStore, StateStore, StorageError};
