//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `CatalogClient`.
///
/// Callers typically degrade a failed catalog fetch to an empty module
/// list; the progress engine itself never sees these.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("lesson {lesson_id} not found in module {module_id}")]
    LessonNotFound {
        module_id: String,
        lesson_id: String,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
