use reqwest::Client;
use serde::Deserialize;

use tutor_core::model::{SearchResult, TutorialLesson, TutorialModule};
use tutor_core::search::MIN_QUERY_LEN;

use crate::error::CatalogError;

/// HTTP client for the read-only tutorial catalog API.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    modules: Vec<TutorialModule>,
}

impl CatalogClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    /// Fetches the whole module catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the request fails or the server responds
    /// with a non-success status.
    pub async fn all_tutorials(&self) -> Result<Vec<TutorialModule>, CatalogError> {
        let response = self.client.get(self.endpoint("tutorials")).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status()));
        }
        let body: CatalogResponse = response.json().await?;
        Ok(body.modules)
    }

    /// Fetches a single module by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::HttpStatus` for missing modules (the server
    /// answers 404) and `CatalogError::Http` for transport failures.
    pub async fn module(&self, module_id: &str) -> Result<TutorialModule, CatalogError> {
        let response = self
            .client
            .get(self.endpoint(&format!("tutorials/{module_id}")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Fetches a module and extracts one lesson from it.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::LessonNotFound` if the module exists but has
    /// no such lesson.
    pub async fn lesson(
        &self,
        module_id: &str,
        lesson_id: &str,
    ) -> Result<TutorialLesson, CatalogError> {
        let module = self.module(module_id).await?;
        module
            .lessons
            .into_iter()
            .find(|lesson| lesson.id == lesson_id)
            .ok_or_else(|| CatalogError::LessonNotFound {
                module_id: module_id.to_owned(),
                lesson_id: lesson_id.to_owned(),
            })
    }

    /// Runs a server-side catalog search.
    ///
    /// Queries shorter than two characters (after trimming) return an empty
    /// result set without issuing a request.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the request fails or the server responds
    /// with a non-success status.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, CatalogError> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .get(self.endpoint("search"))
            .query(&[("q", query)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }
}
