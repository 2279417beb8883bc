// ============================================================================
// BOOKS API - Google Books volumes search (stateless HTTP)
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::VolumesResponse;

/// External book search endpoint
#[async_trait(?Send)]
pub trait BookSearchApi {
    async fn search_volumes(&self, query: &str) -> Result<VolumesResponse, AppError>;
}

/// `GET {base}?q={query}` with the query URL-encoded
pub fn search_url(base_url: &str, query: &str) -> String {
    format!("{}?q={}", base_url, urlencoding::encode(query))
}

#[derive(Clone)]
pub struct GoogleBooksClient {
    base_url: String,
}

impl GoogleBooksClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.books_api_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('?').to_string(),
        }
    }
}

impl Default for GoogleBooksClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl BookSearchApi for GoogleBooksClient {
    async fn search_volumes(&self, query: &str) -> Result<VolumesResponse, AppError> {
        let url = search_url(&self.base_url, query);
        log::debug!("🔍 [BOOKS] GET {}", url);

        let response = Request::get(&url).send().await?;

        if !response.ok() {
            return Err(AppError::Http {
                status: response.status(),
                message: response.status_text(),
            });
        }

        let volumes = response.json::<VolumesResponse>().await?;
        log::info!("📚 [BOOKS] {} volumes for '{}'", volumes.total_items, query);
        Ok(volumes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_url_encoded() {
        let url = search_url("https://www.googleapis.com/books/v1/volumes", "Star Wars & co?");
        assert_eq!(
            url,
            "https://www.googleapis.com/books/v1/volumes?q=Star%20Wars%20%26%20co%3F"
        );
    }

    #[test]
    fn trailing_question_mark_is_dropped_from_base() {
        let client = GoogleBooksClient::with_base_url("https://example.test/volumes?");
        assert_eq!(client.base_url, "https://example.test/volumes");
    }
}
