//! Client for the TMDB movie catalog.
//!
//! One call per movie: the base `/movie/{id}` resource is requested with `credits`
//! and `external_ids` appended, so cast, crew and social handles come back in the
//! same document.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::MovieId;
use tracing::debug;
use url::Url;

/// Raw movie document models
#[allow(missing_docs)]
pub mod models;

/// Sub-resources embedded in every movie request
pub const APPEND_TO_RESPONSE: &str = "credits,external_ids";

/// Fetches raw movie documents from the catalog
pub struct CatalogClient {
    /// HTTP client for catalog requests
    http_client: reqwest::Client,

    /// API root, ending in '/'
    base: Url,

    /// TMDB API key
    api_key: String,

    /// Response language
    language: String,
}

impl CatalogClient {
    /// Create a new catalog client
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be created
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("movie-harvest/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config {
                message: format!("failed to create HTTP client: {}", e),
                key: None,
            })?;

        Ok(Self {
            http_client,
            base: config.base()?,
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }

    /// URL of a movie resource, without query parameters
    pub fn movie_url(&self, movie_id: MovieId) -> Result<Url> {
        self.base
            .join(&format!("movie/{}", movie_id))
            .map_err(|e| Error::Config {
                message: format!("cannot build URL for movie {}: {}", movie_id, e),
                key: Some("base_url".to_string()),
            })
    }

    /// Fetch the raw JSON document for one movie
    ///
    /// # Errors
    /// - [`Error::Network`] on connect/timeout/read failures
    /// - [`Error::HttpStatus`] for any non-2xx answer (unknown and private IDs give 404)
    /// - [`Error::Decode`] when the body is not JSON
    pub async fn fetch_movie(&self, movie_id: MovieId) -> Result<serde_json::Value> {
        let url = self.movie_url(movie_id)?;
        debug!(movie_id = %movie_id, "Fetching movie");

        let response = self
            .http_client
            .get(url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
                ("append_to_response", APPEND_TO_RESPONSE),
            ])
            .send()
            .await?;

        // Check HTTP status before trying to parse the response body
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                movie_id,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::Decode { movie_id, source })
    }
}
