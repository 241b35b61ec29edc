use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::error::{AppError, AppResult};
use crate::models::MovieDetails;

/// Language parameter sent with every metadata request
const LANGUAGE: &str = "en-US";

/// Fetches poster image URLs from an external metadata service.
///
/// A failed lookup is an absent poster, not an error: enrichment must never
/// fail the request it decorates.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    async fn fetch_poster(&self, movie_id: u64) -> Option<String>;
}

/// TMDB-backed poster provider
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base: String,
}

impl TmdbClient {
    /// Creates a provider with a per-call timeout on the underlying client,
    /// so a hanging metadata call degrades instead of stalling the request.
    pub fn new(
        api_key: String,
        api_url: String,
        image_base: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
            image_base,
        })
    }

    async fn fetch_details(&self, movie_id: u64) -> AppResult<MovieDetails> {
        let url = format!("{}/movie/{}", self.api_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", LANGUAGE),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    fn poster_url(&self, poster_path: &str) -> String {
        format!("{}{}", self.image_base, poster_path)
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbClient {
    async fn fetch_poster(&self, movie_id: u64) -> Option<String> {
        match self.fetch_details(movie_id).await {
            Ok(details) => {
                let poster = details.poster_path.map(|path| self.poster_url(&path));
                if poster.is_none() {
                    tracing::debug!(movie_id, "Movie has no poster path");
                }
                poster
            }
            Err(e) => {
                tracing::warn!(movie_id, error = %e, "Poster lookup failed");
                None
            }
        }
    }
}
