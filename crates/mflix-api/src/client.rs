//! `MflixClient` - MFlix API client implementation.

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::instrument;
use url::Url;

use crate::api::LocalMflixApi;
use crate::error::HttpError;
use crate::params::{PageParams, SearchParams};

/// Default base URL for a local MFlix API server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// MFlix API client.
///
/// Holds the normalized base URL and a process-lifetime `reqwest::Client`
/// carrying the default JSON headers, reused across all calls.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MflixClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
}

/// Builder for `MflixClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MflixClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl MflixClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (default: [`DEFAULT_BASE_URL`]).
    ///
    /// Trailing slashes are stripped at build time.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Overrides the User-Agent (default: `mflix-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - The base URL does not parse.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<MflixClient> {
        let raw = self
            .base_url
            .unwrap_or_else(|| String::from(DEFAULT_BASE_URL));
        let base_url = Url::parse(raw.trim_end_matches('/'))
            .with_context(|| format!("invalid base URL: {raw}"))?;

        let user_agent = self.user_agent.unwrap_or_else(|| {
            String::from(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        });

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .default_headers(headers)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(MflixClient {
            http_client,
            base_url,
        })
    }
}

impl MflixClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> MflixClientBuilder {
        MflixClientBuilder::new()
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a GET request and decodes the JSON response body.
    ///
    /// One attempt per call: no retries, no backoff, no timeout override.
    /// Non-2xx responses are logged and returned as [`HttpError`].
    #[instrument(skip_all)]
    async fn request(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("failed to join URL path: {path}"))?;

        let request = self
            .http_client
            .get(url)
            .query(query)
            .build()
            .with_context(|| format!("failed to build request: {path}"))?;
        let url = request.url().clone();

        tracing::debug!(url = %url, "MFlix API request");

        let result = self.http_client.execute(request).await;
        let response = result.with_context(|| format!("request failed: {path}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            tracing::error!(
                url = %url,
                status = status.as_u16(),
                body = %body,
                "MFlix API request failed"
            );
            return Err(anyhow::Error::new(HttpError {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            }));
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body: {path}"))?;
        let raw_result: std::result::Result<Value, _> = serde_json::from_str(&body);
        raw_result.with_context(|| format!("failed to decode JSON response: {path}"))
    }
}

impl LocalMflixApi for MflixClient {
    #[instrument(skip_all)]
    async fn get_api_info(&self) -> Result<Value> {
        self.request("/", &[]).await
    }

    #[instrument(skip_all)]
    async fn get_all_movies(&self, page: &PageParams) -> Result<Value> {
        self.request("/api/movies", &page.to_query()).await
    }

    #[instrument(skip_all)]
    async fn get_movie_by_id(&self, movie_id: &str) -> Result<Value> {
        let path = format!("/api/movies/{movie_id}");
        self.request(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn search_movies(&self, params: &SearchParams) -> Result<Value> {
        self.request("/api/movies/search", &params.to_query()).await
    }

    #[instrument(skip_all)]
    async fn get_all_embedded_movies(&self, page: &PageParams) -> Result<Value> {
        self.request("/api/embedded-movies", &page.to_query()).await
    }

    #[instrument(skip_all)]
    async fn get_embedded_movie_by_id(&self, movie_id: &str) -> Result<Value> {
        let path = format!("/api/embedded-movies/{movie_id}");
        self.request(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn search_embedded_movies(&self, params: &SearchParams) -> Result<Value> {
        self.request("/api/embedded-movies/search", &params.to_query())
            .await
    }

    #[instrument(skip_all)]
    async fn get_all_comments(&self, page: &PageParams) -> Result<Value> {
        self.request("/api/comments", &page.to_query()).await
    }

    #[instrument(skip_all)]
    async fn get_comment_by_id(&self, comment_id: &str) -> Result<Value> {
        let path = format!("/api/comments/{comment_id}");
        self.request(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn get_comments_by_movie(&self, movie_id: &str) -> Result<Value> {
        let path = format!("/api/comments/movie/{movie_id}");
        self.request(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn get_all_users(&self, page: &PageParams) -> Result<Value> {
        self.request("/api/users", &page.to_query()).await
    }

    #[instrument(skip_all)]
    async fn get_user_by_id(&self, user_id: &str) -> Result<Value> {
        let path = format!("/api/users/{user_id}");
        self.request(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn get_all_theaters(&self, page: &PageParams) -> Result<Value> {
        self.request("/api/theaters", &page.to_query()).await
    }

    #[instrument(skip_all)]
    async fn get_theater_by_id(&self, theater_id: &str) -> Result<Value> {
        let path = format!("/api/theaters/{theater_id}");
        self.request(&path, &[]).await
    }

    #[instrument(skip_all)]
    async fn get_all_sessions(&self, page: &PageParams) -> Result<Value> {
        self.request("/api/sessions", &page.to_query()).await
    }

    #[instrument(skip_all)]
    async fn get_session_by_id(&self, session_id: &str) -> Result<Value> {
        let path = format!("/api/sessions/{session_id}");
        self.request(&path, &[]).await
    }
}
