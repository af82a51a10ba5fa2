//! `MflixApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;
use serde_json::Value;

use crate::params::{PageParams, SearchParams};

/// MFlix API trait.
///
/// One method per remote GET endpoint. Responses are passed through as
/// `serde_json::Value` exactly as received from the server.
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MflixApi: Send)]
pub trait LocalMflixApi {
    /// Fetches service metadata from the root endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn get_api_info(&self) -> Result<Value>;

    /// Fetches a page of movies (`GET /api/movies`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn get_all_movies(&self, page: &PageParams) -> Result<Value>;

    /// Fetches a single movie by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn get_movie_by_id(&self, movie_id: &str) -> Result<Value>;

    /// Searches movies by title, genre, and/or year.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn search_movies(&self, params: &SearchParams) -> Result<Value>;

    /// Fetches a page of embedded movies (`GET /api/embedded-movies`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn get_all_embedded_movies(&self, page: &PageParams) -> Result<Value>;

    /// Fetches a single embedded movie by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn get_embedded_movie_by_id(&self, movie_id: &str) -> Result<Value>;

    /// Searches embedded movies by title, genre, and/or year.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn search_embedded_movies(&self, params: &SearchParams) -> Result<Value>;

    /// Fetches a page of comments (`GET /api/comments`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn get_all_comments(&self, page: &PageParams) -> Result<Value>;

    /// Fetches a single comment by ID (movie info populated server-side).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn get_comment_by_id(&self, comment_id: &str) -> Result<Value>;

    /// Fetches all comments for one movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn get_comments_by_movie(&self, movie_id: &str) -> Result<Value>;

    /// Fetches a page of users (`GET /api/users`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn get_all_users(&self, page: &PageParams) -> Result<Value>;

    /// Fetches a single user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn get_user_by_id(&self, user_id: &str) -> Result<Value>;

    /// Fetches a page of theaters (`GET /api/theaters`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn get_all_theaters(&self, page: &PageParams) -> Result<Value>;

    /// Fetches a single theater by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn get_theater_by_id(&self, theater_id: &str) -> Result<Value>;

    /// Fetches a page of sessions (`GET /api/sessions`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn get_all_sessions(&self, page: &PageParams) -> Result<Value>;

    /// Fetches a single session by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn get_session_by_id(&self, session_id: &str) -> Result<Value>;
}
