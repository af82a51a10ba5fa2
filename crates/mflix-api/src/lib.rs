//! API client library for the MFlix movie catalog service.
//!
//! Issues GET requests against the MFlix REST endpoints (movies, embedded
//! movies, comments, users, theaters, sessions) and returns the decoded
//! JSON response bodies unchanged.

mod api;
mod client;
mod error;
mod params;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalMflixApi, MflixApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{DEFAULT_BASE_URL, MflixClient, MflixClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::HttpError;
pub use params::{PageParams, SearchParams};
