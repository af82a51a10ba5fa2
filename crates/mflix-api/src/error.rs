//! HTTP error type for the MFlix client.

use std::fmt;

/// Non-2xx HTTP response from the MFlix API.
///
/// Attached as the source of the returned `anyhow::Error` so callers can
/// downcast and inspect the status code and raw response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    /// HTTP status code.
    pub status: u16,
    /// Full request URL.
    pub url: String,
    /// Raw response body.
    pub body: String,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MFlix API error (HTTP {}) for {}: {}",
            self.status, self.url, self.body
        )
    }
}

impl std::error::Error for HttpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status_url_and_body() {
        // Arrange
        let error = HttpError {
            status: 404,
            url: String::from("http://localhost:3000/api/movies/abc123"),
            body: String::from(r#"{"message":"Movie not found"}"#),
        };

        // Act
        let rendered = error.to_string();

        // Assert
        assert!(rendered.contains("HTTP 404"));
        assert!(rendered.contains("/api/movies/abc123"));
        assert!(rendered.contains("Movie not found"));
    }
}
