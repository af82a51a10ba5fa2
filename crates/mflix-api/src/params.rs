//! MFlix API request parameter types.

/// Pagination parameters for collection endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub limit: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PageParams {
    /// Creates pagination parameters.
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Builds the `page`/`limit` query pairs.
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// Search filters for the movie search endpoints.
///
/// A filter is sent only when present and non-empty; the server treats a
/// missing filter as "not filtered on".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Title filter (server-side regex match).
    pub title: Option<String>,
    /// Exact genre filter.
    pub genre: Option<String>,
    /// Release year filter.
    pub year: Option<u32>,
}

impl SearchParams {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title filter.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the genre filter.
    #[must_use]
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Sets the release year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Builds the query pairs, skipping absent and empty filters.
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query: Vec<(&'static str, String)> = Vec::new();

        if let Some(ref title) = self.title
            && !title.is_empty()
        {
            query.push(("title", title.clone()));
        }
        if let Some(ref genre) = self.genre
            && !genre.is_empty()
        {
            query.push(("genre", genre.clone()));
        }
        if let Some(year) = self.year {
            query.push(("year", year.to_string()));
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_default() {
        // Arrange & Act
        let page = PageParams::default();

        // Assert
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn test_page_params_to_query() {
        // Arrange
        let page = PageParams::new(3, 25);

        // Act
        let query = page.to_query();

        // Assert
        assert_eq!(
            query,
            vec![
                ("page", String::from("3")),
                ("limit", String::from("25")),
            ]
        );
    }

    #[test]
    fn test_search_params_empty_builds_no_query() {
        // Arrange & Act
        let query = SearchParams::new().to_query();

        // Assert
        assert!(query.is_empty());
    }

    #[test]
    fn test_search_params_includes_only_set_filters() {
        // Arrange
        let params = SearchParams::new().title("Star").year(1977);

        // Act
        let query = params.to_query();

        // Assert
        assert_eq!(
            query,
            vec![
                ("title", String::from("Star")),
                ("year", String::from("1977")),
            ]
        );
    }

    #[test]
    fn test_search_params_skips_empty_strings() {
        // Arrange
        let params = SearchParams::new().title("").genre("Western");

        // Act
        let query = params.to_query();

        // Assert
        assert_eq!(query, vec![("genre", String::from("Western"))]);
    }
}
