use thiserror::Error;

/// A catalog request that did not produce a usable result.
///
/// Never retried by the client; callers decide whether to show an error,
/// an empty state, or try again.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or other transport failure
    #[error("Request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {endpoint} timed out")]
    Timeout { endpoint: String },

    /// The catalog answered with a non-2xx status
    #[error("Catalog returned HTTP {status} for {endpoint}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The body was not the expected JSON shape
    #[error("Failed to parse response from {endpoint}: {message}")]
    Parse { endpoint: String, message: String },
}

impl FetchError {
    pub(crate) fn from_reqwest(endpoint: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FetchError::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else {
            FetchError::Request {
                endpoint: endpoint.to_string(),
                source,
            }
        }
    }

    pub(crate) fn parse(endpoint: &str, message: impl Into<String>) -> Self {
        FetchError::Parse {
            endpoint: endpoint.to_string(),
            message: message.into(),
        }
    }

    /// Catalog path the failed request targeted, e.g. `/movie/popular`
    pub fn endpoint(&self) -> &str {
        match self {
            FetchError::Request { endpoint, .. }
            | FetchError::Timeout { endpoint }
            | FetchError::Status { endpoint, .. }
            | FetchError::Parse { endpoint, .. } => endpoint,
        }
    }

    /// HTTP status when the catalog answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Failure of the single-movie detail request.
///
/// Kept apart from [`FetchError`] so a detail view can fall back to the
/// list information it already holds.
#[derive(Debug, Error)]
#[error("Failed to fetch details for movie {movie_id}: {source}")]
pub struct DetailFetchError {
    pub movie_id: u64,
    #[source]
    pub source: FetchError,
}

impl DetailFetchError {
    pub fn new(movie_id: u64, source: FetchError) -> Self {
        Self { movie_id, source }
    }

    pub fn fetch_error(&self) -> &FetchError {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_accessors() {
        let err = FetchError::Status {
            endpoint: "/movie/popular".to_string(),
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.endpoint(), "/movie/popular");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Catalog returned HTTP 500 for /movie/popular: boom");
    }

    #[test]
    fn test_detail_error_wraps_fetch_error() {
        let err = DetailFetchError::new(27205, FetchError::parse("/movie/27205", "missing id"));
        assert_eq!(err.movie_id, 27205);
        assert_eq!(err.fetch_error().endpoint(), "/movie/27205");
        assert!(err.to_string().contains("movie 27205"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
