//! Transport error type for CDN fetches.

/// Error from a CDN GET (bad URL, curl failure, or non-2xx status).
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// 404: the asset was deleted or never existed.
    #[error("GET {url} returned HTTP 404 (not found)")]
    NotFound { url: String },
    #[error("GET {url} returned HTTP 403 (forbidden)")]
    Forbidden { url: String },
    #[error("GET {url} returned HTTP {code}")]
    Status { code: u32, url: String },
    /// Curl reported an error (timeout, connection, TLS, etc.).
    #[error("GET request failed: {0}")]
    Curl(#[from] curl::Error),
    /// The blocking transfer task panicked or was cancelled.
    #[error("transfer task failed: {0}")]
    Task(String),
}

impl HttpError {
    /// Map a non-2xx status to its error; `None` for success codes.
    pub fn from_status(code: u32, url: &str) -> Option<Self> {
        match code {
            200..=299 => None,
            404 => Some(HttpError::NotFound {
                url: url.to_string(),
            }),
            403 => Some(HttpError::Forbidden {
                url: url.to_string(),
            }),
            _ => Some(HttpError::Status {
                code,
                url: url.to_string(),
            }),
        }
    }
}
