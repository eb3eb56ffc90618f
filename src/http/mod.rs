//! CDN transport.
//!
//! [`CdnFetch`] is the capability an [`crate::Asset`] needs to download its
//! bytes. [`HttpClient`] implements it with libcurl; the blocking transfer runs
//! on tokio's blocking pool.

mod error;

pub use error::HttpError;

use crate::config::HttpConfig;
use async_trait::async_trait;

/// Network context able to GET a full CDN URL.
#[async_trait]
pub trait CdnFetch: Send + Sync {
    async fn get_from_cdn(&self, url: &str) -> Result<Vec<u8>, HttpError>;
}

/// Curl-backed [`CdnFetch`]. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    config: HttpConfig,
}

impl HttpClient {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Performs the GET on the current thread; call from `spawn_blocking` if used from async code.
    pub fn get_blocking(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        check_url(url)?;

        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.config.max_redirections)?;
        easy.connect_timeout(self.config.connect_timeout())?;
        easy.timeout(self.config.timeout())?;
        easy.useragent(&self.config.user_agent)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if let Some(err) = HttpError::from_status(code, url) {
            return Err(err);
        }

        tracing::debug!(url, bytes = body.len(), "CDN GET complete");
        Ok(body)
    }
}

#[async_trait]
impl CdnFetch for HttpClient {
    async fn get_from_cdn(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let client = self.clone();
        let url = url.to_string();
        tracing::debug!(url = %url, "CDN GET");
        tokio::task::spawn_blocking(move || client.get_blocking(&url))
            .await
            .map_err(|e| HttpError::Task(e.to_string()))?
    }
}

/// Rejects anything that is not an absolute http(s) URL.
fn check_url(url: &str) -> Result<(), HttpError> {
    let parsed = url::Url::parse(url).map_err(|e| HttpError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(HttpError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {:?}", other),
        }),
    }
}
