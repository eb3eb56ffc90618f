//! Error type returned by asset construction, fetch and save.

use crate::http::HttpError;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Bad size, bad format, or gif requested for a non-animated source.
    #[error("{0}")]
    InvalidArgument(String),
    /// Fetch attempted without a URL or without a connection state.
    #[error("{0}")]
    InvalidState(String),
    /// Transport failure, passed through unchanged.
    #[error(transparent)]
    Http(#[from] HttpError),
    /// Local write failure in `save`.
    #[error("failed to write asset: {0}")]
    Io(#[from] std::io::Error),
}

impl AssetError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        AssetError::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_state(msg: impl Into<String>) -> Self {
        AssetError::InvalidState(msg.into())
    }
}
