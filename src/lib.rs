//! Discord CDN assets: validated URL construction and on-demand fetch/save.

pub mod asset;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;

pub use asset::{Asset, ImageFormat, SaveTarget, CDN_BASE};
pub use error::AssetError;
pub use http::{CdnFetch, HttpClient, HttpError};
