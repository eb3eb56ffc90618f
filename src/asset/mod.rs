//! CDN asset value type.
//!
//! An [`Asset`] pairs an optional URL path (e.g. `/avatars/123/abc.webp?size=256`)
//! with an optional network context. Factories validate size and format up
//! front and never touch the network; [`Asset::read`] and [`Asset::save`]
//! download on demand.

mod format;
mod save;
mod size;
pub mod source;

pub use format::{ImageFormat, VALID_AVATAR_FORMATS, VALID_STATIC_FORMATS};
pub use save::{SaveTarget, WritableSink};
pub use size::{valid_icon_size, MAX_SIZE, MIN_SIZE};

use crate::error::AssetError;
use crate::http::CdnFetch;
use format::format_set;
use source::{
    AvatarSource, CoverImageSource, EmojiSource, GuildIconSource, IconSource, StickerSource,
};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Origin every asset path is appended to.
pub const CDN_BASE: &str = "https://cdn.discordapp.com";

pub const DEFAULT_SIZE: u32 = 1024;
pub const DEFAULT_STATIC_FORMAT: ImageFormat = ImageFormat::Webp;
pub const DEFAULT_EMOJI_FORMAT: ImageFormat = ImageFormat::Png;

/// Shared network context handed to assets.
pub type State = Arc<dyn CdnFetch>;

/// A CDN asset. Equality and hashing consider only the URL path.
#[derive(Clone)]
pub struct Asset {
    state: Option<State>,
    url: Option<String>,
}

fn check_size(size: u32) -> Result<(), AssetError> {
    if valid_icon_size(size) {
        Ok(())
    } else {
        Err(AssetError::invalid_argument(
            "size must be a power of 2 between 16 and 4096",
        ))
    }
}

fn check_static(format: ImageFormat, what: &str) -> Result<(), AssetError> {
    if format.is_static() {
        Ok(())
    } else {
        Err(AssetError::invalid_argument(format!(
            "{} must be one of {}",
            what,
            format_set(&VALID_STATIC_FORMATS)
        )))
    }
}

/// Gif is only allowed when the source is animated.
fn check_animated(
    format: Option<ImageFormat>,
    animated: bool,
    what: &str,
) -> Result<(), AssetError> {
    if format == Some(ImageFormat::Gif) && !animated {
        Err(AssetError::invalid_argument(format!(
            "non animated {} do not support gif format",
            what
        )))
    } else {
        Ok(())
    }
}

fn resolve_format(
    format: Option<ImageFormat>,
    animated: bool,
    static_format: ImageFormat,
) -> ImageFormat {
    match format {
        Some(f) => f,
        None if animated => ImageFormat::Gif,
        None => static_format,
    }
}

impl Asset {
    /// Builds an asset from a raw path. An empty path means "no asset".
    pub fn new(state: Option<State>, url: Option<String>) -> Self {
        Self {
            state,
            url: url.filter(|u| !u.is_empty()),
        }
    }

    /// An asset with no URL (object has no custom image).
    pub fn empty(state: Option<State>) -> Self {
        Self { state, url: None }
    }

    /// `/avatars/{id}/{hash}.{format}?size={size}`, or the default avatar when
    /// the user has no custom one.
    pub fn from_avatar(
        state: Option<State>,
        user: &impl AvatarSource,
        format: Option<ImageFormat>,
        static_format: ImageFormat,
        size: u32,
    ) -> Result<Self, AssetError> {
        check_size(size)?;
        check_animated(format, user.is_avatar_animated(), "avatars")?;
        check_static(static_format, "static_format")?;

        let hash = match user.avatar() {
            Some(hash) => hash,
            None => return Ok(Self::new(state, Some(user.default_avatar_path()))),
        };

        let format = resolve_format(format, user.is_avatar_animated(), static_format);
        let id = user.id();
        let url = format!("/avatars/{id}/{hash}.{format}?size={size}");
        Ok(Self::new(state, Some(url)))
    }

    /// `/{path}-icons/{id}/{hash}.{format}?size={size}`; static formats only.
    pub fn from_icon(
        state: Option<State>,
        object: &impl IconSource,
        path: &str,
        format: ImageFormat,
        size: u32,
    ) -> Result<Self, AssetError> {
        let hash = match object.icon() {
            Some(hash) => hash,
            None => return Ok(Self::empty(state)),
        };

        check_size(size)?;
        check_static(format, "format")?;

        let id = object.id();
        let url = format!("/{path}-icons/{id}/{hash}.{format}?size={size}");
        Ok(Self::new(state, Some(url)))
    }

    /// `/app-assets/{id}/store/{hash}.{format}?size={size}`; static formats only.
    pub fn from_cover_image(
        state: Option<State>,
        object: &impl CoverImageSource,
        format: ImageFormat,
        size: u32,
    ) -> Result<Self, AssetError> {
        let hash = match object.cover_image() {
            Some(hash) => hash,
            None => return Ok(Self::empty(state)),
        };

        check_size(size)?;
        check_static(format, "format")?;

        let id = object.id();
        let url = format!("/app-assets/{id}/store/{hash}.{format}?size={size}");
        Ok(Self::new(state, Some(url)))
    }

    /// `/{key}/{id}/{hash}.{format}?size={size}` for banners, splashes and the like.
    pub fn from_guild_image(
        state: Option<State>,
        id: u64,
        hash: Option<&str>,
        key: &str,
        format: ImageFormat,
        size: u32,
    ) -> Result<Self, AssetError> {
        check_size(size)?;
        check_static(format, "format")?;

        match hash {
            Some(hash) => {
                let url = format!("/{key}/{id}/{hash}.{format}?size={size}");
                Ok(Self::new(state, Some(url)))
            }
            None => Ok(Self::empty(state)),
        }
    }

    /// `/icons/{id}/{hash}.{format}?size={size}`; gif when the icon is animated.
    pub fn from_guild_icon(
        state: Option<State>,
        guild: &impl GuildIconSource,
        format: Option<ImageFormat>,
        static_format: ImageFormat,
        size: u32,
    ) -> Result<Self, AssetError> {
        check_size(size)?;
        check_animated(format, guild.is_icon_animated(), "guild icons")?;
        check_static(static_format, "static_format")?;

        let hash = match guild.icon() {
            Some(hash) => hash,
            None => return Ok(Self::empty(state)),
        };

        let format = resolve_format(format, guild.is_icon_animated(), static_format);
        let id = guild.id();
        let url = format!("/icons/{id}/{hash}.{format}?size={size}");
        Ok(Self::new(state, Some(url)))
    }

    /// `/stickers/{id}/{hash}.png?size={size}`.
    pub fn from_sticker(
        state: Option<State>,
        sticker: &impl StickerSource,
        size: u32,
    ) -> Result<Self, AssetError> {
        check_size(size)?;

        let id = sticker.id();
        let hash = sticker.image();
        let url = format!("/stickers/{id}/{hash}.png?size={size}");
        Ok(Self::new(state, Some(url)))
    }

    /// `/emojis/{id}.{format}`; no size parameter.
    pub fn from_emoji(
        state: Option<State>,
        emoji: &impl EmojiSource,
        format: Option<ImageFormat>,
        static_format: ImageFormat,
    ) -> Result<Self, AssetError> {
        check_animated(format, emoji.animated(), "emojis")?;
        check_static(static_format, "static_format")?;

        let format = resolve_format(format, emoji.animated(), static_format);
        let id = emoji.id();
        Ok(Self::new(state, Some(format!("/emojis/{id}.{format}"))))
    }

    /// Path and query relative to [`CDN_BASE`], if any.
    pub fn url_path(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Full URL, or an empty string when there is no asset.
    pub fn url(&self) -> String {
        match &self.url {
            Some(path) => format!("{}{}", CDN_BASE, path),
            None => String::new(),
        }
    }

    pub fn is_present(&self) -> bool {
        self.url.is_some()
    }

    /// Length of the full URL; 0 when absent.
    pub fn len(&self) -> usize {
        match &self.url {
            Some(path) => CDN_BASE.chars().count() + path.chars().count(),
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Downloads the asset.
    ///
    /// Fails with [`AssetError::InvalidState`] when there is no URL or no
    /// connection state; transport errors are returned as-is.
    pub async fn read(&self) -> Result<Vec<u8>, AssetError> {
        let path = self
            .url
            .as_deref()
            .ok_or_else(|| AssetError::invalid_state("Invalid asset (no URL provided)"))?;
        let state = self.state.as_ref().ok_or_else(|| {
            AssetError::invalid_state("Invalid state (no connection state provided)")
        })?;

        let url = format!("{}{}", CDN_BASE, path);
        Ok(state.get_from_cdn(&url).await?)
    }

    /// Downloads the asset into `target` and returns the number of bytes written.
    /// `seek_begin` rewinds a sink afterwards; it has no effect for paths.
    pub async fn save<'a>(
        &self,
        target: impl Into<SaveTarget<'a>>,
        seek_begin: bool,
    ) -> Result<usize, AssetError> {
        let data = self.read().await?;
        Ok(save::write_to(target.into(), &data, seek_begin).await?)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.url {
            write!(f, "{}{}", CDN_BASE, path)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Asset").field("url", &self.url).finish()
    }
}

impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for Asset {}

impl Hash for Asset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}
