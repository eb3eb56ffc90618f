//! Image formats accepted by the CDN.

use crate::error::AssetError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Webp,
    Jpeg,
    Jpg,
    Png,
    Gif,
}

/// Formats valid for any image.
pub const VALID_STATIC_FORMATS: [ImageFormat; 4] = [
    ImageFormat::Webp,
    ImageFormat::Jpeg,
    ImageFormat::Jpg,
    ImageFormat::Png,
];

/// Formats valid for avatars, guild icons and emojis (gif only when animated).
pub const VALID_AVATAR_FORMATS: [ImageFormat; 5] = [
    ImageFormat::Webp,
    ImageFormat::Jpeg,
    ImageFormat::Jpg,
    ImageFormat::Png,
    ImageFormat::Gif,
];

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Webp => "webp",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
        }
    }

    pub fn is_static(self) -> bool {
        VALID_STATIC_FORMATS.contains(&self)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VALID_AVATAR_FORMATS
            .iter()
            .copied()
            .find(|f| f.extension().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                AssetError::invalid_argument(format!(
                    "format must be one of {}",
                    format_set(&VALID_AVATAR_FORMATS)
                ))
            })
    }
}

/// Renders a set as `{webp, jpeg, ...}` for error messages.
pub(crate) fn format_set(formats: &[ImageFormat]) -> String {
    let names: Vec<&str> = formats.iter().map(|f| f.extension()).collect();
    format!("{{{}}}", names.join(", "))
}
