//! Read-only views of the domain objects that own CDN images.
//!
//! Users, guilds, emojis and stickers live elsewhere; the factories on
//! [`crate::Asset`] only need an id, an image hash and, for some kinds,
//! whether the image is animated.

/// Hashes of animated images carry this prefix.
pub const ANIMATED_HASH_PREFIX: &str = "a_";

pub(crate) fn is_animated_hash(hash: Option<&str>) -> bool {
    hash.is_some_and(|h| h.starts_with(ANIMATED_HASH_PREFIX))
}

pub trait AvatarSource {
    fn id(&self) -> u64;
    /// Custom avatar hash, `None` when the user has the default avatar.
    fn avatar(&self) -> Option<&str>;
    /// Path of the server-side default avatar, e.g. from [`DefaultAvatar::path`].
    fn default_avatar_path(&self) -> String;

    fn is_avatar_animated(&self) -> bool {
        is_animated_hash(self.avatar())
    }
}

/// Objects with an icon under `/{prefix}-icons/` (teams, applications).
pub trait IconSource {
    fn id(&self) -> u64;
    fn icon(&self) -> Option<&str>;
}

pub trait CoverImageSource {
    fn id(&self) -> u64;
    fn cover_image(&self) -> Option<&str>;
}

pub trait GuildIconSource {
    fn id(&self) -> u64;
    fn icon(&self) -> Option<&str>;

    fn is_icon_animated(&self) -> bool {
        is_animated_hash(self.icon())
    }
}

pub trait StickerSource {
    fn id(&self) -> u64;
    fn image(&self) -> &str;
}

pub trait EmojiSource {
    fn id(&self) -> u64;
    fn animated(&self) -> bool;
}

/// Server-side default avatars, chosen by discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultAvatar {
    Blurple = 0,
    Grey = 1,
    Green = 2,
    Orange = 3,
    Red = 4,
}

impl DefaultAvatar {
    pub fn from_discriminator(discriminator: u16) -> Self {
        match discriminator % 5 {
            0 => DefaultAvatar::Blurple,
            1 => DefaultAvatar::Grey,
            2 => DefaultAvatar::Green,
            3 => DefaultAvatar::Orange,
            _ => DefaultAvatar::Red,
        }
    }

    pub fn path(self) -> String {
        format!("/embed/avatars/{}.png", self as u8)
    }
}
