//! Platform tags and URL classification.
//!
//! Classification is plain substring containment over the raw URL string,
//! checked in a fixed order. No URL parsing is done, so a query parameter
//! mentioning another host classifies as that host.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platforms the relay knows how to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Instagram posts, reels and IGTV
    Instagram,
    /// YouTube videos and shorts
    Youtube,
    /// Twitter / X posts
    Twitter,
    /// TikTok videos
    Tiktok,
}

impl Platform {
    /// All platforms in classification order.
    pub const ALL: [Self; 4] = [Self::Instagram, Self::Youtube, Self::Twitter, Self::Tiktok];

    /// Wire tag of the platform.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Youtube => "youtube",
            Self::Twitter => "twitter",
            Self::Tiktok => "tiktok",
        }
    }

    /// Parses a wire tag. Unknown tags yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shark_core::platform::Platform;
    /// assert_eq!(Platform::from_tag("youtube"), Some(Platform::Youtube));
    /// assert_eq!(Platform::from_tag("vimeo"), None);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == tag)
    }

    /// Host substrings that identify this platform.
    const fn markers(self) -> &'static [&'static str] {
        match self {
            Self::Instagram => &["instagram.com"],
            Self::Youtube => &["youtube.com", "youtu.be"],
            Self::Twitter => &["twitter.com", "x.com"],
            Self::Tiktok => &["tiktok.com"],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a URL by substring; first match in [`Platform::ALL`] order wins.
///
/// # Examples
///
/// ```
/// use shark_core::platform::{classify, Platform};
/// assert_eq!(classify("https://youtu.be/abc"), Some(Platform::Youtube));
/// assert_eq!(classify("https://example.org"), None);
/// ```
#[must_use]
pub fn classify(url: &str) -> Option<Platform> {
    Platform::ALL
        .into_iter()
        .find(|platform| platform.markers().iter().any(|m| url.contains(m)))
}
