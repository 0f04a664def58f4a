//! Quality choices offered to users.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested media variant.
///
/// Deserialization is lenient: anything that is not a known tag becomes
/// [`Quality::Hd`], the combined default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Quality {
    /// Best combined video and audio
    #[default]
    Hd,
    /// Video stream only
    Video,
    /// Audio stream only
    Audio,
    /// Still images only
    Image,
}

impl Quality {
    /// All qualities in menu order.
    pub const ALL: [Self; 4] = [Self::Hd, Self::Video, Self::Audio, Self::Image];

    /// Wire tag of the quality.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hd => "hd",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Image => "image",
        }
    }

    /// Strict parse of a wire tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.as_str() == tag)
    }

    /// Lenient parse: unknown tags fall back to [`Quality::Hd`].
    ///
    /// # Examples
    ///
    /// ```
    /// use shark_core::quality::Quality;
    /// assert_eq!(Quality::parse("audio"), Quality::Audio);
    /// assert_eq!(Quality::parse("4k"), Quality::Hd);
    /// ```
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_default()
    }
}

impl From<String> for Quality {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
