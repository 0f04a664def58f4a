//! Quality-menu callback payloads: `dl_<platform>_<quality>`.

use shark_core::platform::Platform;
use shark_core::quality::Quality;
use std::fmt;

const PREFIX: &str = "dl";

/// A parsed quality-menu button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallbackAction {
    /// Platform detected when the menu was built
    pub platform: Platform,
    /// Chosen quality
    pub quality: Quality,
}

impl CallbackAction {
    /// Action for one menu button.
    #[must_use]
    pub const fn new(platform: Platform, quality: Quality) -> Self {
        Self { platform, quality }
    }

    /// Parses callback data.
    ///
    /// Returns `None` for fewer than three `_`-separated parts, a prefix
    /// other than `dl`, or a platform/quality tag that does not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use shark_core::platform::Platform;
    /// use shark_core::quality::Quality;
    /// use shark_transport_telegram::bot::callback::CallbackAction;
    ///
    /// let action = CallbackAction::parse("dl_youtube_audio");
    /// assert_eq!(action, Some(CallbackAction::new(Platform::Youtube, Quality::Audio)));
    /// assert_eq!(CallbackAction::parse("dl_youtube"), None);
    /// ```
    #[must_use]
    pub fn parse(data: &str) -> Option<Self> {
        let mut parts = data.split('_');
        let (Some(PREFIX), Some(platform), Some(quality)) = (parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        Some(Self {
            platform: Platform::from_tag(platform)?,
            quality: Quality::from_tag(quality)?,
        })
    }
}

impl fmt::Display for CallbackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}_{}_{}", self.platform, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_button_parses_back() {
        for platform in Platform::ALL {
            for quality in Quality::ALL {
                let action = CallbackAction::new(platform, quality);
                assert_eq!(CallbackAction::parse(&action.to_string()), Some(action));
            }
        }
    }

    #[test]
    fn test_rejects_malformed_data() {
        assert_eq!(CallbackAction::parse(""), None);
        assert_eq!(CallbackAction::parse("dl"), None);
        assert_eq!(CallbackAction::parse("dl_instagram"), None);
        assert_eq!(CallbackAction::parse("get_instagram_hd"), None);
        assert_eq!(CallbackAction::parse("dl_vimeo_hd"), None);
        assert_eq!(CallbackAction::parse("dl_instagram_4k"), None);
    }

    #[test]
    fn test_extra_parts_are_ignored() {
        assert_eq!(
            CallbackAction::parse("dl_tiktok_video_extra"),
            Some(CallbackAction::new(Platform::Tiktok, Quality::Video))
        );
    }

    #[test]
    fn test_fits_telegram_limit() {
        for platform in Platform::ALL {
            for quality in Quality::ALL {
                assert!(CallbackAction::new(platform, quality).to_string().len() <= 64);
            }
        }
    }
}
