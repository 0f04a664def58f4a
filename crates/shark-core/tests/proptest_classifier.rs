use shark_core::extractors::instagram::extract_shortcode;
use shark_core::platform::{classify, Platform};
use proptest::prelude::*;

proptest! {
    /// Instagram wins whenever its marker is present, whatever else the URL holds.
    #[test]
    fn instagram_marker_always_wins(
        prefix in "[a-z0-9/:?=&]*",
        other in "(youtube\\.com|youtu\\.be|twitter\\.com|x\\.com|tiktok\\.com)?",
        suffix in "[a-z0-9/:?=&]*"
    ) {
        let url = format!("{prefix}{other}/instagram.com{suffix}");
        prop_assert_eq!(classify(&url), Some(Platform::Instagram));
    }

    /// YouTube markers classify as youtube when no instagram marker exists.
    #[test]
    fn youtube_before_twitter_and_tiktok(
        marker in "youtube\\.com|youtu\\.be",
        later in "(twitter\\.com|x\\.com|tiktok\\.com)?",
        path in "[a-zA-Z0-9/?=_-]*"
    ) {
        let url = format!("https://{later}/{marker}/{path}");
        prop_assert_eq!(classify(&url), Some(Platform::Youtube));
    }

    /// Twitter markers beat tiktok.
    #[test]
    fn twitter_before_tiktok(marker in "twitter\\.com|x\\.com", path in "[a-z0-9/]*") {
        let url = format!("https://tiktok.com/{path}?via={marker}");
        prop_assert_eq!(classify(&url), Some(Platform::Twitter));
    }

    /// Without a dot no marker can appear, so nothing classifies.
    #[test]
    fn dotless_strings_are_unclassified(s in "[^.]*") {
        prop_assert_eq!(classify(&s), None);
    }

    /// Classification never panics on arbitrary input.
    #[test]
    fn classify_does_not_crash(s in "\\PC*") {
        let _ = classify(&s);
    }

    /// Any shortcode under a known path segment is recovered intact.
    #[test]
    fn shortcode_round_trips(
        segment in "p|reel|tv",
        code in "[a-zA-Z0-9_-]{1,20}",
        query in "(\\?igsh=[a-z0-9]+)?"
    ) {
        let url = format!("https://www.instagram.com/{segment}/{code}/{query}");
        prop_assert_eq!(extract_shortcode(&url), Some(code.as_str()));
    }
}
