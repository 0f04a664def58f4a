//! Relay dispatch.
//!
//! Resolves the platform of a [`DownloadRequest`], hands it to the matching
//! adapter and wraps the outcome in a [`DownloadResult`]. Stateless: every
//! call is independent.

use crate::error::DownloadError;
use crate::extractors::{Extractor, StubExtractor};
use crate::models::{DownloadRequest, DownloadResult, Extraction};
use crate::platform::{classify, Platform};
use std::sync::Arc;
use tracing::{info, warn};

/// Platform-to-adapter wiring.
#[derive(Clone)]
pub struct Relay {
    instagram: Arc<dyn Extractor>,
    youtube: Arc<dyn Extractor>,
    twitter: Arc<dyn Extractor>,
    tiktok: Arc<dyn Extractor>,
}

impl Relay {
    /// Wires the Instagram and YouTube adapters; Twitter and TikTok get
    /// their placeholder adapters.
    #[must_use]
    pub fn new(instagram: Arc<dyn Extractor>, youtube: Arc<dyn Extractor>) -> Self {
        Self {
            instagram,
            youtube,
            twitter: Arc::new(StubExtractor::twitter()),
            tiktok: Arc::new(StubExtractor::tiktok()),
        }
    }

    /// Replaces the adapter used for `platform`.
    #[must_use]
    pub fn with_extractor(mut self, platform: Platform, extractor: Arc<dyn Extractor>) -> Self {
        match platform {
            Platform::Instagram => self.instagram = extractor,
            Platform::Youtube => self.youtube = extractor,
            Platform::Twitter => self.twitter = extractor,
            Platform::Tiktok => self.tiktok = extractor,
        }
        self
    }

    fn extractor(&self, platform: Platform) -> &dyn Extractor {
        match platform {
            Platform::Instagram => self.instagram.as_ref(),
            Platform::Youtube => self.youtube.as_ref(),
            Platform::Twitter => self.twitter.as_ref(),
            Platform::Tiktok => self.tiktok.as_ref(),
        }
    }

    /// Determines which platform handles `request`.
    ///
    /// A non-blank tag always wins over classification, even when it is
    /// unknown. A blank tag counts as absent.
    ///
    /// # Errors
    ///
    /// `UnsupportedPlatform` for an unknown explicit tag, `PlatformUnknown`
    /// when classification finds nothing.
    pub fn resolve_platform(request: &DownloadRequest) -> Result<Platform, DownloadError> {
        let tag = request
            .platform
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty());
        match tag {
            Some(tag) => Platform::from_tag(tag).ok_or(DownloadError::UnsupportedPlatform),
            None => classify(&request.url).ok_or(DownloadError::PlatformUnknown),
        }
    }

    /// Runs the request through its adapter.
    ///
    /// # Errors
    ///
    /// Any [`DownloadError`]; adapter failures arrive as `Extraction`.
    pub async fn try_handle(
        &self,
        request: &DownloadRequest,
    ) -> Result<(Platform, Extraction), DownloadError> {
        let url = request.url.trim();
        if url.is_empty() {
            return Err(DownloadError::InvalidUrl);
        }

        let platform = Self::resolve_platform(request)?;
        info!(platform = %platform, quality = %request.quality, "Dispatching download request");

        let extraction = self.extractor(platform).extract(url, request.quality).await?;
        Ok((platform, extraction))
    }

    /// Runs the request and folds the outcome into the wire envelope.
    pub async fn handle(&self, request: &DownloadRequest) -> DownloadResult {
        match self.try_handle(request).await {
            Ok((platform, extraction)) => DownloadResult::success(platform, extraction),
            Err(e) => {
                warn!(url = %request.url, reason = %e, "Download request failed");
                e.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use crate::extractors::instagram::{InstagramExtractor, MockPostFetcher};
    use crate::extractors::youtube::{FormatPolicy, MockVideoInfoFetcher, YoutubeExtractor};
    use crate::models::Status;
    use crate::quality::Quality;
    use crate::testing::{sample_post, sample_video_info};

    fn relay(posts: MockPostFetcher, videos: MockVideoInfoFetcher) -> Relay {
        Relay::new(
            Arc::new(InstagramExtractor::new(posts)),
            Arc::new(YoutubeExtractor::new(videos)),
        )
    }

    fn idle_relay() -> Relay {
        let mut posts = MockPostFetcher::new();
        posts.expect_fetch_post().never();
        let mut videos = MockVideoInfoFetcher::new();
        videos.expect_fetch_info().never();
        relay(posts, videos)
    }

    #[tokio::test]
    async fn test_unknown_url_is_platform_unknown() {
        let result = idle_relay()
            .handle(&DownloadRequest::new("https://vimeo.com/1", Quality::Hd, None))
            .await;
        assert_eq!(result.status, Status::Error);
        assert_eq!(result.reason.as_deref(), Some("platform_unknown"));
    }

    #[tokio::test]
    async fn test_explicit_unknown_platform_is_unsupported() {
        let request = DownloadRequest {
            url: "https://www.youtube.com/watch?v=1".to_string(),
            quality: Quality::Hd,
            platform: Some("vimeo".to_string()),
        };
        let result = idle_relay().handle(&request).await;
        assert_eq!(result.reason.as_deref(), Some("unsupported_platform"));
    }

    #[tokio::test]
    async fn test_empty_url_is_invalid() {
        let result = idle_relay()
            .handle(&DownloadRequest::new("  ", Quality::Hd, Some(Platform::Youtube)))
            .await;
        assert_eq!(result.reason.as_deref(), Some("invalid_url"));
    }

    #[tokio::test]
    async fn test_blank_platform_tag_falls_back_to_classification() {
        for tag in ["", "  "] {
            let request = DownloadRequest {
                url: "https://x.com/a/status/1".to_string(),
                quality: Quality::Hd,
                platform: Some(tag.to_string()),
            };
            let result = idle_relay().handle(&request).await;
            assert!(result.is_success(), "tag {tag:?}");
            assert_eq!(result.platform, Some(Platform::Twitter));
        }
    }

    #[tokio::test]
    async fn test_explicit_platform_overrides_classification() {
        let result = idle_relay()
            .handle(&DownloadRequest::new(
                "https://www.youtube.com/watch?v=1",
                Quality::Hd,
                Some(Platform::Twitter),
            ))
            .await;
        assert!(result.is_success());
        assert_eq!(result.platform, Some(Platform::Twitter));
        assert_eq!(result.note.as_deref(), Some("twitter_api_required"));
        assert!(result.media.is_empty());
    }

    #[tokio::test]
    async fn test_instagram_returns_all_media() {
        let mut posts = MockPostFetcher::new();
        posts.expect_fetch_post().returning(|_| Ok(sample_post(5)));
        let mut videos = MockVideoInfoFetcher::new();
        videos.expect_fetch_info().never();

        let result = relay(posts, videos)
            .handle(&DownloadRequest::new(
                "https://www.instagram.com/p/Cabc123/",
                Quality::Image,
                None,
            ))
            .await;
        assert!(result.is_success());
        assert_eq!(result.platform, Some(Platform::Instagram));
        assert_eq!(result.media.len(), 5);
        assert_eq!(result.likes, Some(100));
    }

    #[tokio::test]
    async fn test_instagram_bad_shape_reason() {
        let result = idle_relay()
            .handle(&DownloadRequest::new(
                "https://www.instagram.com/explore/",
                Quality::Hd,
                None,
            ))
            .await;
        assert_eq!(result.reason.as_deref(), Some("Invalid URL"));
    }

    #[tokio::test]
    async fn test_youtube_audio_policy_and_failure_reason() {
        let mut posts = MockPostFetcher::new();
        posts.expect_fetch_post().never();
        let mut videos = MockVideoInfoFetcher::new();
        videos
            .expect_fetch_info()
            .withf(|_, policy| *policy == FormatPolicy::AudioOnly)
            .returning(|_, _| Err(ExtractionError::Failure("Video unavailable".into())));

        let result = relay(posts, videos)
            .handle(&DownloadRequest::new(
                "https://youtu.be/abc",
                Quality::Audio,
                None,
            ))
            .await;
        assert_eq!(result.status, Status::Error);
        assert_eq!(result.reason.as_deref(), Some("Video unavailable"));
    }

    #[tokio::test]
    async fn test_youtube_success_metadata() {
        let mut posts = MockPostFetcher::new();
        posts.expect_fetch_post().never();
        let mut videos = MockVideoInfoFetcher::new();
        videos
            .expect_fetch_info()
            .returning(|_, _| Ok(sample_video_info()));

        let result = relay(posts, videos)
            .handle(&DownloadRequest::new(
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                Quality::Hd,
                None,
            ))
            .await;
        assert!(result.is_success());
        assert_eq!(result.platform, Some(Platform::Youtube));
        assert_eq!(result.formats.len(), 3);
        assert_eq!(result.duration, Some(212));
    }
}
