//! Wire data model for the relay.
//!
//! Everything here is request-scoped: built per call, dropped once the
//! response is sent.

use crate::error::DownloadError;
use crate::platform::Platform;
use crate::quality::Quality;
use serde::{Deserialize, Serialize};

/// Body of `POST /download`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// Media page URL
    pub url: String,
    /// Requested variant, `hd` when omitted
    #[serde(default)]
    pub quality: Quality,
    /// Explicit platform tag; classified from the URL when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

impl DownloadRequest {
    /// Builds a request with an explicit platform tag.
    #[must_use]
    pub fn new(url: impl Into<String>, quality: Quality, platform: Option<Platform>) -> Self {
        Self {
            url: url.into(),
            quality,
            platform: platform.map(|p| p.as_str().to_string()),
        }
    }
}

/// Kind of a media attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Playable video
    Video,
    /// Still image
    Image,
}

/// A single downloadable media item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Attachment kind
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Direct media URL
    pub url: String,
    /// Human-readable quality label, e.g. `1080x1920`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

impl MediaItem {
    /// Video item with an optional quality label.
    #[must_use]
    pub fn video(url: impl Into<String>, quality: Option<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            url: url.into(),
            quality,
        }
    }

    /// Image item.
    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            url: url.into(),
            quality: None,
        }
    }
}

/// Reduced description of an available stream format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Extractor format identifier
    pub format_id: String,
    /// Container extension
    pub ext: String,
    /// Resolution label or `N/A`
    pub quality: String,
}

/// Normalized success payload of an adapter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Media items in source order
    pub media: Vec<MediaItem>,
    /// Video title
    pub title: Option<String>,
    /// Post caption
    pub caption: Option<String>,
    /// Like count
    pub likes: Option<u64>,
    /// Duration in seconds
    pub duration: Option<u64>,
    /// Available formats
    pub formats: Vec<FormatInfo>,
    /// Single downloadable file URL
    pub download_url: Option<String>,
    /// Informational note (placeholder adapters)
    pub note: Option<String>,
}

/// Outcome tag of a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Adapter produced a result
    Success,
    /// Request was rejected or the adapter failed
    Error,
}

/// Response envelope of `POST /download`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadResult {
    /// Outcome
    pub status: Status,
    /// Platform that handled the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Media items, possibly empty
    #[serde(default)]
    pub media: Vec<MediaItem>,
    /// Video title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Post caption (at most 200 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Like count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    /// Duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    /// Up to three available formats
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formats: Vec<FormatInfo>,
    /// Single downloadable file URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    /// Informational note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Failure reason, present iff `status` is `error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DownloadResult {
    /// Successful result for `platform`.
    #[must_use]
    pub fn success(platform: Platform, extraction: Extraction) -> Self {
        Self {
            status: Status::Success,
            platform: Some(platform),
            media: extraction.media,
            title: extraction.title,
            caption: extraction.caption,
            likes: extraction.likes,
            duration: extraction.duration,
            formats: extraction.formats,
            download_url: extraction.download_url,
            note: extraction.note,
            reason: None,
        }
    }

    /// Error result carrying `reason`.
    #[must_use]
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            platform: None,
            media: Vec::new(),
            title: None,
            caption: None,
            likes: None,
            duration: None,
            formats: Vec::new(),
            download_url: None,
            note: None,
            reason: Some(reason.into()),
        }
    }

    /// Whether the download succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

impl From<DownloadError> for DownloadResult {
    fn from(err: DownloadError) -> Self {
        Self::failure(err.reason())
    }
}

/// Body of `GET /stats`. Never incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayStats {
    /// Requests seen
    pub total: u64,
    /// Successful requests
    pub success: u64,
    /// Failed requests
    pub failed: u64,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `ok`
    pub status: String,
}

impl HealthStatus {
    /// The static healthy payload.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
