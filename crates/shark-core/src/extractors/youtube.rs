use super::Extractor;
use crate::error::ExtractionError;
use crate::models::{Extraction, FormatInfo, MediaItem};
use crate::quality::Quality;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Containers reported back to callers
pub const ALLOWED_EXTENSIONS: &[&str] = &["mp4", "webm", "m4a"];

/// Maximum number of formats reported back to callers
pub const MAX_FORMATS: usize = 3;

/// Format-selection policy derived from the requested quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatPolicy {
    /// Best audio-only stream, m4a preferred
    AudioOnly,
    /// Best video-only stream in mp4
    VideoOnly,
    /// Best combined stream, preferred containers first
    Combined,
}

impl FormatPolicy {
    /// Policy for a requested quality. Anything but `audio`/`video` is combined.
    #[must_use]
    pub const fn for_quality(quality: Quality) -> Self {
        match quality {
            Quality::Audio => Self::AudioOnly,
            Quality::Video => Self::VideoOnly,
            Quality::Hd | Quality::Image => Self::Combined,
        }
    }

    /// yt-dlp `-f` selector string.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::AudioOnly => "bestaudio[ext=m4a]/bestaudio",
            Self::VideoOnly => "bestvideo[ext=mp4]",
            Self::Combined => "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best",
        }
    }
}

/// One entry of yt-dlp's `formats` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawFormat {
    /// Format identifier
    pub format_id: String,
    /// Container extension
    #[serde(default)]
    pub ext: String,
    /// Resolution label such as `1920x1080` or `audio only`
    pub resolution: Option<String>,
}

/// The subset of yt-dlp's info JSON the adapter uses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoInfo {
    /// Video title
    #[serde(default)]
    pub title: String,
    /// Duration in seconds
    pub duration: Option<f64>,
    /// Direct URL of the selected format, when a single one was selected
    pub url: Option<String>,
    /// Resolution of the selected format
    pub resolution: Option<String>,
    /// All formats the site offers
    #[serde(default)]
    pub formats: Vec<RawFormat>,
}

/// Source of video metadata (metadata-only, nothing is downloaded).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoInfoFetcher: Send + Sync {
    /// Fetch metadata for `url` with `policy` applied to format selection.
    async fn fetch_info(&self, url: &str, policy: FormatPolicy) -> Result<VideoInfo, ExtractionError>;
}

/// Reduces the format list to the first [`MAX_FORMATS`] allowed containers.
#[must_use]
pub fn select_formats(formats: &[RawFormat]) -> Vec<FormatInfo> {
    formats
        .iter()
        .filter(|f| ALLOWED_EXTENSIONS.contains(&f.ext.as_str()))
        .take(MAX_FORMATS)
        .map(|f| FormatInfo {
            format_id: f.format_id.clone(),
            ext: f.ext.clone(),
            quality: f.resolution.clone().unwrap_or_else(|| "N/A".to_string()),
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_seconds(duration: f64) -> u64 {
    duration.max(0.0).round() as u64
}

/// Maps yt-dlp metadata to the common result shape.
#[must_use]
pub fn normalize_info(info: VideoInfo, policy: FormatPolicy) -> Extraction {
    let formats = select_formats(&info.formats);
    let media = match (&info.url, policy) {
        (Some(url), FormatPolicy::VideoOnly | FormatPolicy::Combined) => {
            vec![MediaItem::video(url.clone(), info.resolution.clone())]
        }
        _ => Vec::new(),
    };

    Extraction {
        media,
        title: Some(info.title),
        duration: info.duration.map(whole_seconds),
        formats,
        download_url: info.url,
        ..Extraction::default()
    }
}

/// YouTube adapter.
pub struct YoutubeExtractor<F> {
    fetcher: F,
}

impl<F: VideoInfoFetcher> YoutubeExtractor<F> {
    /// Wraps a metadata fetcher.
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl<F: VideoInfoFetcher> Extractor for YoutubeExtractor<F> {
    async fn extract(&self, url: &str, quality: Quality) -> Result<Extraction, ExtractionError> {
        let policy = FormatPolicy::for_quality(quality);
        debug!(url = %url, format = policy.selector(), "Fetching YouTube metadata");
        let info = self.fetcher.fetch_info(url, policy).await?;
        Ok(normalize_info(info, policy))
    }
}

/// Runs the `yt-dlp` executable in metadata-only mode.
pub struct YtDlpFetcher {
    binary: String,
    timeout: Duration,
}

impl YtDlpFetcher {
    /// Uses `binary` (path or name on `PATH`), killing it after `timeout`.
    #[must_use]
    pub fn new(binary: impl Into<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    fn command(&self, url: &str, policy: FormatPolicy) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args([
            "--dump-single-json",
            "--no-download",
            "--no-warnings",
            "--no-playlist",
            "-f",
            policy.selector(),
            "--",
            url,
        ])
        .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl VideoInfoFetcher for YtDlpFetcher {
    async fn fetch_info(&self, url: &str, policy: FormatPolicy) -> Result<VideoInfo, ExtractionError> {
        let output = tokio::time::timeout(self.timeout, self.command(url, policy).output())
            .await
            .map_err(|_| {
                ExtractionError::Failure(format!(
                    "yt-dlp timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| ExtractionError::Failure(format!("Failed to run yt-dlp: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let error_msg = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            warn!(error = %error_msg, "yt-dlp exited with an error");
            return Err(ExtractionError::Failure(error_msg));
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|e| ExtractionError::Failure(format!("Invalid yt-dlp output: {e}")))
    }
}
