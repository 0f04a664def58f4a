use super::Extractor;
use crate::error::ExtractionError;
use crate::models::Extraction;
use crate::quality::Quality;
use async_trait::async_trait;

/// Adapter that always succeeds with no media and a fixed note.
#[derive(Debug, Clone, Copy)]
pub struct StubExtractor {
    note: &'static str,
}

impl StubExtractor {
    /// Twitter / X placeholder.
    #[must_use]
    pub const fn twitter() -> Self {
        Self {
            note: "twitter_api_required",
        }
    }

    /// TikTok placeholder.
    #[must_use]
    pub const fn tiktok() -> Self {
        Self {
            note: "tiktok_api_required",
        }
    }
}

#[async_trait]
impl Extractor for StubExtractor {
    async fn extract(&self, _url: &str, _quality: Quality) -> Result<Extraction, ExtractionError> {
        Ok(Extraction {
            note: Some(self.note.to_string()),
            ..Extraction::default()
        })
    }
}
