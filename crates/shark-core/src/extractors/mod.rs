//! Extractor adapters.
//!
//! Each adapter turns a page URL into an [`Extraction`] by calling an
//! external collaborator and normalizing its answer. Collaborators sit
//! behind small traits so the adapters can be exercised without network.

use crate::error::ExtractionError;
use crate::models::Extraction;
use crate::quality::Quality;
use async_trait::async_trait;

/// Instagram adapter and its GraphQL collaborator
pub mod instagram;
/// Placeholder adapters for platforms without an integration
pub mod stub;
/// YouTube adapter and its yt-dlp collaborator
pub mod youtube;

pub use instagram::{GraphqlPostFetcher, InstagramExtractor};
pub use stub::StubExtractor;
pub use youtube::{YoutubeExtractor, YtDlpFetcher};

/// Common adapter contract.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract media metadata for `url` at the requested `quality`.
    async fn extract(&self, url: &str, quality: Quality) -> Result<Extraction, ExtractionError>;
}
