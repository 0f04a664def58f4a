//! Error taxonomy shared by the relay and its adapters.

use thiserror::Error;

/// Failure raised by a single extractor adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The URL does not have a shape the adapter can extract from
    #[error("Invalid URL")]
    InvalidUrl,
    /// The external collaborator failed; message passed through verbatim
    #[error("{0}")]
    Failure(String),
}

impl ExtractionError {
    /// Wraps any displayable error as a [`ExtractionError::Failure`].
    pub fn failure(err: impl std::fmt::Display) -> Self {
        Self::Failure(err.to_string())
    }
}

/// Failure of a whole download request as seen by the relay.
///
/// The `Display` text of each variant is the `reason` placed on the wire.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DownloadError {
    /// Empty URL in the request
    #[error("invalid_url")]
    InvalidUrl,
    /// No platform given and the classifier found none
    #[error("platform_unknown")]
    PlatformUnknown,
    /// Platform tag given but not one the relay dispatches
    #[error("unsupported_platform")]
    UnsupportedPlatform,
    /// The adapter failed
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl DownloadError {
    /// Wire `reason` for this error.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasons() {
        assert_eq!(DownloadError::PlatformUnknown.reason(), "platform_unknown");
        assert_eq!(
            DownloadError::UnsupportedPlatform.reason(),
            "unsupported_platform"
        );
        assert_eq!(
            DownloadError::from(ExtractionError::InvalidUrl).reason(),
            "Invalid URL"
        );
        assert_eq!(
            DownloadError::from(ExtractionError::Failure("Private video".into())).reason(),
            "Private video"
        );
    }
}
