#![deny(missing_docs)]
//! SHARK core library.
//!
//! Platform classification, quality policies, extractor adapters and the
//! relay dispatch shared by the HTTP relay and the chat front end.

/// Layered configuration loading.
pub mod config;
/// Error taxonomy for relay and adapters.
pub mod error;
/// Per-platform extractor adapters.
pub mod extractors;
/// Wire data model (requests, results, media items).
pub mod models;
/// Platform tags and URL classification.
pub mod platform;
/// Quality choices offered to users.
pub mod quality;
/// Request dispatch from a download request to an adapter.
pub mod relay;

#[cfg(test)]
pub mod testing;
