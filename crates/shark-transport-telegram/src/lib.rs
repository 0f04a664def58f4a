#![deny(missing_docs)]
//! Telegram front end for SHARK.

/// Telegram-specific bot implementation.
pub mod bot;
/// Telegram transport configuration.
pub mod config;
/// HTTP client for the relay service.
pub mod relay_client;
/// Telegram runtime entrypoint.
pub mod runner;
