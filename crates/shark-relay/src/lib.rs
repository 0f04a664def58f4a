#![deny(missing_docs)]
//! SHARK relay service.
//!
//! Thin HTTP surface over [`shark_core::relay::Relay`].

/// Relay process settings.
pub mod config;
/// HTTP routes and handlers.
pub mod routes;
/// Relay wiring and the listener loop.
pub mod server;
