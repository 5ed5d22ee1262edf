//! Integration Tests Module
//!
//! End-to-end tests that drive the Plex client against a local HTTP server.

pub mod plex_client;
