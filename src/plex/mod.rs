//! Plex account and server access

pub mod client;
pub mod retry;
pub mod wire;

pub use client::PlexClient;
pub use retry::{calculate_next_backoff, execute_with_timeout, is_retryable_status};
pub use wire::{Connection, Library, Server};
