//! Plex library probe and statistics
//!

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod plex;
pub mod probe;
pub mod types;
pub mod utils;
