//! Plex Tools - Type System
//!
//! - `catalog`: hierarchical library listing as served (movies, shows, seasons, episodes)
//! - `media`: flat per-part media records produced by a probe
//! - `statistics`: numeric and categorical summaries over media records

pub mod catalog;
pub mod media;
pub mod statistics;
