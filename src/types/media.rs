//! Normalised media records produced by a probe

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One encoded part of a playable item
///
/// An item with several parts (or several encoded variants) yields several
/// records sharing title, year and rating but differing in technical fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub duration: Duration,
    pub size: u64,
    pub bitrate: u64,
    pub video_codec: String,
    pub audio_codec: String,
    pub audio_channels: u32,
    /// As reported by the server, e.g. "24p" or "PAL"
    pub frame_rate: String,
    pub quality: String,
}

impl MediaRecord {
    /// Title reduced to a stable key for sorting
    pub fn sort_title(&self) -> String {
        crate::utils::title::sort_title(&self.title)
    }

    pub fn duration_nanos(&self) -> u128 {
        self.duration.as_nanos()
    }
}
