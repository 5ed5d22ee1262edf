//! Catalog node types
//!
//! A library listing is a tree: libraries contain movies or shows, shows contain
//! seasons and seasons contain episodes. The variant set is closed; anything the
//! walker does not know how to descend into lands in [`CatalogNode::Unsupported`].

use serde::{Deserialize, Serialize};

/// One entry in a library or container listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogNode {
    Movie(CatalogItem),
    Episode(CatalogItem),
    Season { key: String, title: String },
    Show { key: String, title: String },
    Unsupported {
        kind: String,
        key: String,
        title: String,
    },
}

impl CatalogNode {
    /// Wire-level kind label of this node
    pub fn kind(&self) -> &str {
        match self {
            CatalogNode::Movie(_) => "movie",
            CatalogNode::Episode(_) => "episode",
            CatalogNode::Season { .. } => "season",
            CatalogNode::Show { .. } => "show",
            CatalogNode::Unsupported { kind, .. } => kind,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            CatalogNode::Movie(item) | CatalogNode::Episode(item) => &item.key,
            CatalogNode::Season { key, .. }
            | CatalogNode::Show { key, .. }
            | CatalogNode::Unsupported { key, .. } => key,
        }
    }
}

/// A playable item (movie or episode) with its encoded variants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub key: String,
    pub title: String,
    pub year: i32,
    pub rating: f64,
    /// Present for episodes only
    pub episode: Option<EpisodeInfo>,
    pub media: Vec<MediaVariant>,
}

/// Position of an episode within its show
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeInfo {
    pub show_title: String,
    pub season_index: u32,
    pub episode_index: u32,
}

/// One encoding of an item, as reported by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaVariant {
    pub video_resolution: String,
    /// Kilobit-based rate as reported by the server
    pub bitrate_kb: u64,
    pub video_codec: String,
    pub audio_codec: String,
    pub audio_channels: u32,
    pub video_frame_rate: String,
    pub parts: Vec<MediaPart>,
}

/// A single file backing a media variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPart {
    pub duration_ms: u64,
    pub size: u64,
}

/// Top-level listing of a library section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryContent {
    pub title: String,
    pub nodes: Vec<CatalogNode>,
}
