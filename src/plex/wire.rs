//! Plex JSON response shapes
//!
//! Only the fields the probe reads are modelled; everything is defaulted so
//! sparse listings (no `Metadata`, missing indices) still deserialise.

use crate::types::catalog::{CatalogItem, CatalogNode, EpisodeInfo, MediaPart, MediaVariant};
use serde::{Deserialize, Serialize};

/// A device linked to the plex.tv account (`/api/v2/resources`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Server {
    pub name: String,
    pub product: String,
    /// Comma separated roles, e.g. "server" or "client,player"
    pub provides: String,
    pub access_token: Option<String>,
    pub connections: Vec<Connection>,
}

impl Server {
    pub fn is_media_server(&self) -> bool {
        self.provides.split(',').any(|role| role.trim() == "server")
    }

    /// First connection reachable from outside the server's network, falling
    /// back to the first listed connection
    pub fn preferred_connection(&self) -> Option<&Connection> {
        self.connections
            .iter()
            .find(|c| !c.local)
            .or_else(|| self.connections.first())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Connection {
    pub uri: String,
    pub local: bool,
}

/// Envelope of every Plex Media Server response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "MediaContainer")]
    pub media_container: T,
}

/// `/library/sections`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SectionContainer {
    #[serde(rename = "Directory")]
    pub directory: Vec<Library>,
}

/// A library section on a server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Library {
    pub key: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// `/library/sections/{key}/all` and `/library/metadata/{key}/children`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataContainer {
    pub library_section_title: String,
    pub title1: String,
    #[serde(rename = "Metadata")]
    pub metadata: Vec<Metadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub rating_key: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub grandparent_title: String,
    pub parent_index: u32,
    pub index: u32,
    pub year: i32,
    pub rating: f64,
    #[serde(rename = "Media")]
    pub media: Vec<Media>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Media {
    pub video_resolution: String,
    pub bitrate: u64,
    pub audio_channels: u32,
    pub audio_codec: String,
    pub video_codec: String,
    pub video_frame_rate: String,
    #[serde(rename = "Part")]
    pub part: Vec<Part>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Part {
    pub duration: u64,
    pub size: u64,
}

impl From<Media> for MediaVariant {
    fn from(media: Media) -> Self {
        MediaVariant {
            video_resolution: media.video_resolution,
            bitrate_kb: media.bitrate,
            video_codec: media.video_codec,
            audio_codec: media.audio_codec,
            audio_channels: media.audio_channels,
            video_frame_rate: media.video_frame_rate,
            parts: media
                .part
                .into_iter()
                .map(|p| MediaPart {
                    duration_ms: p.duration,
                    size: p.size,
                })
                .collect(),
        }
    }
}

impl From<Metadata> for CatalogNode {
    fn from(m: Metadata) -> Self {
        match m.kind.as_str() {
            "movie" | "episode" => {
                let episode = (m.kind == "episode").then(|| EpisodeInfo {
                    show_title: m.grandparent_title,
                    season_index: m.parent_index,
                    episode_index: m.index,
                });
                let item = CatalogItem {
                    key: m.rating_key,
                    title: m.title,
                    year: m.year,
                    rating: m.rating,
                    episode,
                    media: m.media.into_iter().map(MediaVariant::from).collect(),
                };

                if item.episode.is_some() {
                    CatalogNode::Episode(item)
                } else {
                    CatalogNode::Movie(item)
                }
            }
            "season" => CatalogNode::Season {
                key: m.rating_key,
                title: m.title,
            },
            "show" => CatalogNode::Show {
                key: m.rating_key,
                title: m.title,
            },
            other => CatalogNode::Unsupported {
                kind: other.to_string(),
                key: m.rating_key,
                title: m.title,
            },
        }
    }
}

impl MetadataContainer {
    /// Section title, whichever field the endpoint filled in
    pub fn title(&self) -> &str {
        if self.library_section_title.is_empty() {
            &self.title1
        } else {
            &self.library_section_title
        }
    }

    pub fn into_nodes(self) -> Vec<CatalogNode> {
        self.metadata.into_iter().map(CatalogNode::from).collect()
    }
}
