//! Conversion of playable catalog items into media records

use crate::types::catalog::{CatalogItem, EpisodeInfo};
use crate::types::media::MediaRecord;
use std::time::Duration;

/// Multiplier from the server's kilo-based bitrate to internal units
pub const KILO: u64 = 1000;

/// Derive a display quality label from a reported resolution
///
/// Numeric resolutions gain a "p" suffix; named tiers are uppercased.
///
/// # Examples
/// ```
/// use plex_tools::probe::normalise::quality_label;
/// assert_eq!(quality_label("1080"), "1080p");
/// assert_eq!(quality_label("4k"), "4K");
/// assert_eq!(quality_label("sd"), "SD");
/// ```
pub fn quality_label(resolution: &str) -> String {
    let quality = resolution.to_uppercase();

    if resolution.parse::<i64>().is_ok() {
        format!("{}p", quality)
    } else {
        quality
    }
}

/// Compose the display title of an episode
///
/// # Examples
/// ```
/// use plex_tools::probe::normalise::episode_title;
/// assert_eq!(episode_title("Show", 1, 3, "Pilot"), "Show (S01E03): Pilot");
/// ```
pub fn episode_title(show_title: &str, season: u32, episode: u32, title: &str) -> String {
    format!("{} (S{:02}E{:02}): {}", show_title, season, episode, title)
}

fn display_title(item: &CatalogItem) -> String {
    match &item.episode {
        Some(EpisodeInfo {
            show_title,
            season_index,
            episode_index,
        }) => episode_title(show_title, *season_index, *episode_index, &item.title),
        None => item.title.clone(),
    }
}

/// Flatten an item into one record per encoded part
pub fn records_from_item(item: &CatalogItem) -> Vec<MediaRecord> {
    let title = display_title(item);

    item.media
        .iter()
        .flat_map(|variant| {
            let quality = quality_label(&variant.video_resolution);
            let title = &title;

            variant.parts.iter().map(move |part| MediaRecord {
                title: title.clone(),
                year: item.year,
                rating: item.rating,
                duration: Duration::from_millis(part.duration_ms),
                size: part.size,
                bitrate: variant.bitrate_kb.saturating_mul(KILO),
                video_codec: variant.video_codec.clone(),
                audio_codec: variant.audio_codec.clone(),
                audio_channels: variant.audio_channels,
                frame_rate: variant.video_frame_rate.clone(),
                quality: quality.clone(),
            })
        })
        .collect()
}
