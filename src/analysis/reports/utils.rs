//! Utility functions for report formatting
//!
//! Shared helpers used by the probe and statistics formatters.

use crate::errors::AppResult;
use chrono::Utc;
use serde::Serialize;
use std::time::Duration;

/// Format number with thousand separators for console output
///
/// # Examples
///
/// ```
/// # use plex_tools::analysis::reports::utils::format_number;
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(904233), "904,233");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format a quantity using SI prefixes (`1 kB = 1000 B`)
///
/// Sizes and bitrates share this; callers append `ps` for rates.
///
/// ```
/// # use plex_tools::analysis::reports::utils::format_bytes;
/// assert_eq!(format_bytes(5_000_000), "5.0 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["kB", "MB", "GB", "TB", "PB", "EB"];

    if bytes < 1000 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1000.0;
    let mut unit = 0;
    // step up whenever one decimal would round to 1000
    while (value * 10.0).round() >= 10_000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    format!("{:.1} {}", value, UNITS[unit])
}

/// Format a duration as `HHh MMm SSs`, rounded to the nearest second
pub fn humanize_duration(duration: Duration) -> String {
    let mut seconds = duration.as_secs();
    if duration.subsec_millis() >= 500 {
        seconds += 1;
    }

    format!(
        "{:02}h {:02}m {:02}s",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Truncate `text` to `width` characters, marking the cut with `~`
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('~');
    cut
}

#[derive(Serialize)]
struct Generated<'a, T: Serialize> {
    generated_at: String,
    #[serde(flatten)]
    data: &'a T,
}

/// Export data as JSON for programmatic use, stamped with the generation time
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    let document = Generated {
        generated_at: Utc::now().to_rfc3339(),
        data,
    };
    serde_json::to_string_pretty(&document).map_err(|e| {
        crate::errors::AppError::InvalidData(format!("JSON export failed: {}", e))
    })
}
