//! Probe report formatters
//!
//! Lists every media record of a probe, as a console table, a standalone
//! sortable HTML page, or JSON.

use super::utils::{escape_html, export_json, format_bytes, humanize_duration, truncate};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::probe::ProbeResult;
use crate::types::media::MediaRecord;

const TITLE_WIDTH: usize = 48;

/// Format a probe result
pub fn format_probe(result: &ProbeResult, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Console => Ok(format_console(result)),
        OutputFormat::Html => Ok(format_html(result)),
        OutputFormat::Json => export_json(result),
    }
}

fn heading(result: &ProbeResult) -> String {
    match &result.server {
        Some(server) => format!("Probe: {} @ {}", result.library, server),
        None => format!("Probe: {}", result.library),
    }
}

fn format_console(result: &ProbeResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("=== {} ===\n\n", heading(result).to_uppercase()));

    output.push_str(&format!(
        "{:<48} | {:>4} | {:>9} | {:>7} | {:>11} | {:<6} | {:<10} | {:<6} | {:>8} |\n",
        "Title", "Year", "Size", "Quality", "Bitrate", "Video", "Frame Rate", "Audio", "Channels"
    ));
    output.push_str(&format!("{}\n", "-".repeat(140)));

    for record in &result.records {
        output.push_str(&format!(
            "{:<48} | {:>4} | {:>9} | {:>7} | {:>11} | {:<6} | {:<10} | {:<6} | {:>8} |\n",
            truncate(&record.title, TITLE_WIDTH),
            record.year,
            format_bytes(record.size),
            record.quality,
            format!("{}ps", format_bytes(record.bitrate)),
            record.video_codec,
            record.frame_rate,
            record.audio_codec,
            record.audio_channels,
        ));
    }

    output.push_str(&format!("\nTotal records: {}\n", result.len()));
    output
}

fn format_html(result: &ProbeResult) -> String {
    let title = escape_html(&heading(result));
    let mut output = String::new();

    output.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    output.push_str(&format!("<title>{}</title>\n", title));
    output.push_str(HTML_STYLE);
    output.push_str("</head>\n<body>\n");
    output.push_str(&format!("<h1>{}</h1>\n", title));
    output.push_str("<table class=\"sortable\">\n<thead>\n<tr>");
    for column in [
        "Title",
        "Year",
        "Duration",
        "Rating",
        "Size",
        "Quality",
        "Bitrate",
        "Video",
        "Frame Rate",
        "Audio",
        "Channels",
    ] {
        output.push_str(&format!("<th>{}</th>", column));
    }
    output.push_str("</tr>\n</thead>\n<tbody>\n");

    for record in &result.records {
        output.push_str(&html_row(record));
    }

    output.push_str("</tbody>\n</table>\n");
    output.push_str(HTML_SORT_SCRIPT);
    output.push_str("</body>\n</html>\n");
    output
}

fn html_row(record: &MediaRecord) -> String {
    let cell = |text: &str| format!("<td>{}</td>", escape_html(text));
    let sorted = |key: &str, text: &str| {
        format!(
            "<td data-sort=\"{}\">{}</td>",
            escape_html(key),
            escape_html(text)
        )
    };

    let mut row = String::from("<tr>");
    row.push_str(&sorted(&record.sort_title(), &record.title));
    row.push_str(&cell(&record.year.to_string()));
    row.push_str(&sorted(
        &record.duration_nanos().to_string(),
        &humanize_duration(record.duration),
    ));
    row.push_str(&cell(&record.rating.to_string()));
    row.push_str(&sorted(&record.size.to_string(), &format_bytes(record.size)));
    row.push_str(&cell(&record.quality));
    row.push_str(&sorted(
        &record.bitrate.to_string(),
        &format!("{}ps", format_bytes(record.bitrate)),
    ));
    row.push_str(&cell(&record.video_codec));
    row.push_str(&cell(&record.frame_rate));
    row.push_str(&cell(&record.audio_codec));
    row.push_str(&cell(&record.audio_channels.to_string()));
    row.push_str("</tr>\n");
    row
}

const HTML_STYLE: &str = r#"<style>
body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ccc; padding: 4px 8px; text-align: left; }
th { background: #333; color: #fff; cursor: pointer; }
tr:nth-child(even) { background: #f4f4f4; }
</style>
"#;

const HTML_SORT_SCRIPT: &str = r#"<script>
document.querySelectorAll("table.sortable th").forEach(function (th, column) {
  var ascending = true;
  th.addEventListener("click", function () {
    var body = th.closest("table").tBodies[0];
    var key = function (row) {
      var cell = row.cells[column];
      return cell.dataset.sort !== undefined ? cell.dataset.sort : cell.textContent;
    };
    var rows = Array.prototype.slice.call(body.rows);
    rows.sort(function (a, b) {
      var x = key(a), y = key(b);
      var nx = Number(x), ny = Number(y);
      var order = (!isNaN(nx) && !isNaN(ny)) ? nx - ny : x.localeCompare(y);
      return ascending ? order : -order;
    });
    ascending = !ascending;
    rows.forEach(function (row) { body.appendChild(row); });
  });
});
</script>
"#;
