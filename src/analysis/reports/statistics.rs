//! Statistics report formatters

use super::utils::{escape_html, export_json, format_bytes, format_number, humanize_duration};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::probe::ProbeResult;
use crate::types::statistics::StatisticsSummary;
use serde::Serialize;
use std::collections::BTreeMap;

/// One rendered row of the numeric table
struct NumericRow {
    label: &'static str,
    minimum: String,
    mean: String,
    median: String,
    maximum: String,
    total: String,
}

#[derive(Serialize)]
struct StatisticsDocument<'a> {
    library: &'a str,
    server: Option<&'a str>,
    #[serde(flatten)]
    summary: &'a StatisticsSummary,
}

/// Format statistics derived from a probe
pub fn format_statistics(
    result: &ProbeResult,
    summary: &StatisticsSummary,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Console => Ok(format_console(result, summary)),
        OutputFormat::Html => Ok(format_html(result, summary)),
        OutputFormat::Json => export_json(&StatisticsDocument {
            library: &result.library,
            server: result.server.as_deref(),
            summary,
        }),
    }
}

fn numeric_rows(summary: &StatisticsSummary) -> Vec<NumericRow> {
    let na = || "n/a".to_string();
    let rate = |bits: u64| format!("{}ps", format_bytes(bits));

    vec![
        NumericRow {
            label: "Bitrate",
            minimum: rate(summary.bitrate.minimum),
            mean: rate(summary.bitrate.mean),
            median: rate(summary.bitrate.median),
            maximum: rate(summary.bitrate.maximum),
            total: na(),
        },
        NumericRow {
            label: "Duration",
            minimum: humanize_duration(summary.duration.minimum),
            mean: humanize_duration(summary.duration.mean),
            median: humanize_duration(summary.duration.median),
            maximum: humanize_duration(summary.duration.maximum),
            total: humanize_duration(summary.duration.total),
        },
        NumericRow {
            label: "Rating",
            minimum: format!("{:.2}", summary.rating.minimum),
            mean: format!("{:.2}", summary.rating.mean),
            median: format!("{:.2}", summary.rating.median),
            maximum: format!("{:.2}", summary.rating.maximum),
            total: na(),
        },
        NumericRow {
            label: "Size",
            minimum: format_bytes(summary.size.minimum),
            mean: format_bytes(summary.size.mean),
            median: format_bytes(summary.size.median),
            maximum: format_bytes(summary.size.maximum),
            total: format_bytes(summary.size.total),
        },
        NumericRow {
            label: "Year",
            minimum: summary.year.minimum.to_string(),
            mean: summary.year.mean.to_string(),
            median: summary.year.median.to_string(),
            maximum: summary.year.maximum.to_string(),
            total: na(),
        },
    ]
}

/// Categorical dimensions as (heading, value -> count) pairs
fn categorical_tables(summary: &StatisticsSummary) -> Vec<(&'static str, BTreeMap<String, usize>)> {
    let channels = summary
        .audio_channels
        .iter()
        .map(|(channels, count)| (channels.to_string(), *count))
        .collect();

    vec![
        ("Audio Channels", channels),
        ("Audio Codec", summary.audio_codec.clone()),
        ("Video Codec", summary.video_codec.clone()),
        ("Quality", summary.quality.clone()),
    ]
}

fn display_value(value: &str) -> &str {
    if value.is_empty() {
        "(unknown)"
    } else {
        value
    }
}

fn format_console(result: &ProbeResult, summary: &StatisticsSummary) -> String {
    let mut output = String::new();

    let heading = match &result.server {
        Some(server) => format!("STATISTICS: {} @ {}", result.library, server),
        None => format!("STATISTICS: {}", result.library),
    };
    output.push_str(&format!("=== {} ===\n\n", heading.to_uppercase()));
    output.push_str(&format!(
        "Records analysed: {}\n\n",
        format_number(summary.total)
    ));

    if summary.is_empty() {
        output.push_str("No media records found.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<10} | {:>13} | {:>13} | {:>13} | {:>13} | {:>13} |\n",
        "Type", "Min", "Mean", "Median", "Max", "Total"
    ));
    output.push_str(&format!("{}\n", "-".repeat(94)));
    for row in numeric_rows(summary) {
        output.push_str(&format!(
            "{:<10} | {:>13} | {:>13} | {:>13} | {:>13} | {:>13} |\n",
            row.label, row.minimum, row.mean, row.median, row.maximum, row.total
        ));
    }

    for (title, counts) in categorical_tables(summary) {
        output.push_str(&format!("\n=== {} ===\n", title.to_uppercase()));
        output.push_str(&format!("{:<20} {:>10} {:>10}\n", title, "Count", "%"));
        output.push_str(&format!("{}\n", "-".repeat(42)));
        for (value, count) in &counts {
            output.push_str(&format!(
                "{:<20} {:>10} {:>9.2}%\n",
                display_value(value),
                format_number(*count),
                summary.percentage(*count)
            ));
        }
    }

    output
}

fn format_html(result: &ProbeResult, summary: &StatisticsSummary) -> String {
    let title = match &result.server {
        Some(server) => format!("Statistics: {} @ {}", result.library, server),
        None => format!("Statistics: {}", result.library),
    };
    let title = escape_html(&title);

    let mut output = String::new();
    output.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    output.push_str(&format!("<title>{}</title>\n</head>\n<body>\n", title));
    output.push_str(&format!("<h1>{}</h1>\n", title));
    output.push_str(&format!(
        "<p>Records analysed: {}</p>\n",
        format_number(summary.total)
    ));

    if !summary.is_empty() {
        output.push_str("<table>\n<tr><th>Type</th><th>Min</th><th>Mean</th><th>Median</th><th>Max</th><th>Total</th></tr>\n");
        for row in numeric_rows(summary) {
            output.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                row.label, row.minimum, row.mean, row.median, row.maximum, row.total
            ));
        }
        output.push_str("</table>\n");

        for (heading, counts) in categorical_tables(summary) {
            output.push_str(&format!("<h2>{}</h2>\n<table>\n", heading));
            output.push_str("<tr><th>Value</th><th>Count</th><th>%</th></tr>\n");
            for (value, count) in &counts {
                output.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{:.2}%</td></tr>\n",
                    escape_html(display_value(value)),
                    count,
                    summary.percentage(*count)
                ));
            }
            output.push_str("</table>\n");
        }
    }

    output.push_str("</body>\n</html>\n");
    output
}
