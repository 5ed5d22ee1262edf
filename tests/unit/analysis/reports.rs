use anyhow::Result;
use plex_tools::analysis::{OutputFormat, ReportFormatter, StatisticsAnalyser};
use plex_tools::probe::ProbeResult;

use crate::common::fixtures::mixed_records;

fn probe_result() -> ProbeResult {
    let mut records = mixed_records();
    records[0].title = "Alien <Director's Cut>".to_string();

    ProbeResult {
        library: "Movies".to_string(),
        server: Some("Basement".to_string()),
        records,
    }
}

#[test]
fn test_probe_console_has_header_and_every_record() -> Result<()> {
    let result = probe_result();
    let output = ReportFormatter::format_probe(&result, &OutputFormat::Console)?;

    let header = output
        .lines()
        .find(|l| l.starts_with("Title"))
        .expect("header row");
    for column in [
        "Year", "Size", "Quality", "Bitrate", "Video", "Frame Rate", "Audio", "Channels",
    ] {
        assert!(header.contains(column), "missing column {}", column);
    }

    for title in ["Heat", "Up", "Drive", "Brick"] {
        assert!(output.contains(title));
    }
    assert!(output.contains("Total records: 5"));

    Ok(())
}

#[test]
fn test_probe_html_is_escaped_and_sortable() -> Result<()> {
    let output = ReportFormatter::format_probe(&probe_result(), &OutputFormat::Html)?;

    assert!(output.starts_with("<!DOCTYPE html>"));
    assert!(output.contains("Alien &lt;Director&#39;s Cut&gt;"));
    assert!(!output.contains("<Director's Cut>"));
    // sort keys: bytes for size, bits per second for bitrate
    assert!(output.contains("data-sort=\"4000000000\""));
    assert!(output.contains("data-sort=\"8000000\""));
    assert_eq!(output.matches("<tr>").count(), 6);

    Ok(())
}

#[test]
fn test_statistics_json_round_trips_counts() -> Result<()> {
    let result = probe_result();
    let summary = StatisticsAnalyser::analyse_probe(&result);
    let output = ReportFormatter::format_statistics(&result, &summary, &OutputFormat::Json)?;

    let value: serde_json::Value = serde_json::from_str(&output)?;
    assert_eq!(value["server"], "Basement");
    assert_eq!(value["total"], 5);
    assert_eq!(value["quality"]["1080p"], 3);
    assert_eq!(value["year"]["median"], 2007);

    Ok(())
}

#[test]
fn test_statistics_console_totals_only_for_summable_dimensions() -> Result<()> {
    let result = probe_result();
    let summary = StatisticsAnalyser::analyse_probe(&result);
    let output = ReportFormatter::format_statistics(&result, &summary, &OutputFormat::Console)?;

    let row = |label: &str| {
        output
            .lines()
            .find(|l| l.starts_with(label))
            .unwrap_or_default()
            .to_string()
    };

    assert!(row("Bitrate").contains("n/a"));
    assert!(row("Rating").contains("n/a"));
    assert!(row("Year").contains("n/a"));
    assert!(row("Size").contains("21.7 GB"));
    assert!(row("Duration").contains("09h 53m 00s"));
    assert!(output.contains("=== VIDEO CODEC ==="));

    Ok(())
}
