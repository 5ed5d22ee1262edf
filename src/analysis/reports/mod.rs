//! Report formatting and output generation
//!
//! Provides formatting for probe and statistics results via the
//! [`ReportFormatter`] facade. Supports Console, HTML and JSON output formats.

pub mod probe;
pub mod statistics;
pub mod utils;

use crate::errors::{AppError, AppResult};
use crate::probe::ProbeResult;
use crate::types::statistics::StatisticsSummary;
use std::fmt;
use std::str::FromStr;

/// Output format options for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" | "console" | "text" => Ok(OutputFormat::Console),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::Config(format!(
                "unknown output format '{}' (expected ascii, html or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Console => "ascii",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format_probe(result: &ProbeResult, f: &OutputFormat) -> AppResult<String> {
        probe::format_probe(result, f)
    }

    pub fn format_statistics(
        result: &ProbeResult,
        summary: &StatisticsSummary,
        f: &OutputFormat,
    ) -> AppResult<String> {
        statistics::format_statistics(result, summary, f)
    }
}
