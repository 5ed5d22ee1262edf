//! Statistics over probe results and report rendering

pub mod reports;
pub mod statistics;

pub use reports::{OutputFormat, ReportFormatter};
pub use statistics::StatisticsAnalyser;
