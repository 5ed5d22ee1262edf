//! Summary statistics over a probe's media records
//!
//! Numeric dimensions reduce to a [`NumericSummary`]; categorical dimensions
//! reduce to ordered value -> occurrence maps so rendering order is stable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Arithmetic needed to summarise one numeric dimension
pub trait Measure: Copy + PartialOrd + Default {
    /// Seed for the running maximum
    const LOWEST: Self;
    /// Seed for the running minimum
    const HIGHEST: Self;

    /// Add `other` to a running total
    fn accumulate(self, other: Self) -> Self;

    /// Mean of `count` values summing to `total`; `count` is never zero
    fn mean(total: Self, count: usize) -> Self;

    /// Midpoint of two values, truncating for integral measures
    fn midpoint(a: Self, b: Self) -> Self;
}

impl Measure for u64 {
    const LOWEST: Self = 0;
    const HIGHEST: Self = u64::MAX;

    fn accumulate(self, other: Self) -> Self {
        self.saturating_add(other)
    }

    fn mean(total: Self, count: usize) -> Self {
        (total as f64 / count as f64).round() as u64
    }

    fn midpoint(a: Self, b: Self) -> Self {
        a / 2 + b / 2 + (a % 2 + b % 2) / 2
    }
}

impl Measure for i64 {
    const LOWEST: Self = i64::MIN;
    const HIGHEST: Self = i64::MAX;

    fn accumulate(self, other: Self) -> Self {
        self.saturating_add(other)
    }

    fn mean(total: Self, count: usize) -> Self {
        (total as f64 / count as f64).round() as i64
    }

    fn midpoint(a: Self, b: Self) -> Self {
        ((i128::from(a) + i128::from(b)) / 2) as i64
    }
}

impl Measure for f64 {
    const LOWEST: Self = f64::MIN;
    const HIGHEST: Self = f64::MAX;

    fn accumulate(self, other: Self) -> Self {
        self + other
    }

    fn mean(total: Self, count: usize) -> Self {
        total / count as f64
    }

    fn midpoint(a: Self, b: Self) -> Self {
        (a + b) / 2.0
    }
}

impl Measure for Duration {
    const LOWEST: Self = Duration::ZERO;
    const HIGHEST: Self = Duration::MAX;

    fn accumulate(self, other: Self) -> Self {
        self.saturating_add(other)
    }

    fn mean(total: Self, count: usize) -> Self {
        Duration::from_nanos((total.as_nanos() as f64 / count as f64).round() as u64)
    }

    fn midpoint(a: Self, b: Self) -> Self {
        a.saturating_add(b) / 2
    }
}

/// Five-number summary of a numeric dimension
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary<T> {
    pub minimum: T,
    pub mean: T,
    pub median: T,
    pub maximum: T,
    pub total: T,
}

/// Statistics derived from one probe
///
/// `total` is the number of records summarised; each categorical map sums to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub total: usize,
    pub bitrate: NumericSummary<u64>,
    pub duration: NumericSummary<Duration>,
    pub rating: NumericSummary<f64>,
    pub size: NumericSummary<u64>,
    pub year: NumericSummary<i64>,
    pub audio_channels: BTreeMap<u32, usize>,
    pub audio_codec: BTreeMap<String, usize>,
    pub video_codec: BTreeMap<String, usize>,
    pub quality: BTreeMap<String, usize>,
}

impl StatisticsSummary {
    /// Share of all records represented by `count`, as a percentage
    pub fn percentage(&self, count: usize) -> f64 {
        crate::utils::math::safe_percentage(count, self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
