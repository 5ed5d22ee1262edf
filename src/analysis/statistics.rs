//! Statistics aggregation over probed media records
//!
//! One pass collects running minimum/maximum and the per-record values of each
//! numeric dimension plus occurrence counts of each categorical dimension.
//! Totals, means and medians are derived afterwards from the sorted values, so
//! floating point totals do not depend on record order.
//!
//! The median keeps the long-standing selection rule of the reporting tool:
//! values are ordered descending and, with `h = count / 2`, an even count takes
//! the element at `h` while an odd count takes the midpoint of elements `h - 1`
//! and `h`. A single record is its own median.

use crate::probe::ProbeResult;
use crate::types::media::MediaRecord;
use crate::types::statistics::{Measure, NumericSummary, StatisticsSummary};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::Duration;

/// Running state for one numeric dimension
#[derive(Debug, Clone)]
struct NumericAccumulator<T: Measure> {
    minimum: T,
    maximum: T,
    values: Vec<T>,
}

impl<T: Measure> NumericAccumulator<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            minimum: T::HIGHEST,
            maximum: T::LOWEST,
            values: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, value: T) {
        if value > self.maximum {
            self.maximum = value;
        }
        if value < self.minimum {
            self.minimum = value;
        }
        self.values.push(value);
    }

    fn finish(mut self) -> NumericSummary<T> {
        let count = self.values.len();
        if count == 0 {
            return NumericSummary::default();
        }

        self.values
            .sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        let total = self
            .values
            .iter()
            .fold(T::default(), |sum, value| sum.accumulate(*value));

        NumericSummary {
            minimum: self.minimum,
            mean: T::mean(total, count),
            median: median_of_descending(&self.values),
            maximum: self.maximum,
            total,
        }
    }
}

/// Median of a non-empty, descending-sorted slice
fn median_of_descending<T: Measure>(sorted: &[T]) -> T {
    let h = sorted.len() / 2;

    if sorted.len() % 2 == 0 {
        sorted[h]
    } else if h == 0 {
        sorted[0]
    } else {
        T::midpoint(sorted[h - 1], sorted[h])
    }
}

fn count<K: Ord>(counts: &mut BTreeMap<K, usize>, key: K) {
    *counts.entry(key).or_insert(0) += 1;
}

/// Statistics engine for probed libraries
pub struct StatisticsAnalyser;

impl StatisticsAnalyser {
    /// Summarise every record of a probe
    pub fn analyse_probe(probe: &ProbeResult) -> StatisticsSummary {
        Self::summarise(&probe.records)
    }

    /// Summarise a slice of media records
    ///
    /// An empty slice yields the default summary (all zero, no categories).
    pub fn summarise(records: &[MediaRecord]) -> StatisticsSummary {
        let total = records.len();
        if total == 0 {
            return StatisticsSummary::default();
        }

        let mut bitrate = NumericAccumulator::<u64>::with_capacity(total);
        let mut duration = NumericAccumulator::<Duration>::with_capacity(total);
        let mut rating = NumericAccumulator::<f64>::with_capacity(total);
        let mut size = NumericAccumulator::<u64>::with_capacity(total);
        let mut year = NumericAccumulator::<i64>::with_capacity(total);

        let mut audio_channels = BTreeMap::new();
        let mut audio_codec = BTreeMap::new();
        let mut video_codec = BTreeMap::new();
        let mut quality = BTreeMap::new();

        for record in records {
            count(&mut audio_channels, record.audio_channels);
            count(&mut audio_codec, record.audio_codec.clone());
            count(&mut video_codec, record.video_codec.clone());
            count(&mut quality, record.quality.clone());

            bitrate.push(record.bitrate);
            duration.push(record.duration);
            rating.push(record.rating);
            size.push(record.size);
            year.push(i64::from(record.year));
        }

        StatisticsSummary {
            total,
            bitrate: bitrate.finish(),
            duration: duration.finish(),
            rating: rating.finish(),
            size: size.finish(),
            year: year.finish(),
            audio_channels,
            audio_codec,
            video_codec,
            quality,
        }
    }
}
