use super::category::{Category, PerCategory};
use serde::Serialize;
use std::collections::BTreeMap;

pub const MS_PER_MINUTE: u64 = 60_000;

pub fn minute_bucket(timestamp_ms: u64) -> u64 {
    timestamp_ms / MS_PER_MINUTE
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSeriesEntry {
    pub minute: u64,
    /// Raw count at this minute, summed across all matches.
    pub count: u64,
    pub cumulative: u64,
    pub average_per_match: f64,
}

#[derive(Debug, Default)]
pub struct TemporalAggregator {
    buckets: PerCategory<BTreeMap<u64, u64>>,
}

impl TemporalAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: Category, minute: u64) {
        *self.buckets.get_mut(category).entry(minute).or_insert(0) += 1;
    }

    /// Dense per-minute series from minute 0 through the last minute with events.
    ///
    /// A category with no events yields an empty series, not a zero-filled one.
    pub fn finalize(&self, category: Category, total_matches: usize) -> Vec<TimelineSeriesEntry> {
        let buckets = self.buckets.get(category);
        let Some(max_minute) = buckets
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(minute, _)| *minute)
            .last()
        else {
            return Vec::new();
        };

        let divisor = total_matches.max(1) as f64;
        let mut cumulative = 0;

        (0..=max_minute)
            .map(|minute| {
                let count = buckets.get(&minute).copied().unwrap_or(0);
                cumulative += count;
                TimelineSeriesEntry {
                    minute,
                    count,
                    cumulative,
                    average_per_match: round2(count as f64 / divisor),
                }
            })
            .collect()
    }

    pub fn finalize_all(&self, total_matches: usize) -> PerCategory<Vec<TimelineSeriesEntry>> {
        PerCategory::from_fn(|category| self.finalize(category, total_matches))
    }
}

/// Two decimals, exact ties to even (1/8 -> 0.12).
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Minute with the most events; the earliest one wins ties.
pub fn peak_minute(series: &[TimelineSeriesEntry]) -> Option<&TimelineSeriesEntry> {
    series
        .iter()
        .filter(|entry| entry.count > 0)
        .fold(None, |best: Option<&TimelineSeriesEntry>, entry| match best {
            Some(b) if b.count >= entry.count => Some(b),
            _ => Some(entry),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_bucket_floors() {
        assert_eq!(minute_bucket(0), 0);
        assert_eq!(minute_bucket(59_999), 0);
        assert_eq!(minute_bucket(60_000), 1);
        assert_eq!(minute_bucket(65_000), 1);
    }

    #[test]
    fn test_empty_category_is_empty_series() {
        let temporal = TemporalAggregator::new();

        assert!(temporal.finalize(Category::Death, 5).is_empty());
    }

    #[test]
    fn test_series_is_dense_with_running_total() {
        let mut temporal = TemporalAggregator::new();
        temporal.record(Category::Kill, 1);
        temporal.record(Category::Kill, 4);
        temporal.record(Category::Kill, 4);

        let series = temporal.finalize(Category::Kill, 2);
        let minutes: Vec<u64> = series.iter().map(|e| e.minute).collect();
        let counts: Vec<u64> = series.iter().map(|e| e.count).collect();
        let cumulative: Vec<u64> = series.iter().map(|e| e.cumulative).collect();

        assert_eq!(minutes, vec![0, 1, 2, 3, 4]);
        assert_eq!(counts, vec![0, 1, 0, 0, 2]);
        assert_eq!(cumulative, vec![0, 1, 1, 1, 3]);
        assert_eq!(series[1].average_per_match, 0.5);
        assert_eq!(series[4].average_per_match, 1.0);
        assert_eq!(series[2].average_per_match, 0.0);
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        let mut temporal = TemporalAggregator::new();
        temporal.record(Category::Assist, 0);
        temporal.record(Category::Assist, 1);
        temporal.record(Category::Assist, 1);

        let series = temporal.finalize(Category::Assist, 3);
        assert_eq!(series[0].average_per_match, 0.33);
        assert_eq!(series[1].average_per_match, 0.67);
    }

    #[test]
    fn test_average_ties_round_to_even() {
        let mut temporal = TemporalAggregator::new();
        temporal.record(Category::Kill, 0);
        for _ in 0..5 {
            temporal.record(Category::Kill, 1);
        }

        let series = temporal.finalize(Category::Kill, 8);
        assert_eq!(series[0].average_per_match, 0.12);
        assert_eq!(series[1].average_per_match, 0.62);
    }

    #[test]
    fn test_zero_matches_divides_by_one() {
        let mut temporal = TemporalAggregator::new();
        temporal.record(Category::Objective, 0);
        temporal.record(Category::Objective, 0);

        let series = temporal.finalize(Category::Objective, 0);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].average_per_match, 2.0);
    }

    #[test]
    fn test_categories_are_independent() {
        let mut temporal = TemporalAggregator::new();
        temporal.record(Category::Death, 3);

        let all = temporal.finalize_all(1);
        assert_eq!(all.deaths.len(), 4);
        assert!(all.kills.is_empty());
        assert!(all.assists.is_empty());
        assert!(all.objectives.is_empty());
    }

    #[test]
    fn test_peak_minute_prefers_earliest() {
        let mut temporal = TemporalAggregator::new();
        for minute in [2, 2, 5, 5, 7] {
            temporal.record(Category::Kill, minute);
        }

        let series = temporal.finalize(Category::Kill, 1);
        assert_eq!(peak_minute(&series).map(|e| e.minute), Some(2));
        assert!(peak_minute(&[]).is_none());
    }
}
