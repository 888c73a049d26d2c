use std::collections::BTreeMap;

use super::model::{EarthquakeRecord, MagnitudeBucket};

// ---------------------------------------------------------------------------
// Magnitude histogram
// ---------------------------------------------------------------------------

/// Counts of records per magnitude severity class.
///
/// Derived view, recomputed on demand; the three counts always partition
/// the input exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MagnitudeHistogram {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl MagnitudeHistogram {
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }

    pub fn count(&self, bucket: MagnitudeBucket) -> usize {
        match bucket {
            MagnitudeBucket::Low => self.low,
            MagnitudeBucket::Medium => self.medium,
            MagnitudeBucket::High => self.high,
        }
    }
}

/// Count records per severity bucket.
///
/// Pure function over a record snapshot: identical input yields identical
/// counts, and nothing is cached or mutated.
pub fn bucketize(records: &[EarthquakeRecord]) -> MagnitudeHistogram {
    let mut histogram = MagnitudeHistogram::default();
    for record in records {
        match MagnitudeBucket::classify(record.magnitude) {
            MagnitudeBucket::Low => histogram.low += 1,
            MagnitudeBucket::Medium => histogram.medium += 1,
            MagnitudeBucket::High => histogram.high += 1,
        }
    }
    histogram
}

// ---------------------------------------------------------------------------
// Region proportions
// ---------------------------------------------------------------------------

/// Fraction of the catalog attributed to each region, keyed by region name.
///
/// An empty input yields an empty map; the division by the total count
/// never runs over zero records. `BTreeMap` keeps the chart ordering
/// deterministic.
pub fn region_proportions(records: &[EarthquakeRecord]) -> BTreeMap<String, f64> {
    if records.is_empty() {
        return BTreeMap::new();
    }

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.region.clone()).or_default() += 1;
    }

    let total = records.len() as f64;
    counts
        .into_iter()
        .map(|(region, count)| (region, count as f64 / total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, magnitude: f64) -> EarthquakeRecord {
        EarthquakeRecord {
            region: region.to_string(),
            latitude: 45.0,
            longitude: 3.0,
            magnitude,
        }
    }

    #[test]
    fn buckets_partition_the_store() {
        let records: Vec<_> = [0.5, 3.9, 4.0, 5.5, 6.9, 7.0, 9.2]
            .iter()
            .map(|&m| record("Auvergne", m))
            .collect();
        let histogram = bucketize(&records);

        assert_eq!(histogram.low, 2);
        assert_eq!(histogram.medium, 3);
        assert_eq!(histogram.high, 2);
        assert_eq!(histogram.total(), records.len());
    }

    #[test]
    fn bucketize_is_repeatable() {
        let records = vec![record("Alsace", 4.2), record("Bretagne", 8.0)];
        assert_eq!(bucketize(&records), bucketize(&records));
    }

    #[test]
    fn empty_store_has_an_all_zero_histogram() {
        let histogram = bucketize(&[]);
        assert_eq!(histogram, MagnitudeHistogram::default());
        assert_eq!(histogram.total(), 0);
    }

    #[test]
    fn proportions_divide_counts_by_the_total() {
        let records = vec![
            record("A", 2.0),
            record("A", 3.0),
            record("A", 4.0),
            record("B", 5.0),
        ];
        let proportions = region_proportions(&records);

        assert_eq!(proportions.len(), 2);
        assert_eq!(proportions["A"], 0.75);
        assert_eq!(proportions["B"], 0.25);
    }

    #[test]
    fn proportions_sum_to_one() {
        let records = vec![
            record("Alsace", 2.0),
            record("Bretagne", 3.0),
            record("Provence", 4.0),
        ];
        let sum: f64 = region_proportions(&records).values().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_store_yields_an_empty_map() {
        assert!(region_proportions(&[]).is_empty());
    }
}
