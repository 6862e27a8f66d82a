//! Timestamp-bucket lookup built from a raw series.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::dedup::dedup;
use crate::interval::Interval;
use crate::sample::{Point, Sample};

/// Mapping from bucket timestamp to the value of the first sample that claimed it.
///
/// A claimed bucket holding `None` was claimed by a NaN reading. Iteration
/// order is unspecified; ordered output is produced by walking a window.
#[derive(Debug, Clone, Default)]
pub struct BucketMap {
    buckets: HashMap<u32, Option<f64>>,
    duplicates: usize,
    collisions: usize,
    overflowed: usize,
}

impl BucketMap {
    /// Build the map from raw samples.
    ///
    /// Input is deduplicated first. Each timestamp is aligned up to the
    /// interval; the first sample to reach a bucket keeps it and later ones are
    /// dropped. Samples whose bucket would lie past `u32::MAX` are dropped too.
    #[must_use]
    pub fn build(samples: &[Sample], interval: Interval) -> Self {
        let unique = dedup(samples);
        let mut map = Self {
            buckets: HashMap::with_capacity(unique.len()),
            duplicates: samples.len() - unique.len(),
            ..Self::default()
        };
        for sample in &unique {
            map.claim(sample.timestamp, sample.reading(), interval);
        }
        map.log_discards();
        map
    }

    /// Build the map from the points of an existing series.
    #[must_use]
    pub fn from_points(points: &[Point], interval: Interval) -> Self {
        let mut map = Self {
            buckets: HashMap::with_capacity(points.len()),
            ..Self::default()
        };
        for point in points {
            map.claim(point.timestamp, point.value, interval);
        }
        map.log_discards();
        map
    }

    fn claim(&mut self, timestamp: u32, value: Option<f64>, interval: Interval) {
        let Some(bucket) = interval.checked_align_up(timestamp) else {
            self.overflowed += 1;
            return;
        };
        match self.buckets.entry(bucket) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(_) => self.collisions += 1,
        }
    }

    fn log_discards(&self) {
        if self.duplicates + self.collisions + self.overflowed > 0 {
            debug!(
                duplicates = self.duplicates,
                collisions = self.collisions,
                overflowed = self.overflowed,
                "discarded samples while bucketing"
            );
        }
    }

    /// Return the value stored for `bucket`, or `None` if the bucket is
    /// unclaimed or was claimed by a NaN reading.
    #[must_use]
    pub fn value_at(&self, bucket: u32) -> Option<f64> {
        self.buckets.get(&bucket).copied().flatten()
    }

    /// Return true if some sample claimed `bucket`.
    #[must_use]
    pub fn is_claimed(&self, bucket: u32) -> bool {
        self.buckets.contains_key(&bucket)
    }

    /// Return the number of claimed buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Return true if no bucket was claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of exact duplicates removed before bucketing.
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Number of samples dropped because an earlier sample held their bucket.
    #[must_use]
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Number of samples dropped because their bucket does not fit in `u32`.
    #[must_use]
    pub fn overflowed(&self) -> usize {
        self.overflowed
    }
}
