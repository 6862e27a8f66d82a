//! Exact-duplicate sample removal.

use std::collections::HashSet;

use crate::sample::Sample;

/// Hashable identity of a sample.
///
/// NaN readings all share one identity, and `-0.0` is folded into `0.0` so that
/// identity agrees with float equality for every non-NaN value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SampleKey {
    timestamp: u32,
    bits: Option<u64>,
}

impl From<&Sample> for SampleKey {
    fn from(sample: &Sample) -> Self {
        let bits = sample.reading().map(|v| {
            if v == 0.0 {
                0.0_f64.to_bits()
            } else {
                v.to_bits()
            }
        });
        Self {
            timestamp: sample.timestamp,
            bits,
        }
    }
}

/// Remove samples that repeat an earlier sample's timestamp and value.
///
/// First occurrences are kept in input order. Two NaN readings at the same
/// timestamp count as duplicates.
#[must_use = "returns a new deduplicated vector; the input is unchanged"]
pub fn dedup(samples: &[Sample]) -> Vec<Sample> {
    let mut seen = HashSet::with_capacity(samples.len());
    samples
        .iter()
        .filter(|s| seen.insert(SampleKey::from(*s)))
        .copied()
        .collect()
}
