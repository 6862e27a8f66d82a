//! Range filtering and gap filling onto an evenly spaced bucket grid.

use tracing::instrument;

use crate::bucket::BucketMap;
use crate::error::AggregateError;
use crate::interval::{AlignedWindow, Interval, Window};
use crate::sample::{Point, Sample};
use crate::series::RegularizedSeries;

/// Regularize a raw series over the window `[start, end]`.
///
/// Both bounds are aligned up to the interval, then every bucket from the
/// aligned start to the aligned end (inclusive) gets one point: the value of
/// the first sample that landed in it, or `None`. The result has exactly
/// `(aligned_end - aligned_start) / interval + 1` points, or none when the
/// aligned start lies after the aligned end. An empty input yields an
/// all-`None` series.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`AggregateError::AlignmentOverflow`] | `start` or `end` rounds past `u32::MAX` |
#[instrument(level = "debug", skip(samples), fields(n_samples = samples.len()))]
pub fn densify(
    samples: &[Sample],
    start: u32,
    end: u32,
    interval: Interval,
) -> Result<RegularizedSeries, AggregateError> {
    let window = Window::new(start, end).align(interval)?;
    Ok(densify_aligned(samples, &window))
}

pub(crate) fn densify_aligned(samples: &[Sample], window: &AlignedWindow) -> RegularizedSeries {
    let map = BucketMap::build(samples, window.interval());
    fill(&map, window)
}

fn fill(map: &BucketMap, window: &AlignedWindow) -> RegularizedSeries {
    let mut points = Vec::with_capacity(window.bucket_count());
    points.extend(window.timestamps().map(|timestamp| Point {
        timestamp,
        value: map.value_at(timestamp),
    }));
    RegularizedSeries::from_sorted_unchecked(points)
}

impl RegularizedSeries {
    /// Re-densify this series over `[start, end]`.
    ///
    /// Points are re-bucketed with the same first-wins rule as [`densify`],
    /// and the result covers exactly the aligned window. Used to restore the
    /// dense shape of an accumulator before it is merged.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AggregateError::AlignmentOverflow`] | `start` or `end` rounds past `u32::MAX` |
    pub fn canonicalize(
        &self,
        start: u32,
        end: u32,
        interval: Interval,
    ) -> Result<Self, AggregateError> {
        let window = Window::new(start, end).align(interval)?;
        Ok(self.canonicalize_aligned(&window))
    }

    pub(crate) fn canonicalize_aligned(&self, window: &AlignedWindow) -> Self {
        let map = BucketMap::from_points(self.points(), window.interval());
        fill(&map, window)
    }
}
