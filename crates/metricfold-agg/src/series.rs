//! Regularized series with an ordering guarantee.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::AggregateError;
use crate::sample::Point;

/// Immutable sequence of points, strictly ascending by timestamp.
///
/// Series produced by [`densify`](crate::densify) and
/// [`aggregate`](crate::aggregate) are also dense: one point per bucket of the
/// aligned window, with `None` for buckets that received no data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct RegularizedSeries(Vec<Point>);

impl RegularizedSeries {
    /// Create a series, validating that timestamps are strictly ascending.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AggregateError::UnsortedSeries`] | A timestamp is not greater than its predecessor |
    pub fn new(points: Vec<Point>) -> Result<Self, AggregateError> {
        if let Some(index) = points
            .windows(2)
            .position(|w| w[0].timestamp >= w[1].timestamp)
        {
            return Err(AggregateError::UnsortedSeries { index: index + 1 });
        }
        Ok(Self(points))
    }

    /// Wrap points already known to be strictly ascending.
    pub(crate) fn from_sorted_unchecked(points: Vec<Point>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        Self(points)
    }

    /// Return the points as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Iterate over the points in timestamp order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    /// Iterate over the bucket timestamps.
    pub fn timestamps(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().map(|p| p.timestamp)
    }

    /// Iterate over the bucket values.
    pub fn values(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.0.iter().map(|p| p.value)
    }

    /// Return the point at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.0.get(index)
    }

    /// Return the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the number of points holding no data.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.0.iter().filter(|p| p.is_missing()).count()
    }

    /// Consume and return the inner vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }
}

impl Index<usize> for RegularizedSeries {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl AsRef<[Point]> for RegularizedSeries {
    fn as_ref(&self) -> &[Point] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a RegularizedSeries {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<Point>> for RegularizedSeries {
    type Error = AggregateError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<RegularizedSeries> for Vec<Point> {
    fn from(series: RegularizedSeries) -> Self {
        series.0
    }
}
