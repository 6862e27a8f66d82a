//! Pairwise union of regularized series with absence-aware summation.

use std::cmp::Ordering;

use crate::sample::Point;
use crate::series::RegularizedSeries;

/// Sum two bucket values, treating `None` as the additive identity.
///
/// Two `None`s combine to `None`.
#[must_use]
pub fn combine(x: Option<f64>, y: Option<f64>) -> Option<f64> {
    match (x, y) {
        (None, y) => y,
        (x, None) => x,
        (Some(x), Some(y)) => Some(x + y),
    }
}

/// Union two series by timestamp, combining values that share a bucket.
///
/// The result holds one point per distinct timestamp present in either input,
/// in ascending order. Neither input is modified.
#[must_use = "returns a new merged series; the inputs are unchanged"]
pub fn merge(a: &RegularizedSeries, b: &RegularizedSeries) -> RegularizedSeries {
    let (a, b) = (a.points(), b.points());
    let mut out = Vec::with_capacity(a.len().max(b.len()));
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].timestamp.cmp(&b[j].timestamp) {
            Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                out.push(Point {
                    timestamp: a[i].timestamp,
                    value: combine(a[i].value, b[j].value),
                });
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);

    RegularizedSeries::from_sorted_unchecked(out)
}
