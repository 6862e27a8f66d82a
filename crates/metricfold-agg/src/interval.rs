//! Sampling interval, bucket alignment, and query windows.

use std::fmt;
use std::iter::StepBy;
use std::num::NonZeroU32;
use std::ops::RangeInclusive;

use crate::error::AggregateError;

/// A validated, non-zero sampling interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval(NonZeroU32);

impl Interval {
    /// Create a new interval.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AggregateError::InvalidInterval`] | `interval` is zero |
    pub fn new(interval: u32) -> Result<Self, AggregateError> {
        NonZeroU32::new(interval)
            .map(Self)
            .ok_or(AggregateError::InvalidInterval { interval })
    }

    /// Return the raw interval.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Round `timestamp` up to the nearest multiple of this interval, or `None`
    /// if the result does not fit in `u32`.
    #[must_use]
    pub fn checked_align_up(self, timestamp: u32) -> Option<u32> {
        let m = self.get();
        if timestamp % m == 0 {
            return Some(timestamp);
        }
        (timestamp / m + 1).checked_mul(m)
    }

    /// Return true if `timestamp` already sits on a bucket boundary.
    #[must_use]
    pub fn is_aligned(self, timestamp: u32) -> bool {
        timestamp % self.get() == 0
    }

    /// Largest bucket timestamp representable in `u32`.
    #[must_use]
    pub fn last_bucket(self) -> u32 {
        u32::MAX / self.get() * self.get()
    }
}

impl TryFrom<u32> for Interval {
    type Error = AggregateError;

    fn try_from(interval: u32) -> Result<Self, Self::Error> {
        Self::new(interval)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Round `timestamp` up to the nearest multiple of `interval`.
///
/// Timestamps already on a boundary are returned unchanged; anything between
/// two boundaries goes to the later one.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`AggregateError::AlignmentOverflow`] | The rounded timestamp exceeds `u32::MAX` |
pub fn align_up(timestamp: u32, interval: Interval) -> Result<u32, AggregateError> {
    interval
        .checked_align_up(timestamp)
        .ok_or(AggregateError::AlignmentOverflow {
            timestamp,
            interval: interval.get(),
        })
}

/// Inclusive query window as supplied by the caller. `start` may exceed `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Inclusive lower bound.
    pub start: u32,
    /// Inclusive upper bound.
    pub end: u32,
}

impl Window {
    /// Create a new window.
    #[must_use]
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Align both bounds up to bucket boundaries.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AggregateError::AlignmentOverflow`] | Either bound rounds past `u32::MAX` |
    pub fn align(self, interval: Interval) -> Result<AlignedWindow, AggregateError> {
        Ok(AlignedWindow {
            start: align_up(self.start, interval)?,
            end: align_up(self.end, interval)?,
            interval,
        })
    }
}

/// A window whose bounds are both bucket boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedWindow {
    start: u32,
    end: u32,
    interval: Interval,
}

impl AlignedWindow {
    /// Return the first bucket.
    #[must_use]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Return the last bucket.
    #[must_use]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Return the bucket spacing.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Return true if the window holds no buckets (aligned start after aligned end).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of buckets: `(end - start) / interval + 1`, or 0 when empty.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        ((self.end - self.start) / self.interval.get()) as usize + 1
    }

    /// Iterate over every bucket timestamp in ascending order.
    ///
    /// Never overflows, even when `end` is [`Interval::last_bucket`].
    pub fn timestamps(&self) -> StepBy<RangeInclusive<u32>> {
        (self.start..=self.end).step_by(self.interval.get() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(n: u32) -> Interval {
        Interval::new(n).unwrap()
    }

    #[test]
    fn rejects_zero_interval() {
        assert_eq!(
            Interval::new(0),
            Err(AggregateError::InvalidInterval { interval: 0 })
        );
    }

    #[test]
    fn try_from_and_display() {
        let interval: Interval = 60_u32.try_into().unwrap();
        assert_eq!(interval.get(), 60);
        assert_eq!(format!("{interval}"), "60s");
        assert!(Interval::try_from(0_u32).is_err());
    }

    #[test]
    fn is_aligned_checks_boundary() {
        assert!(iv(10).is_aligned(0));
        assert!(iv(10).is_aligned(790));
        assert!(!iv(10).is_aligned(791));
    }

    #[test]
    fn aligned_timestamp_unchanged() {
        assert_eq!(align_up(0, iv(10)).unwrap(), 0);
        assert_eq!(align_up(800, iv(10)).unwrap(), 800);
    }

    #[test]
    fn rounds_toward_ceiling() {
        assert_eq!(align_up(781, iv(10)).unwrap(), 790);
        assert_eq!(align_up(789, iv(10)).unwrap(), 790);
        assert_eq!(align_up(1, iv(100)).unwrap(), 100);
    }

    #[test]
    fn interval_of_one_is_identity() {
        for ts in [0, 1, 17, u32::MAX] {
            assert_eq!(align_up(ts, iv(1)).unwrap(), ts);
        }
    }

    #[test]
    fn overflow_is_an_error() {
        let result = align_up(u32::MAX, iv(10));
        assert_eq!(
            result,
            Err(AggregateError::AlignmentOverflow {
                timestamp: u32::MAX,
                interval: 10
            })
        );
    }

    #[test]
    fn last_bucket_is_largest_multiple() {
        assert_eq!(iv(10).last_bucket(), 4_294_967_290);
        assert_eq!(align_up(4_294_967_281, iv(10)).unwrap(), iv(10).last_bucket());
    }

    #[test]
    fn window_bucket_count() {
        let w = Window::new(784, 872).align(iv(10)).unwrap();
        assert_eq!((w.start(), w.end()), (790, 880));
        assert_eq!(w.bucket_count(), 10);
        assert_eq!(w.timestamps().count(), 10);
    }

    #[test]
    fn inverted_window_is_empty() {
        let w = Window::new(200, 100).align(iv(10)).unwrap();
        assert!(w.is_empty());
        assert_eq!(w.bucket_count(), 0);
        assert_eq!(w.timestamps().count(), 0);
    }

    #[test]
    fn inverted_window_in_same_bucket_has_one_bucket() {
        let w = Window::new(15, 12).align(iv(10)).unwrap();
        assert_eq!(w.bucket_count(), 1);
        assert_eq!(w.timestamps().collect::<Vec<_>>(), vec![20]);
    }

    #[test]
    fn timestamps_at_u32_max_do_not_overflow() {
        let interval = iv(10);
        let last = interval.last_bucket();
        let w = Window::new(last - 20, last).align(interval).unwrap();
        assert_eq!(
            w.timestamps().collect::<Vec<_>>(),
            vec![last - 20, last - 10, last]
        );
    }
}
