//! Configuration builder for multi-series aggregation.

use crate::error::AggregateError;
use crate::interval::{Interval, Window};
use crate::sample::Sample;
use crate::series::RegularizedSeries;

/// Configuration for summing many raw series onto one bucket grid.
///
/// Construct via [`AggregateConfig::new`], then chain `with_*` methods to override defaults.
///
/// # Defaults
///
/// | Parameter     | Default |
/// |---------------|---------|
/// | `max_buckets` | `None`  |
/// | `parallel`    | `true`  |
#[derive(Debug, Clone)]
pub struct AggregateConfig {
    pub(crate) window: Window,
    pub(crate) interval: Interval,
    pub(crate) max_buckets: Option<usize>,
    pub(crate) parallel: bool,
}

impl AggregateConfig {
    /// Create a configuration for the inclusive window `[start, end]` sampled every `interval`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AggregateError::InvalidInterval`] | `interval` is zero |
    pub fn new(start: u32, end: u32, interval: u32) -> Result<Self, AggregateError> {
        Ok(Self {
            window: Window::new(start, end),
            interval: Interval::new(interval)?,
            max_buckets: None,
            parallel: true,
        })
    }

    /// Cap the number of output buckets. Windows that would exceed the cap
    /// are rejected before any work is done.
    #[must_use]
    pub fn with_max_buckets(mut self, max_buckets: usize) -> Self {
        self.max_buckets = Some(max_buckets);
        self
    }

    /// Enable or disable densifying input series on the rayon thread pool.
    ///
    /// Merging always runs sequentially in input order, so the output does
    /// not depend on this setting.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Return the requested (unaligned) window.
    #[must_use]
    pub fn window(&self) -> Window {
        self.window
    }

    /// Return the sampling interval.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Return the bucket cap, if any.
    #[must_use]
    pub fn max_buckets(&self) -> Option<usize> {
        self.max_buckets
    }

    /// Return whether input series are densified in parallel.
    #[must_use]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sum `series` bucket by bucket over the configured window.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AggregateError::AlignmentOverflow`] | A window bound rounds past `u32::MAX` |
    /// | [`AggregateError::TooManyBuckets`] | The aligned window exceeds `max_buckets` |
    pub fn aggregate<S>(&self, series: &[S]) -> Result<RegularizedSeries, AggregateError>
    where
        S: AsRef<[Sample]> + Sync,
    {
        crate::aggregate::fold(series, self)
    }
}
