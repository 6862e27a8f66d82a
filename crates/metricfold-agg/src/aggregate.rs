//! Multi-series aggregation driver.

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::config::AggregateConfig;
use crate::densify::densify_aligned;
use crate::error::AggregateError;
use crate::merge::merge;
use crate::sample::Sample;
use crate::series::RegularizedSeries;

/// Sum any number of raw series onto the bucket grid of `[start, end]`.
///
/// Shorthand for [`AggregateConfig::new`] followed by
/// [`AggregateConfig::aggregate`] with default settings. With no input series
/// the result is an all-`None` series spanning the aligned window.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`AggregateError::InvalidInterval`] | `interval` is zero |
/// | [`AggregateError::AlignmentOverflow`] | A window bound rounds past `u32::MAX` |
pub fn aggregate<S>(
    series: &[S],
    start: u32,
    end: u32,
    interval: u32,
) -> Result<RegularizedSeries, AggregateError>
where
    S: AsRef<[Sample]> + Sync,
{
    AggregateConfig::new(start, end, interval)?.aggregate(series)
}

/// Left fold: `acc = merge(canonicalize(acc), densify(series[i]))`.
///
/// The accumulator is re-densified over the window before every merge so
/// that each merge sees two series of identical shape, including the first
/// one when the accumulator is still empty.
#[instrument(
    skip_all,
    fields(
        n_series = series.len(),
        start = config.window.start,
        end = config.window.end,
        interval = config.interval.get(),
    )
)]
pub(crate) fn fold<S>(
    series: &[S],
    config: &AggregateConfig,
) -> Result<RegularizedSeries, AggregateError>
where
    S: AsRef<[Sample]> + Sync,
{
    let window = config.window.align(config.interval)?;
    let n_buckets = window.bucket_count();
    if let Some(limit) = config.max_buckets {
        if n_buckets > limit {
            return Err(AggregateError::TooManyBuckets {
                buckets: n_buckets,
                limit,
            });
        }
    }
    debug!(
        aligned_start = window.start(),
        aligned_end = window.end(),
        n_buckets,
        "window aligned"
    );

    let step = |acc: RegularizedSeries, next: RegularizedSeries| {
        let canonical = acc.canonicalize_aligned(&window);
        merge(&canonical, &next)
    };
    let seed = RegularizedSeries::default();

    let result = if config.parallel {
        let dense: Vec<RegularizedSeries> = series
            .par_iter()
            .map(|s| densify_aligned(s.as_ref(), &window))
            .collect();
        dense.into_iter().fold(seed, step)
    } else {
        series
            .iter()
            .map(|s| densify_aligned(s.as_ref(), &window))
            .fold(seed, step)
    };

    // No input series: the fold never ran, so canonicalize the seed directly.
    let result = if series.is_empty() {
        result.canonicalize_aligned(&window)
    } else {
        result
    };

    info!(
        n_series = series.len(),
        n_buckets = result.len(),
        n_missing = result.missing_count(),
        "aggregation complete"
    );

    Ok(result)
}
