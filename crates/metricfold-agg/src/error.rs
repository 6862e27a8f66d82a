//! Error types for series regularization and aggregation.

/// Errors from interval validation, window alignment, and aggregation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    /// Returned when the sampling interval is zero.
    #[error("sampling interval must be at least 1, got {interval}")]
    InvalidInterval {
        /// The invalid interval provided.
        interval: u32,
    },

    /// Returned when rounding a window bound up to the next bucket exceeds `u32::MAX`.
    #[error("aligning timestamp {timestamp} to interval {interval} overflows u32")]
    AlignmentOverflow {
        /// The timestamp that could not be aligned.
        timestamp: u32,
        /// The interval it was being aligned to.
        interval: u32,
    },

    /// Returned when the aligned window spans more buckets than the configured limit.
    #[error("window spans {buckets} buckets, limit is {limit}")]
    TooManyBuckets {
        /// Number of buckets the aligned window would produce.
        buckets: usize,
        /// The configured maximum.
        limit: usize,
    },

    /// Returned when a deserialized series is not strictly ascending by timestamp.
    #[error("series timestamps must be strictly ascending, violated at index {index}")]
    UnsortedSeries {
        /// Position of the first point not greater than its predecessor.
        index: usize,
    },
}
