//! Raw samples and regularized points.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single raw metric reading.
///
/// `timestamp` counts seconds since an external epoch. A NaN `value` is read
/// as "no reading" once the sample is bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Seconds since the caller's epoch.
    pub timestamp: u32,
    /// Measured value.
    pub value: f64,
}

impl Sample {
    /// Create a new sample.
    #[must_use]
    pub fn new(timestamp: u32, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Return the value as an `Option`, mapping NaN to `None`.
    #[must_use]
    pub fn reading(&self) -> Option<f64> {
        if self.value.is_nan() {
            None
        } else {
            Some(self.value)
        }
    }
}

impl From<(u32, f64)> for Sample {
    fn from((timestamp, value): (u32, f64)) -> Self {
        Self::new(timestamp, value)
    }
}

/// One bucket of a regularized series. `value` is `None` when no sample
/// landed in the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Bucket timestamp, always a multiple of the interval.
    pub timestamp: u32,
    /// Summed value, or `None` for an empty bucket.
    pub value: Option<f64>,
}

impl Point {
    /// Create a point holding a value.
    #[must_use]
    pub fn present(timestamp: u32, value: f64) -> Self {
        Self {
            timestamp,
            value: Some(value),
        }
    }

    /// Create an empty point.
    #[must_use]
    pub fn missing(timestamp: u32) -> Self {
        Self {
            timestamp,
            value: None,
        }
    }

    /// Return true if the bucket holds no data.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "({}, {v})", self.timestamp),
            None => write!(f, "({}, -)", self.timestamp),
        }
    }
}
