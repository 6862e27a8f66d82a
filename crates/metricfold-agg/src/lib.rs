//! Regularization and summation of irregular metric series.
//!
//! Pure computation, no I/O. Raw `(timestamp, value)` series are aligned onto
//! an evenly spaced bucket grid, gaps are filled with an explicit "no data"
//! marker (`None`), exact duplicate samples are dropped, and the series are
//! summed bucket by bucket with `None` acting as the additive identity.
//!
//! ```
//! use metricfold_agg::{aggregate, Point, Sample};
//!
//! let a = vec![Sample::new(0, 1.0), Sample::new(10, 2.0)];
//! let b = vec![Sample::new(10, 3.0)];
//! let sum = aggregate(&[a, b], 0, 20, 10).unwrap();
//! assert_eq!(
//!     sum.points(),
//!     &[Point::present(0, 1.0), Point::present(10, 5.0), Point::missing(20)]
//! );
//! ```

mod aggregate;
mod bucket;
mod config;
mod dedup;
mod densify;
mod error;
mod interval;
mod merge;
mod sample;
mod series;

pub use aggregate::aggregate;
pub use bucket::BucketMap;
pub use config::AggregateConfig;
pub use dedup::dedup;
pub use densify::densify;
pub use error::AggregateError;
pub use interval::{align_up, AlignedWindow, Interval, Window};
pub use merge::{combine, merge};
pub use sample::{Point, Sample};
pub use series::RegularizedSeries;
