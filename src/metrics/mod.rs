//! Aggregation of a finished run's samples into report metrics.
mod aggregate;
mod percentiles;
mod types;


pub use aggregate::aggregate;
pub use percentiles::{LONGEST_PERCENTILE, PERCENTILE_POINTS, percentile_index};
pub use types::{AggregatedMetrics, PercentileValue};
