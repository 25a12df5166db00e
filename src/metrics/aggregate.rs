use std::time::Duration;

use crate::domain::{RunConfig, RunStats};
use crate::error::MetricsError;
use crate::format::{NS_PER_MS, div_round, ns_to_ms};

use super::percentiles::percentile_table;
use super::types::AggregatedMetrics;

/// Nanoseconds per second.
const NS_PER_SEC: u128 = 1_000_000_000;
/// Nanoseconds per hundredth of a millisecond.
const NS_PER_CENTI_MS: u128 = 10_000;
/// Nanoseconds per thousandth of a millisecond.
const NS_PER_MILLI_MS: u128 = NS_PER_MS / 1_000;
/// Bytes per reported kilobyte.
const BYTES_PER_KB: u64 = 1_024;
/// Scale for two-decimal values.
const SCALE_X100: u128 = 100;

/// Derive report metrics from a finished run.
///
/// # Errors
///
/// Returns [`MetricsError::NoSamples`] when no latency was recorded and
/// [`MetricsError::ZeroElapsed`] when the run took no measurable time. Callers
/// omit the latency sections of the report in both cases.
pub fn aggregate(config: &RunConfig, stats: &RunStats) -> Result<AggregatedMetrics, MetricsError> {
    if stats.response_time_data.is_empty() {
        return Err(MetricsError::NoSamples);
    }
    let elapsed_ns = stats.total_execution_time.as_nanos();
    if elapsed_ns == 0 {
        return Err(MetricsError::ZeroElapsed);
    }

    let mut sorted: Vec<u128> = stats
        .response_time_data
        .iter()
        .map(Duration::as_nanos)
        .collect();
    sorted.sort();

    let min_ns = sorted.first().copied().unwrap_or(0);
    let max_ns = sorted.last().copied().unwrap_or(0);
    let median_ns = sorted.get(sorted.len() / 2).copied().unwrap_or(max_ns);

    let total_requests = u128::from(stats.total_requests);
    let mean_ns = elapsed_ns.checked_div(total_requests).unwrap_or(0);
    let per_request_unit = total_requests.saturating_mul(NS_PER_MILLI_MS);
    let received_kb = u128::from(stats.total_received / BYTES_PER_KB);

    let metrics = AggregatedMetrics {
        sample_count: sorted.len(),
        min_latency_ms: ns_to_ms(min_ns),
        max_latency_ms: ns_to_ms(max_ns),
        median_latency_ms: ns_to_ms(median_ns),
        mean_latency_ms: ns_to_ms(mean_ns),
        stddev_ms_x100: div_round(std_dev_ns(&sorted), NS_PER_CENTI_MS),
        requests_per_sec_x100: div_round(
            total_requests
                .saturating_mul(SCALE_X100)
                .saturating_mul(NS_PER_SEC),
            elapsed_ns,
        ),
        time_per_request_ms_x1000: div_round(elapsed_ns, per_request_unit),
        worker_time_per_request_ms_x1000: div_round(
            elapsed_ns.saturating_mul(u128::from(config.concurrency)),
            per_request_unit,
        ),
        transfer_rate_kbps_x100: div_round(
            received_kb
                .saturating_mul(SCALE_X100)
                .saturating_mul(NS_PER_SEC),
            elapsed_ns,
        ),
        percentiles: percentile_table(&sorted),
    };

    tracing::debug!(
        "Aggregated {} samples over {}ns",
        metrics.sample_count,
        elapsed_ns
    );
    Ok(metrics)
}

/// Population standard deviation in nanoseconds.
///
/// The mean is the truncated integer mean of the samples.
fn std_dev_ns(samples: &[u128]) -> u128 {
    let count = u128::try_from(samples.len()).unwrap_or(u128::MAX);
    let sum = samples
        .iter()
        .fold(0u128, |acc, value| acc.saturating_add(*value));
    let mean = sum.checked_div(count).unwrap_or(0);
    let sum_of_squares = samples.iter().fold(0u128, |acc, value| {
        let delta = value.abs_diff(mean);
        acc.saturating_add(delta.saturating_mul(delta))
    });
    sum_of_squares.checked_div(count).unwrap_or(0).isqrt()
}
