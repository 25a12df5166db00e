/// Latency below which `percent` of the samples fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentileValue {
    pub percent: u8,
    pub latency_ms: u64,
}

/// Metrics derived from one run. Latencies are whole milliseconds (truncated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedMetrics {
    pub sample_count: usize,
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    pub median_latency_ms: u64,
    /// Elapsed time divided by the request count.
    pub mean_latency_ms: u64,
    /// Population standard deviation of the samples, in hundredths of a ms.
    pub stddev_ms_x100: u64,
    pub requests_per_sec_x100: u64,
    /// Mean time per request across all concurrent requests, in thousandths of a ms.
    pub time_per_request_ms_x1000: u64,
    /// Mean time per request as seen by one worker, in thousandths of a ms.
    pub worker_time_per_request_ms_x1000: u64,
    pub transfer_rate_kbps_x100: u64,
    pub percentiles: Vec<PercentileValue>,
}

impl AggregatedMetrics {
    #[must_use]
    pub fn percentile(&self, percent: u8) -> Option<u64> {
        self.percentiles
            .iter()
            .find(|value| value.percent == percent)
            .map(|value| value.latency_ms)
    }
}
