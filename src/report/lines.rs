use crate::domain::{RunConfig, RunStats};
use crate::format::{elapsed_secs_x100, format_x100, format_x1000};
use crate::metrics::{AggregatedMetrics, LONGEST_PERCENTILE};

/// Render the full report, one trailing newline included.
///
/// Latency, throughput and percentile sections are left out when `metrics`
/// is `None`.
#[must_use]
pub fn render_report(
    config: &RunConfig,
    stats: &RunStats,
    metrics: Option<&AggregatedMetrics>,
) -> String {
    let mut text = report_lines(config, stats, metrics).join("\n");
    text.push('\n');
    text
}

#[must_use]
pub fn report_lines(
    config: &RunConfig,
    stats: &RunStats,
    metrics: Option<&AggregatedMetrics>,
) -> Vec<String> {
    let mut lines = vec![String::new(), String::new()];

    lines.push(format!("Server:        {}:{}", config.host, config.port));
    lines.push(format!("Path:          {}", config.request_uri()));
    lines.push(format!("Length:        {} bytes", stats.content_size));
    lines.push(String::new());

    lines.push(format!("Concurrency Level:      {}", config.concurrency));
    lines.push(format!(
        "Time taken for tests:   {} seconds",
        format_x100(elapsed_secs_x100(stats.total_execution_time))
    ));
    lines.push(format!("Complete requests:      {}", stats.total_requests));
    lines.extend(failure_lines(stats));
    lines.push(format!("HTML transferred:       {} bytes", stats.total_received));

    if let Some(metrics) = metrics {
        lines.extend(throughput_lines(metrics));
        lines.extend(connection_time_lines(metrics));
        lines.extend(percentile_lines(metrics));
    }

    lines
}

fn failure_lines(stats: &RunStats) -> Vec<String> {
    let mut lines = Vec::new();
    if stats.total_failed_requests == 0 {
        lines.push("Failed requests:        0".to_owned());
    } else {
        lines.push(format!(
            "Failed requests:        {}",
            stats.total_failed_requests
        ));
        lines.push(format!(
            "   (Connect: {}, Receive: {}, Length: {}, Exceptions: {})",
            stats.err_connect, stats.err_receive, stats.err_length, stats.err_exception
        ));
    }
    if stats.err_response > 0 {
        lines.push(format!("Non-2xx responses:      {}", stats.err_response));
    }
    lines
}

fn throughput_lines(metrics: &AggregatedMetrics) -> Vec<String> {
    vec![
        format!(
            "Requests per second:    {} [#/sec] (mean)",
            format_x100(metrics.requests_per_sec_x100)
        ),
        format!(
            "Time per request:       {} [ms] (mean)",
            format_x1000(metrics.worker_time_per_request_ms_x1000)
        ),
        format!(
            "Time per request:       {} [ms] (mean, across all concurrent requests)",
            format_x1000(metrics.time_per_request_ms_x1000)
        ),
        format!(
            "HTML Transfer rate:     {} [Kbytes/sec] received",
            format_x100(metrics.transfer_rate_kbps_x100)
        ),
        String::new(),
    ]
}

fn connection_time_lines(metrics: &AggregatedMetrics) -> Vec<String> {
    vec![
        "Connection Times (ms)".to_owned(),
        "              min\tmean[+/-sd]\tmedian\tmax".to_owned(),
        format!(
            "Total:        {}     \t{}   {} \t{} \t{}",
            metrics.min_latency_ms,
            metrics.mean_latency_ms,
            format_x100(metrics.stddev_ms_x100),
            metrics.median_latency_ms,
            metrics.max_latency_ms
        ),
        String::new(),
    ]
}

fn percentile_lines(metrics: &AggregatedMetrics) -> Vec<String> {
    let mut lines = vec!["Percentage of the requests served within a certain time (ms)".to_owned()];
    lines.extend(
        metrics
            .percentiles
            .iter()
            .filter(|value| value.percent < LONGEST_PERCENTILE)
            .map(|value| format!(" {}%\t {}", value.percent, value.latency_ms)),
    );
    lines.push(format!(
        " {}%\t {} (longest request)",
        LONGEST_PERCENTILE, metrics.max_latency_ms
    ));
    lines
}
