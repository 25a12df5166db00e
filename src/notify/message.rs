use chrono::{Local, NaiveTime};

use crate::domain::{RunConfig, RunStats};
use crate::format::{elapsed_secs_x100, format_x100, format_x1000};
use crate::metrics::AggregatedMetrics;

/// Line-break marker kept literal so the message stays on one line locally.
///
/// Webhook payloads turn it into a real newline.
pub const LINE_BREAK_MARKER: &str = "\\n";

/// Wall-clock time stamped on notifications.
#[must_use]
pub fn notification_time() -> NaiveTime {
    Local::now().time()
}

/// Build the one-line run summary.
///
/// The throughput segment is left out when `metrics` is `None`. The wording is
/// matched byte for byte by existing consumers, spelling included.
#[must_use]
pub fn notification_message(
    config: &RunConfig,
    stats: &RunStats,
    metrics: Option<&AggregatedMetrics>,
    at: NaiveTime,
) -> String {
    let head = format!("[{}] {} → ", at.format("%H:%M:%S%.3f"), config.request_uri());
    let throughput = metrics
        .map(|metrics| {
            format!(
                "`{} req/sec ({} ~ {} [ms])`{}",
                format_x100(metrics.requests_per_sec_x100),
                format_x1000(metrics.time_per_request_ms_x1000),
                format_x1000(metrics.worker_time_per_request_ms_x1000),
                LINE_BREAK_MARKER
            )
        })
        .unwrap_or_default();
    let tail = format!(
        "estimated : {} seconds [ *{}* Connections / *{} ({})* Transections]",
        format_x100(elapsed_secs_x100(stats.total_execution_time)),
        config.concurrency,
        stats.total_requests,
        stats.total_failed_requests
    );
    [head, throughput, tail].concat()
}
