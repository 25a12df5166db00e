use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{RunConfig, RunStats};

/// On-disk shape of a finished run. Durations are integer nanoseconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunFile {
    pub target: TargetRecord,
    #[serde(default)]
    pub stats: StatsRecord,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetRecord {
    pub host: String,
    pub port: u16,
    pub url: String,
    #[serde(alias = "connections")]
    pub concurrency: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StatsRecord {
    pub total_requests: u64,
    pub total_failed_requests: u64,
    pub err_connect: u64,
    pub err_receive: u64,
    pub err_length: u64,
    pub err_exception: u64,
    pub err_response: u64,
    pub total_execution_time_ns: u64,
    pub total_received: u64,
    pub content_size: u64,
    pub response_time_ns: Vec<u64>,
}

impl RunFile {
    #[must_use]
    pub fn into_parts(self) -> (RunConfig, RunStats) {
        let RunFile { target, stats } = self;
        let config = RunConfig {
            host: target.host,
            port: target.port,
            url: target.url,
            concurrency: target.concurrency,
        };
        let run_stats = RunStats {
            total_requests: stats.total_requests,
            total_failed_requests: stats.total_failed_requests,
            err_connect: stats.err_connect,
            err_receive: stats.err_receive,
            err_length: stats.err_length,
            err_exception: stats.err_exception,
            err_response: stats.err_response,
            total_execution_time: Duration::from_nanos(stats.total_execution_time_ns),
            total_received: stats.total_received,
            content_size: stats.content_size,
            response_time_data: stats
                .response_time_ns
                .into_iter()
                .map(Duration::from_nanos)
                .collect(),
        };
        (config, run_stats)
    }
}
