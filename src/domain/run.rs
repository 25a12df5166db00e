use std::time::Duration;

/// Target and load shape of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub host: String,
    pub port: u16,
    pub url: String,
    pub concurrency: u64,
}

impl RunConfig {
    /// Path and query of the target URL, as sent on the request line.
    ///
    /// Values that do not parse as an absolute URL are returned unchanged.
    #[must_use]
    pub fn request_uri(&self) -> String {
        url::Url::parse(&self.url).map_or_else(
            |_| self.url.clone(),
            |parsed| match parsed.query() {
                Some(query) => format!("{}?{}", parsed.path(), query),
                None => parsed.path().to_owned(),
            },
        )
    }
}

/// Raw counters and samples collected during a run.
///
/// `response_time_data` holds one latency per completed attempt in arrival
/// order. Whether failed attempts contribute a sample is up to the engine;
/// aggregation only relies on the samples present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub total_requests: u64,
    pub total_failed_requests: u64,
    pub err_connect: u64,
    pub err_receive: u64,
    pub err_length: u64,
    pub err_exception: u64,
    /// Non-2xx responses. Counted apart from the failures above.
    pub err_response: u64,
    pub total_execution_time: Duration,
    pub total_received: u64,
    /// Body length of the target's response, in bytes.
    pub content_size: u64,
    pub response_time_data: Vec<Duration>,
}
