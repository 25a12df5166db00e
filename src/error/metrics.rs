use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("Run recorded no response time samples.")]
    NoSamples,
    #[error("Run recorded zero elapsed time.")]
    ZeroElapsed,
}
