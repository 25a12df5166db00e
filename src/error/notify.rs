use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Failed to build notification client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to serialize notification payload: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to build notification request: {source}")]
    BuildRequest {
        #[source]
        source: reqwest::Error,
    },
    #[error("Notification request failed: {source}")]
    Send {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read notification response body: {source}")]
    ReadBody {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to write notification output: {source}")]
    WriteOutput {
        #[source]
        source: std::io::Error,
    },
}
