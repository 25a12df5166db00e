use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read run file '{path}': {source}")]
    ReadRunFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse JSON '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported file extension '{ext}'. Use .toml or .json.")]
    UnsupportedExtension { ext: String },
    #[error("File must have .toml or .json extension.")]
    MissingExtension,
    #[error("Invalid webhook URL '{url}': {source}")]
    InvalidWebhook {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Webhook URL '{url}' must use http or https.")]
    UnsupportedWebhookScheme { url: String },
}
