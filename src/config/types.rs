use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub notify: Option<NotifyFileConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NotifyFileConfig {
    #[serde(alias = "url")]
    pub webhook: Option<String>,
    pub timeout_ms: Option<u64>,
}
