use std::time::Duration;

use url::Url;

use crate::error::{AppError, AppResult, ConfigError};
use crate::notify::{DEFAULT_NOTIFY_TIMEOUT, NotifyConfig};

use super::types::ConfigFile;

/// Merge notification settings. Explicit values win over the config file.
///
/// A blank webhook counts as unset, so notifications fall back to local output.
///
/// # Errors
///
/// Returns an error when the webhook is not an absolute http(s) URL.
pub fn resolve_notify_config(
    webhook: Option<&str>,
    timeout_ms: Option<u64>,
    file: Option<&ConfigFile>,
) -> AppResult<NotifyConfig> {
    let file_notify = file.and_then(|config| config.notify.as_ref());
    let webhook = webhook
        .or_else(|| file_notify.and_then(|notify| notify.webhook.as_deref()))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(parse_webhook)
        .transpose()?;
    let timeout = timeout_ms
        .or_else(|| file_notify.and_then(|notify| notify.timeout_ms))
        .filter(|value| *value > 0)
        .map_or(DEFAULT_NOTIFY_TIMEOUT, Duration::from_millis);

    Ok(NotifyConfig { webhook, timeout })
}

fn parse_webhook(value: &str) -> AppResult<Url> {
    let url = Url::parse(value).map_err(|err| {
        AppError::config(ConfigError::InvalidWebhook {
            url: value.to_owned(),
            source: err,
        })
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(AppError::config(ConfigError::UnsupportedWebhookScheme {
            url: value.to_owned(),
        })),
    }
}
