use std::io::Write;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::NotifyError;

use super::message::LINE_BREAK_MARKER;

/// Upper bound for the whole webhook exchange.
pub const DEFAULT_NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);
/// Connect timeout for the webhook.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyConfig {
    /// Webhook receiving `PUT {"message": ...}`. `None` writes locally.
    pub webhook: Option<Url>,
    pub timeout: Duration,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            webhook: None,
            timeout: DEFAULT_NOTIFY_TIMEOUT,
        }
    }
}

/// Outcome of one notification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Local,
    Webhook { status: u16, body: String },
    Failed,
}

#[derive(Serialize)]
struct WebhookPayload<'msg> {
    message: &'msg str,
}

#[derive(Debug)]
pub struct NotificationDispatcher {
    webhook: Option<(Url, Client)>,
}

impl NotificationDispatcher {
    /// # Errors
    ///
    /// Returns an error when the HTTP client for the webhook cannot be built.
    pub fn new(config: &NotifyConfig) -> Result<Self, NotifyError> {
        let webhook = match config.webhook.as_ref() {
            Some(url) => {
                let client = Client::builder()
                    .timeout(config.timeout)
                    .connect_timeout(CONNECT_TIMEOUT.min(config.timeout))
                    .build()
                    .map_err(|source| NotifyError::BuildClient { source })?;
                Some((url.clone(), client))
            }
            None => None,
        };
        Ok(Self { webhook })
    }

    /// Dispatcher that only writes to the local output.
    #[must_use]
    pub const fn local() -> Self {
        Self { webhook: None }
    }

    #[must_use]
    pub const fn is_webhook(&self) -> bool {
        self.webhook.is_some()
    }

    /// Deliver `message` and write what the caller should see to `out`.
    ///
    /// Webhook failures are logged and reported as [`Delivery::Failed`]; they
    /// never abort the caller. No retries are made.
    pub async fn dispatch<W>(&self, message: &str, out: &mut W) -> Delivery
    where
        W: Write,
    {
        let Some((url, client)) = self.webhook.as_ref() else {
            debug!("No webhook configured, writing notification locally.");
            return match write_local(message, out) {
                Ok(()) => Delivery::Local,
                Err(err) => {
                    warn!("{}", err);
                    Delivery::Failed
                }
            };
        };

        match put_message(client, url, message).await {
            Ok((status, body)) => {
                if !(200..300).contains(&status) {
                    warn!("Webhook {} answered with status {}", url, status);
                }
                if let Err(source) = writeln!(out, "{}", body) {
                    warn!("{}", NotifyError::WriteOutput { source });
                }
                Delivery::Webhook { status, body }
            }
            Err(err) => {
                warn!("{}", err);
                Delivery::Failed
            }
        }
    }
}

fn write_local<W>(message: &str, out: &mut W) -> Result<(), NotifyError>
where
    W: Write,
{
    writeln!(out)
        .and_then(|()| writeln!(out, "{}", message))
        .and_then(|()| out.flush())
        .map_err(|source| NotifyError::WriteOutput { source })
}

async fn put_message(
    client: &Client,
    url: &Url,
    message: &str,
) -> Result<(u16, String), NotifyError> {
    let text = message.replace(LINE_BREAK_MARKER, "\n");
    let body = serde_json::to_vec(&WebhookPayload { message: &text })
        .map_err(|source| NotifyError::Serialize { source })?;
    let request = client
        .put(url.clone())
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(body)
        .build()
        .map_err(|source| NotifyError::BuildRequest { source })?;

    debug!("Sending notification to {}", url);
    let response = client
        .execute(request)
        .await
        .map_err(|source| NotifyError::Send { source })?;
    let status = response.status().as_u16();
    let reply = response
        .text()
        .await
        .map_err(|source| NotifyError::ReadBody { source })?;
    Ok((status, reply))
}
