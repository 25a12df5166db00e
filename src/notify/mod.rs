//! Short run notifications, pushed to a webhook or written locally.
mod dispatcher;
mod message;

#[cfg(test)]
mod tests;

pub use dispatcher::{DEFAULT_NOTIFY_TIMEOUT, Delivery, NotificationDispatcher, NotifyConfig};
pub use message::{LINE_BREAK_MARKER, notification_message, notification_time};
