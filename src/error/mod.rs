mod app;
mod config;
mod metrics;
mod notify;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use metrics::MetricsError;
pub use notify::NotifyError;
