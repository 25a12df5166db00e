//! Reporting core for HTTP load-test runs.
//!
//! Once the execution engine has finished a run it hands over a
//! [`domain::RunConfig`] and [`domain::RunStats`]. [`metrics::aggregate`]
//! derives the summary numbers, [`report::render_report`] turns them into an
//! ab-style text report, and [`notify::NotificationDispatcher`] pushes a short
//! status message to a webhook or prints it.
pub mod args;
pub mod config;
pub mod domain;
pub mod error;
mod format;
pub mod metrics;
pub mod notify;
pub mod report;
pub mod system;
