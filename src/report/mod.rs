//! ab-style text report for a finished run.
mod lines;


pub use lines::{render_report, report_lines};
