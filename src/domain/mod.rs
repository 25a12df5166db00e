//! Inputs handed over by the execution engine once a run has finished.
mod record;
mod run;

pub use record::{RunFile, StatsRecord, TargetRecord};
pub use run::{RunConfig, RunStats};
