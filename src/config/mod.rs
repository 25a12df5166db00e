//! Configuration and run-file loading.
mod loader;
mod resolve;
pub mod types;


pub use loader::{load_config, load_run_file};
pub use resolve::resolve_notify_config;

#[cfg(test)]
pub(crate) use loader::load_config_file;
