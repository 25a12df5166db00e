use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Summarize a finished HTTP load-test run as an ab-style report and push a short notification."
)]
pub struct ReportArgs {
    /// Finished run to report on (.json or .toml)
    #[arg(value_name = "RUN_FILE")]
    pub run_file: PathBuf,

    /// Path to config file (.toml or .json)
    #[arg(long = "config", short = 'c')]
    pub config: Option<String>,

    /// Webhook receiving the run notification via PUT (blank prints it instead)
    #[arg(long = "notify", env = "NOTIFY")]
    pub notify: Option<String>,

    /// Timeout for the webhook call in milliseconds
    #[arg(long = "notify-timeout-ms", value_parser = clap::value_parser!(u64).range(1..))]
    pub notify_timeout_ms: Option<u64>,

    /// Enable debug logging
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
