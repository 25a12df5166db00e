use std::io::Write;

use clap::Parser;
use tracing::{debug, warn};

use loadreport::args::ReportArgs;
use loadreport::config::{load_config, load_run_file, resolve_notify_config};
use loadreport::error::AppResult;
use loadreport::metrics::aggregate;
use loadreport::notify::{
    NotificationDispatcher, NotifyConfig, notification_message, notification_time,
};
use loadreport::report::render_report;
use loadreport::system::logger::init_logging;

pub(crate) fn run() -> AppResult<()> {
    let args = ReportArgs::parse();
    init_logging(args.verbose, args.no_color);

    let (run_config, stats) = load_run_file(&args.run_file)?.into_parts();

    let metrics = match aggregate(&run_config, &stats) {
        Ok(metrics) => Some(metrics),
        Err(err) => {
            debug!("Omitting latency sections: {}", err);
            None
        }
    };

    let mut stdout = std::io::stdout();
    stdout.write_all(render_report(&run_config, &stats, metrics.as_ref()).as_bytes())?;
    stdout.flush()?;

    let message = notification_message(
        &run_config,
        &stats,
        metrics.as_ref(),
        notification_time(),
    );
    let notify_config = notify_config(&args);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(notify(&notify_config, &message));
    Ok(())
}

/// Notification settings for this run. Any problem falls back to local output.
fn notify_config(args: &ReportArgs) -> NotifyConfig {
    load_config(args.config.as_deref())
        .and_then(|file| {
            resolve_notify_config(
                args.notify.as_deref(),
                args.notify_timeout_ms,
                file.as_ref(),
            )
        })
        .unwrap_or_else(|err| {
            warn!("{}; printing notification instead", err);
            NotifyConfig::default()
        })
}

async fn notify(config: &NotifyConfig, message: &str) {
    let dispatcher = NotificationDispatcher::new(config).unwrap_or_else(|err| {
        warn!("{}; printing notification instead", err);
        NotificationDispatcher::local()
    });
    debug!(
        "Dispatching notification ({})",
        if dispatcher.is_webhook() { "webhook" } else { "local" }
    );
    let mut stdout = std::io::stdout();
    let delivery = dispatcher.dispatch(message, &mut stdout).await;
    debug!("Notification delivery: {:?}", delivery);
}
