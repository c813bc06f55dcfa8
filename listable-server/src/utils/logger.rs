//! Logging Infrastructure
//!
//! Structured logging setup: `RUST_LOG` wins, otherwise the configured level.
//! With a log directory the output goes to a daily rolling file instead of stdout.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional JSON format and file output
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "listable_server={level},shared={level},http_access={level},warn"
        ))
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    let file_dir = log_dir
        .map(Path::new)
        .filter(|p| p.is_dir())
        .and_then(|p| p.to_str());

    match (file_dir, json) {
        (Some(dir), true) => {
            let file_appender = tracing_appender::rolling::daily(dir, "listable-server");
            subscriber.json().with_writer(file_appender).init();
        }
        (Some(dir), false) => {
            let file_appender = tracing_appender::rolling::daily(dir, "listable-server");
            subscriber.with_ansi(false).with_writer(file_appender).init();
        }
        (None, true) => subscriber.json().init(),
        (None, false) => subscriber.init(),
    }
}
