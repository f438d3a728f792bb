//! Logging Infrastructure
//!
//! Logs go to stderr so stdout stays clean for JSON output, or to a daily
//! rolling file when a log directory is configured.

use std::path::Path;

use crate::core::Config;

/// Initialize the logger from configuration
pub fn init_logger(config: &Config) {
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.json_logs()),
        config.log_dir.as_deref(),
    );
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let json = json.unwrap_or(false);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "proposal-engine");
            if json {
                subscriber.json().with_writer(file_appender).init();
            } else {
                subscriber.with_ansi(false).with_writer(file_appender).init();
            }
            return;
        }
    }

    if json {
        subscriber.json().with_writer(std::io::stderr).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }
}
