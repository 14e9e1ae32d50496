//! Logging Infrastructure
//!
//! Structured logging with an `EnvFilter` and an optional daily rolling file.

use std::path::Path;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "room_service=info,tower_http=info";

/// Initialize the logger with optional file output
///
/// `filter` uses `RUST_LOG` syntax; an invalid filter falls back to the default.
/// The file appender is only attached when `log_dir` exists.
pub fn init_logger(filter: Option<&str>, log_dir: Option<&str>) {
    let filter = filter
        .and_then(|f| EnvFilter::try_new(f).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "room-service");
            let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
            return;
        }
        eprintln!("LOG_DIR {dir} does not exist, logging to stdout");
    }

    let _ = subscriber.try_init();
}
