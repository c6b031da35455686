use std::io;
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};

/// File name prefix of the daily log files, e.g. `app.2026-10-19`
pub const LOG_FILE_PREFIX: &str = "app";

/// Writer for a log file in `log_dir` that rolls over every day.
///
/// Lines are written from a background thread. The returned guard flushes
/// pending lines when dropped, so it has to live as long as the subscriber.
pub fn file_log_writer(log_dir: &Path) -> io::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}
