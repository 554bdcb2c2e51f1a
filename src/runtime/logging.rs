use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{self, LogSettings};

/// Install the global subscriber writing to the log file. The terminal is
/// owned by the TUI, so nothing is logged to stdout.
///
/// `RUST_LOG` overrides `log.level`. The returned guard flushes pending
/// lines on drop and must outlive the event loop.
pub fn init(settings: &LogSettings) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let path = settings
        .file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(config::default_log_path);

    let dir = path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "soundshelf.log".into());
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;

    Ok(guard)
}
