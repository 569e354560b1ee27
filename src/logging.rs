//! Tracing subscriber setup
//!
//! Console output is always on; a configured log file gets a second,
//! non-blocking writer. Keep the returned guard alive until shutdown or
//! buffered file lines are lost.

use std::fs::{File, OpenOptions};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::{
    config::LoggingConfig,
    error::{AppError, AppResult},
};

pub fn init(config: &LoggingConfig) -> AppResult<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("book_inventory_server={},tower_http=debug", config.level).into());

    let console = match config.format.as_str() {
        "json" => fmt::layer().json().boxed(),
        _ => fmt::layer().boxed(),
    };

    let (file_layer, guard) = match &config.file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Internal(format!("failed to install logger: {}", e)))?;

    Ok(guard)
}

fn open_log_file(path: &Path) -> AppResult<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::Config(format!("failed to create log directory \"{}\": {}", parent.display(), e))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::Config(format!("failed to open log file \"{}\": {}", path.display(), e)))
}
