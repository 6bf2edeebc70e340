use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "edu-ai.log";

/// Keeps the non-blocking file writer flushing until dropped.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

/// Where (and whether) request logs are mirrored to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLogSettings {
    pub enabled: bool,
    pub directory: PathBuf,
}

impl FileLogSettings {
    pub fn from_env() -> Self {
        let enabled = std::env::var("ENABLE_FILE_LOGS")
            .map(|v| matches!(v.trim(), "true" | "1"))
            .unwrap_or(false);
        let directory = std::env::var("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./logs"));

        Self { enabled, directory }
    }
}

/// Installs the global subscriber: stdout always, plus a daily rolling file
/// when enabled and the directory can be created.
pub fn init_tracing(log_level: &str) -> Option<FileLogGuard> {
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let settings = FileLogSettings::from_env();

    let (file_layer, guard) = match open_log_file(&settings) {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(FileLogGuard { _guard: guard }))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .init();

    guard
}

fn open_log_file(
    settings: &FileLogSettings,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if !settings.enabled {
        return None;
    }
    if let Err(err) = std::fs::create_dir_all(&settings.directory) {
        eprintln!(
            "failed to create log directory {}: {err}",
            settings.directory.display()
        );
        return None;
    }

    let appender = RollingFileAppender::new(Rotation::DAILY, &settings.directory, LOG_FILE_PREFIX);
    Some(tracing_appender::non_blocking(appender))
}
