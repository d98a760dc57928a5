//! Logger - Tracing Subscriber Setup
//!
//! Console output is always enabled. A daily rolling file is added in the
//! data directory when `log.file` is set in the configuration.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::domain::config::LogConfig;
use crate::helpers::get_or_create_data_dir;

const LOG_FILE_PREFIX: &str = "pricing-gui";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 7;

/// Build the filter: `RUST_LOG` wins over the configured level
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging.
///
/// The returned guard flushes the file writer; keep it alive until exit.
pub fn init_logging(config: &LogConfig) -> Option<WorkerGuard> {
    let mut layers = vec![fmt::layer().compact().with_target(false).boxed()];
    let mut guard = None;

    if config.file {
        let appender = get_or_create_data_dir().ok().and_then(|dir| {
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(MAX_LOG_FILES)
                .build(dir)
                .ok()
        });

        if let Some(appender) = appender {
            let (non_blocking, g) = tracing_appender::non_blocking(appender);
            layers.push(fmt::layer().with_writer(non_blocking).with_ansi(false).boxed());
            guard = Some(g);
        }
    }

    let file_enabled = guard.is_some();
    if tracing_subscriber::registry()
        .with(build_env_filter(config))
        .with(layers)
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already set");
    }

    if config.file && !file_enabled {
        tracing::warn!("Log file requested but the data directory is not writable");
    }

    guard
}
