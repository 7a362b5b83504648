//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "try.log";

/// Initializes the tracing subscriber with a rotating file sink.
///
/// The filter comes from `RUST_LOG` if set, else `config.trace_level`, else
/// `info`. Logs go to `<data_local_dir>/tries/try.log`; stdout carries the
/// shell script and stderr the UI, so neither is ever logged to.
///
/// Setup failures (no data dir, unwritable directory, bad filter, subscriber
/// already installed) leave tracing disabled without reporting an error.
pub fn init_tracing(config: &Config) {
    let Some(data_dir) = crate::infrastructure::get_data_dir() else {
        return;
    };
    init_tracing_in(config, &data_dir);
}

/// Same as [`init_tracing`] with an explicit log directory.
pub fn init_tracing_in(config: &Config, dir: &Path) {
    if std::fs::create_dir_all(dir).is_err() {
        return;
    }

    let Some(filter) = build_filter(config.trace_level.as_deref()) else {
        return;
    };

    let writer = FileWriter::new(dir.join(LOG_FILE_NAME));
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// `RUST_LOG`, then the configured level, then `info`.
fn build_filter(trace_level: Option<&str>) -> Option<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Some(filter);
    }
    EnvFilter::try_new(trace_level.unwrap_or("info")).ok()
}
