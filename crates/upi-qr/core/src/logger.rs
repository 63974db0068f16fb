use std::{fs::OpenOptions, path::Path};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::UpiQrError;

pub const LOG_FILE_NAME: &str = "upi-qr.log";
const DEFAULT_LOG_FILTER: &str = "debug,rustyline=warn";

/// Installs the global subscriber, appending lines to `upi-qr.log` inside
/// `log_dir`. Fails if a global subscriber is already set.
pub fn init_logging(log_dir: &Path, log_filter: Option<String>) -> Result<(), UpiQrError> {
    let filter = log_filter.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE_NAME))?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_line_number(true)
                .with_writer(log_file),
        )
        .try_init()
        .map_err(|e| UpiQrError::Logging(e.to_string()))
}
