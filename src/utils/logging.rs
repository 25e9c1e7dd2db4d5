//! Logging initialization.

use std::env;

use env_logger::Builder;
use log::LevelFilter;

use crate::error::TradingError;

/// Initialize the logger from the `RUST_LOG` environment variable,
/// defaulting to info.
pub fn init() -> Result<(), TradingError> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let level_filter = match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    Builder::from_default_env()
        .filter_level(level_filter)
        .format_timestamp_millis()
        .init();

    Ok(())
}
