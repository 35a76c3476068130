//! Logging initialization for toolwrap

use std::env;

/// Parse a level string into a filter, defaulting noisy input to `Info`.
fn parse_level(level_str: &str) -> log::LevelFilter {
    match level_str {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        _ => log::LevelFilter::Info,
    }
}

/// Initialize logging at an explicit level.
///
/// Repeated initialization is tolerated so tests and embedding applications
/// can call this unconditionally.
pub fn init_with_level(level_str: &str) {
    let _ = env_logger::Builder::new()
        .filter_level(parse_level(level_str))
        .format_timestamp(None)
        .try_init();
}

/// Initialize logging from the `TOOLWRAP_LOG` environment variable.
///
/// Defaults to `warn`; the library itself only logs the causes of folded
/// failures, at `debug` level.
pub fn init() {
    let level = env::var("TOOLWRAP_LOG").unwrap_or_else(|_| "warn".to_string());
    init_with_level(&level);
}
