//! Logging setup for the command-line binary.

use log::LevelFilter;
use std::env;

/// Environment variable that switches on debug logging
pub const DEBUG_ENV: &str = "LETTER_BOXED_DEBUG";

/// Initialize `env_logger`.
///
/// Logs at `Info` by default and `Debug` when `debug_enabled` is set or
/// [`DEBUG_ENV`] is present. An explicit `RUST_LOG` overrides both. Calling it
/// twice is harmless; the second call is ignored.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled || env::var_os(DEBUG_ENV).is_some() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
