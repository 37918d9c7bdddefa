#![deny(missing_docs)]
//! Shared logging utilities for the worklist workspace.
//!
//! This crate provides the `batch_*` logging macros used across the codebase
//! and the `simplelog` initializers for the console binary and for tests.

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! batch_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! batch_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! batch_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! batch_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! batch_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

/// Initializes the terminal logger for the console binary.
///
/// This safely no-ops if a logger has already been initialized.
pub fn initialize_terminal() {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        build_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
