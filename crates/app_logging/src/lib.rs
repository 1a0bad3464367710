#![deny(missing_docs)]
//! Shared logging utilities for the Overwatch workspace.
//!
//! This crate provides the `app_*` logging macros used across the codebase
//! and the initializers for the global logger (one for the binary, one for
//! tests).

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! app_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! app_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! app_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! app_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! app_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes the terminal logger for the application binary.
///
/// The level comes from the `OVERWATCH_LOG` environment variable
/// (`trace`/`debug`/`info`/`warn`/`error`/`off`), defaulting to `info`
/// when unset or unparseable.
pub fn initialize() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = std::env::var("OVERWATCH_LOG")
        .ok()
        .and_then(|raw| raw.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);

    // Ignore the error if a logger was already installed.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
