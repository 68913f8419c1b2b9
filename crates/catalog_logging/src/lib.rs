#![deny(missing_docs)]
//! Shared logging utilities for the catalog browser workspace.
//!
//! Every crate logs through the `catalog_*` macros below so the backend can be
//! swapped in one place. Callers need `log` in their own dependency table.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! catalog_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a terminal logger for use in tests.
///
/// Safe to call from every test: it no-ops once a logger is installed.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
