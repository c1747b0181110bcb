#![deny(missing_docs)]
//! Shared logging initialization for the carddex workspace.
//!
//! The engine and the CLI log through the `log` facade; this crate owns
//! the single place where a concrete logger is installed.

use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

/// Installs a terminal logger for the CLI.
///
/// `verbose` raises the level from info to debug. Calling this twice is
/// harmless; the second call is ignored.
pub fn init_terminal(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
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
