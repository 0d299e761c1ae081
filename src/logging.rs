//! Browser logging setup.
//!
//! Engine code logs through the `log` facade. In the browser the records go
//! to the devtools console via `console_log`; in native tests no logger is
//! installed and the macros are no-ops.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

use log::{Level, warn};

/// Route panics and `log` records to the browser console.
///
/// Safe to call more than once; later calls leave the first logger in place.
pub fn init(level: Level) {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(level) {
        warn!("console logger already installed: {err}");
    }
}

/// Parse a level name such as `"debug"`, falling back to `Info`.
#[must_use]
pub fn parse_level(name: &str) -> Level {
    name.parse().unwrap_or(Level::Info)
}
