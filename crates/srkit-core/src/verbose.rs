//! Verbose logging for debugging srkit operations.
//!
//! Enable with `set_verbose(true)` or by exporting `SRKIT_VERBOSE=1`, then log
//! through the `verbose!()` macro. Output goes to stderr so transcripts on
//! stdout stay clean.

use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Environment variable that turns verbose output on without code changes
pub const VERBOSE_ENV: &str = "SRKIT_VERBOSE";

/// Enable or disable verbose logging
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::SeqCst);
}

/// Enable verbose logging if `SRKIT_VERBOSE` is set to a truthy value.
pub fn init_from_env() {
    if let Ok(value) = std::env::var(VERBOSE_ENV) {
        set_verbose(is_truthy(&value));
    }
}

/// Check if verbose logging is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Log a formatted message if verbose mode is enabled
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::verbose::is_verbose() {
            eprintln!("[srkit] {}", format!($($arg)*));
        }
    };
}
