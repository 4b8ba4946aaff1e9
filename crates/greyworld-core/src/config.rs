//! Pipeline defaults and the global verbose flag.
//!
//! Defaults are compiled in and overridden per call; nothing is read from
//! disk or the environment.

use std::sync::atomic::{AtomicBool, Ordering};

/// Display gamma assumed when the caller does not supply one.
pub const DEFAULT_GAMMA: f32 = 2.2;

/// Exponent of the Minkowski mean used for illuminant estimation.
pub const MINKOWSKI_P: i32 = 3;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}
