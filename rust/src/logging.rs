//! Logging macros with verbosity level control.
//!
//! Logging is free when disabled (verbosity=0) apart from one comparison.
//! Levels:
//! - 0: SILENT (nothing)
//! - 1: SUMMARY (one line per finished query or selection)
//! - 2: DECISIONS (relaxations, greedy accept/skip, DP inclusions)
//! - 3: TRACE (frontier pops, stale discards, DP row fills)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_SUMMARY: u8 = 1;
pub const VERBOSITY_DECISIONS: u8 = 2;
pub const VERBOSITY_TRACE: u8 = 3;

/// Log at SUMMARY level (verbosity >= 1).
#[macro_export]
macro_rules! log_summary {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_SUMMARY {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DECISIONS level (verbosity >= 2).
///
/// Used for: distance improvements, items accepted or skipped.
#[macro_export]
macro_rules! log_decisions {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DECISIONS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at TRACE level (verbosity >= 3).
#[macro_export]
macro_rules! log_trace {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_TRACE {
            eprintln!($($arg)*);
        }
    };
}
