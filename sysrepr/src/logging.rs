//! Unified logging support for sysrepr
//!
//! This module provides logging macros that compile away when the `log`
//! feature is disabled, without requiring repetitive #[cfg] attributes
//! throughout the codebase.

/// Unified trace-level logging
#[macro_export]
macro_rules! sc_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
    }
}

/// Unified debug-level logging
#[macro_export]
macro_rules! sc_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
    }
}

/// Unified warn-level logging
#[macro_export]
macro_rules! sc_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::warn!($($arg)*);
    }
}
