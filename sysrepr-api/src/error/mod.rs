//! Error handling module for the sysrepr workspace

use alloc::string::String;
use core::fmt;

/// Common error type used throughout the sysrepr workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested syscall number or entry point has no table record
    NotFound(String),
    /// Fewer argument values were supplied than the syscall declares
    Arity { expected: usize, supplied: usize },
    /// A context handler reported a formatting failure
    Handler(String),
    /// Wire format decoding failure
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::Arity { expected, supplied } => write!(
                f,
                "Invalid number of arguments: expected at least {}, got {}",
                expected, supplied
            ),
            Error::Handler(msg) => write!(f, "Handler error: {}", msg),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

/// Result type for operations that can fail
pub type Result<T> = core::result::Result<T, Error>;
