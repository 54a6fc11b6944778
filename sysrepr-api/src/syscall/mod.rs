//! Syscall metadata model
//!
//! This module provides the OS- and arch-independent description of a
//! system call: its number, names, argument shapes and rendering contexts.

pub mod types;

// Re-export commonly used items
pub use types::{Argument, Context, Syscall};
