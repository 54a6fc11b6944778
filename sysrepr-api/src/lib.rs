//! sysrepr API
//!
//! This crate provides the core types shared across the sysrepr workspace:
//! the OS- and arch-independent syscall metadata model, the number-keyed
//! syscall table, and the common error type.
//!
//! Concrete tables are produced by external generators for a specific OS
//! and architecture; this crate only defines their in-memory shape. With the
//! `serde` feature it can also decode the generators' JSON syscall
//! descriptions directly.

#![no_std]

extern crate alloc;

pub mod error;
pub mod syscall;
pub mod table;
#[cfg(feature = "serde")]
pub mod wire;

// Re-export commonly used items
pub use error::{Error, Result};
pub use syscall::{Argument, Context, Syscall};
pub use table::SyscallTable;
