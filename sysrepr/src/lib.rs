//! sysrepr
//!
//! This crate resolves OS-specific syscall numbers and entry points to
//! structured metadata and renders contextualized textual representations of
//! syscall invocations, the way an strace-like tool prints them.
//!
//! # Architecture
//!
//! The crate is organized into two functional domains:
//!
//! - **Core**: the table-scoped resolver, the context handler registry and
//!   the call renderer
//! - **Logging**: feature-gated logging macros shared by the core modules
//!
//! Syscall tables come from an external generator for a specific OS and
//! architecture; the crate only consumes the populated [`SyscallTable`].
//!
//! # Usage
//!
//! ```rust
//! use sysrepr::{
//!     Argument, Context, OutputFlags, Resolver, Syscall, SyscallCall, SyscallTable,
//! };
//!
//! let table: SyscallTable = [Syscall {
//!     num: 3,
//!     name: "read".into(),
//!     entry: "sys_read".into(),
//!     ret_context: Context::None,
//!     args: vec![
//!         Argument {
//!             ref_count: 0,
//!             sig: "unsigned int fd".into(),
//!             context: Context::FileDescriptor,
//!         },
//!         Argument {
//!             ref_count: 1,
//!             sig: "char *buf".into(),
//!             context: Context::None,
//!         },
//!         Argument {
//!             ref_count: 0,
//!             sig: "size_t count".into(),
//!             context: Context::None,
//!         },
//!     ],
//! }]
//! .into_iter()
//! .collect();
//!
//! let resolver = Resolver::new(&table);
//! let syscall = resolver.syscall(3)?;
//! let call = SyscallCall::new(syscall, 4, &[1, 2, 3])?;
//! assert_eq!(
//!     call.output(OutputFlags::RETURN_VALUE)?,
//!     "read(1, 0x00000002, 0x00000003) = 0x00000004"
//! );
//! # Ok::<(), sysrepr::Error>(())
//! ```

#![no_std]

extern crate alloc;

pub mod core;
pub mod logging;

// Re-export commonly used items
pub use self::core::{
    ContextHandler, ContextRegistry, OutputFlags, Resolver, SyscallCall, default_repr,
};
pub use sysrepr_api::{Argument, Context, Error, Result, Syscall, SyscallTable};
