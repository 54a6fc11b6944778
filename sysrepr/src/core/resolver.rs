//! Syscall resolver
//!
//! This module provides read-only lookup of syscall metadata from a syscall
//! table, by number or by entry point.

use alloc::format;

use sysrepr_api::{Error, Result, Syscall, SyscallTable};

/// Read-only accessor over one syscall table.
///
/// A resolver borrows its table instead of copying it; tables can be large
/// and are immutable once built, so one table can back any number of
/// resolvers and concurrent lookups.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'t> {
    table: &'t SyscallTable,
}

impl<'t> Resolver<'t> {
    /// Creates a resolver for the given syscall table
    pub fn new(table: &'t SyscallTable) -> Self {
        Self { table }
    }

    /// Returns the syscall whose number matches `num`
    pub fn syscall(&self, num: u32) -> Result<&'t Syscall> {
        crate::sc_trace!("resolving syscall number {}", num);
        self.table
            .get(num)
            .ok_or_else(|| Error::NotFound(format!("unknown syscall number {}", num)))
    }

    /// Returns the first syscall whose entry point matches `entry`.
    ///
    /// The scan runs in table-iteration order, which is unspecified. When
    /// several records share an entry point the returned record is
    /// arbitrary; source data must keep entry points unique where
    /// determinism matters.
    pub fn syscall_by_entry(&self, entry: &str) -> Result<&'t Syscall> {
        crate::sc_trace!("resolving syscall entry point {:?}", entry);
        self.table
            .iter()
            .find(|syscall| syscall.entry == entry)
            .ok_or_else(|| Error::NotFound(format!("unknown syscall entry point {:?}", entry)))
    }
}
