//! Wire format for generated syscall descriptions
//!
//! This module decodes the JSON documents produced by the table generators:
//! an array of records shaped like
//! `{Num, Name, Entry, Context, Args: [{RefCount, Sig, Context}]}`.
//! The context string `"FD"` maps to [`Context::FileDescriptor`]; any other
//! string, including the empty one, maps to [`Context::None`]. Generators
//! historically emitted lowercase keys and the decoder accepted both
//! spellings, so every field also carries its lowercase alias.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::syscall::{Argument, Context, Syscall};
use crate::table::SyscallTable;

impl<'de> Deserialize<'de> for Context {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "FD" => Context::FileDescriptor,
            _ => Context::None,
        })
    }
}

/// Argument record as emitted by the generators.
#[derive(Deserialize)]
struct WireArgument {
    #[serde(rename = "RefCount", alias = "refcount", default)]
    ref_count: u32,
    #[serde(rename = "Sig", alias = "sig", default)]
    sig: String,
    #[serde(rename = "Context", alias = "context", default)]
    context: Context,
}

impl From<WireArgument> for Argument {
    fn from(wire: WireArgument) -> Self {
        Argument {
            ref_count: wire.ref_count,
            sig: wire.sig,
            context: wire.context,
        }
    }
}

/// Syscall record as emitted by the generators.
///
/// The top-level `Context` field describes the return value.
#[derive(Deserialize)]
struct WireSyscall {
    #[serde(rename = "Num", alias = "num")]
    num: u32,
    #[serde(rename = "Name", alias = "name", default)]
    name: String,
    #[serde(rename = "Entry", alias = "entry", default)]
    entry: String,
    #[serde(rename = "Context", alias = "context", default)]
    ret_context: Context,
    #[serde(rename = "Args", alias = "args", default)]
    args: Vec<WireArgument>,
}

impl From<WireSyscall> for Syscall {
    fn from(wire: WireSyscall) -> Self {
        Syscall {
            num: wire.num,
            name: wire.name,
            entry: wire.entry,
            ret_context: wire.ret_context,
            args: wire.args.into_iter().map(Argument::from).collect(),
        }
    }
}

impl SyscallTable {
    /// Builds a table from a generated JSON syscall description document.
    ///
    /// When a number occurs more than once, the last record wins, matching
    /// [`SyscallTable::insert`].
    pub fn from_json(data: &str) -> Result<Self> {
        let records: Vec<WireSyscall> =
            serde_json::from_str(data).map_err(|err| Error::Parse(err.to_string()))?;
        Ok(records.into_iter().map(Syscall::from).collect())
    }
}
