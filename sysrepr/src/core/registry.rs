//! Context handler registry
//!
//! This module provides the registry mapping rendering contexts to handler
//! functions, plus the built-in fallback representation used when no
//! handler is registered.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;

use hashbrown::HashMap;

use sysrepr_api::{Context, Result};

/// Rendering function for one context.
///
/// Takes the raw value and returns its textual representation. A handler
/// may fail; its failure aborts the rendering of the whole call.
pub type ContextHandler = Box<dyn Fn(u64) -> Result<String> + Send + Sync>;

/// Registry mapping contexts to rendering handlers.
///
/// Two registries matter to a call rendering: the application's default
/// registry, created during single-threaded setup and referenced explicitly
/// for the rest of the process lifetime, and an optional per-call override
/// registry. Handler resolution checks the per-call registry first, then
/// the default registry, then falls back to [`default_repr`].
///
/// The registry itself is unsynchronized; an application that must mutate a
/// shared registry while rendering wraps it in its own lock.
#[derive(Default)]
pub struct ContextRegistry {
    handlers: HashMap<Context, ContextHandler>,
}

/// Handlers are opaque functions, so only the registered contexts show.
impl core::fmt::Debug for ContextRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

impl ContextRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` for `context`, replacing any previous handler
    /// for the same context.
    pub fn handle<F>(&mut self, context: Context, handler: F)
    where
        F: Fn(u64) -> Result<String> + Send + Sync + 'static,
    {
        crate::sc_debug!("registering context handler for {:?}", context);
        self.handlers.insert(context, Box::new(handler));
    }

    /// Returns the handler registered for `context`, if any
    pub fn get(&self, context: Context) -> Option<&ContextHandler> {
        self.handlers.get(&context)
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handler is registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Renders `value` with this registry's handler for `context`, falling
    /// back to [`default_repr`] when none is registered.
    pub fn render(&self, value: u64, context: Context) -> Result<String> {
        match self.get(context) {
            Some(handler) => handler(value),
            None => Ok(default_repr(value, context)),
        }
    }
}

/// Built-in representation of a value under a context.
///
/// File descriptors render as plain decimal digits; every other context
/// renders the low 32 bits of the value as `0x` followed by exactly eight
/// zero-padded lowercase hex digits. The 8-digit width is the historical
/// small-integer syscall convention and is part of the observable output
/// contract; values wider than 32 bits still print only the low-order
/// digits.
pub fn default_repr(value: u64, context: Context) -> String {
    match context {
        Context::FileDescriptor => format!("{}", value),
        _ => format!("{:#010x}", value & 0xffff_ffff),
    }
}
