//! Syscall call rendering
//!
//! This module binds resolved syscall metadata to concrete argument and
//! return values and produces the display string.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use bitflags::bitflags;

use sysrepr_api::{Context, Error, Result, Syscall};

use super::registry::{ContextRegistry, default_repr};

bitflags! {
    /// Output options for a rendered call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct OutputFlags: u32 {
        /// Append the rendered return value to the call
        const RETURN_VALUE = 1 << 0;
    }
}

/// A syscall invocation bound to concrete values, ready for rendering.
///
/// The rendering itself is a pure computation over the bound values: the
/// same call renders to the same string every time. The default registry
/// and a per-call override registry may be attached between construction
/// and rendering; each value resolves its handler as per-call override
/// first, then attached defaults, then the built-in representation.
pub struct SyscallCall<'t> {
    syscall: &'t Syscall,
    ret: u64,
    args: Vec<u64>,
    defaults: Option<&'t ContextRegistry>,
    overrides: Option<ContextRegistry>,
}

impl<'t> SyscallCall<'t> {
    /// Binds `syscall` to a return value and concrete argument values.
    ///
    /// `args` must hold at least as many values as the syscall declares.
    /// Extra trailing values are accepted and ignored, so callers may pass
    /// a fixed-width register vector regardless of the actual arity.
    pub fn new(syscall: &'t Syscall, ret: u64, args: &[u64]) -> Result<Self> {
        if args.len() < syscall.arity() {
            return Err(Error::Arity {
                expected: syscall.arity(),
                supplied: args.len(),
            });
        }
        Ok(Self {
            syscall,
            ret,
            args: args[..syscall.arity()].to_vec(),
            defaults: None,
            overrides: None,
        })
    }

    /// Attaches the application's default context registry.
    ///
    /// The default registry is built during single-threaded setup and
    /// referenced explicitly here rather than living in hidden process
    /// state.
    pub fn set_defaults(&mut self, registry: &'t ContextRegistry) {
        self.defaults = Some(registry);
    }

    /// Attaches a per-call override registry.
    ///
    /// Handlers in this registry win over same-context handlers in the
    /// attached default registry.
    pub fn set_registry(&mut self, registry: ContextRegistry) {
        self.overrides = Some(registry);
    }

    /// The syscall metadata this call is bound to
    pub fn syscall(&self) -> &Syscall {
        self.syscall
    }

    /// Renders the call.
    ///
    /// Produces `name(a0, a1, ..., an-1)`, with a zero-argument call
    /// rendering as `name()`. With [`OutputFlags::RETURN_VALUE`] the
    /// rendered return value is appended as ` = value`. If any handler
    /// fails the whole rendering fails; no partial string is returned.
    pub fn output(&self, flags: OutputFlags) -> Result<String> {
        let mut out = String::new();
        out.push_str(&self.syscall.name);
        out.push('(');
        for (i, arg) in self.syscall.args.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&self.render_value(self.args[i], arg.context)?);
        }
        out.push(')');
        if flags.contains(OutputFlags::RETURN_VALUE) {
            out.push_str(" = ");
            out.push_str(&self.render_value(self.ret, self.syscall.ret_context)?);
        }
        Ok(out)
    }

    /// Renders one value through the handler fallback chain.
    fn render_value(&self, value: u64, context: Context) -> Result<String> {
        if let Some(handler) = self.overrides.as_ref().and_then(|r| r.get(context)) {
            return handler(value);
        }
        if let Some(handler) = self.defaults.and_then(|r| r.get(context)) {
            return handler(value);
        }
        Ok(default_repr(value, context))
    }
}

impl fmt::Debug for SyscallCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyscallCall")
            .field("syscall", &self.syscall.num)
            .field("ret", &self.ret)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// Infallible full rendering, for contexts where an error cannot surface
/// (automatic string coercion, log interpolation).
///
/// Renders the call including its return value and substitutes the empty
/// string if any handler fails. This is the one place a rendering failure
/// is deliberately swallowed; callers that can propagate errors must use
/// [`SyscallCall::output`].
impl fmt::Display for SyscallCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.output(OutputFlags::RETURN_VALUE) {
            Ok(out) => f.write_str(&out),
            Err(_err) => {
                crate::sc_warn!("swallowing call rendering failure: {}", _err);
                Ok(())
            }
        }
    }
}
