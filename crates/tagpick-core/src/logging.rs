#![forbid(unsafe_code)]

//! Tracing shims.
//!
//! Widgets report state changes (focus, commits, chip removal) through
//! [`debug!`](crate::debug) and wrap rendering in
//! [`debug_span!`](crate::debug_span). With the `tracing` feature these are
//! the `tracing` macros; without it they expand to nothing and a
//! [`NoopSpan`], so call sites need no `cfg` of their own.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span};

#[cfg(not(feature = "tracing"))]
mod noop {
    /// Discards its arguments.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Evaluates to a [`NoopSpan`](crate::logging::NoopSpan).
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// What `debug_span!` yields without the `tracing` feature.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }

    pub fn entered(self) -> NoopGuard {
        NoopGuard
    }
}

/// Held for the lifetime of an entered [`NoopSpan`].
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;

#[cfg(all(test, not(feature = "tracing")))]
mod tests {
    #[test]
    fn shims_accept_tracing_syntax() {
        let name = "colors";
        crate::debug!(name = %name, label = "Red", "value added");
        let _guard = crate::debug_span!("widget_render", widget = "MultiSelect", x = 0u16).entered();
    }
}
