#![forbid(unsafe_code)]

//! Core: input events, geometry, and logging shims shared by every tagpick crate.

pub mod event;
pub mod geometry;
pub mod logging;

#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span};
