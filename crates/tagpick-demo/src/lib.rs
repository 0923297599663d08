#![forbid(unsafe_code)]

//! tagpick demo host.
//!
//! A full-screen terminal program around one `MultiSelect`. The modules are
//! public so the screen logic can be exercised without a terminal.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod logging;
pub mod session;
