#![forbid(unsafe_code)]

//! Tracing subscriber setup.
//!
//! The demo owns the terminal, so log records go to a file instead of
//! stderr. Filtering follows `TAGPICK_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `info`.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives.
pub const FILTER_ENV: &str = "TAGPICK_LOG";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global subscriber writing to `path`.
pub fn init(path: &Path, json: bool) -> io::Result<()> {
    let file = File::create(path)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(io::Error::other)
}
