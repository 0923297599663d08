#![forbid(unsafe_code)]

//! Text helpers for tagpick widgets.
//!
//! - [`display_width`] and grapheme-aware truncation
//! - [`contains_ignore_case`] for option filtering
//! - [`WidthCache`] - LRU cache for label width measurements
//!
//! # Example
//! ```
//! use tagpick_text::{contains_ignore_case, truncate_with_ellipsis};
//!
//! assert!(contains_ignore_case("Grape", "ap"));
//! assert_eq!(truncate_with_ellipsis("Strawberry", 6, "…"), "Straw…");
//! ```

pub mod width;
pub mod width_cache;

pub use width::{
    contains_ignore_case, display_width, grapheme_byte_offset, grapheme_count, prefix_width,
    truncate_to_width, truncate_with_ellipsis,
};
pub use width_cache::{CacheStats, DEFAULT_CACHE_CAPACITY, WidthCache};
