#![forbid(unsafe_code)]

//! Input width measurement.
//!
//! The search field grows with its content: it takes the display width of
//! its text plus one cell for the caret, but never more than the container
//! it sits in.

use tagpick_text::{CacheStats, WidthCache};

/// Tracks the content width of the search field.
#[derive(Debug)]
pub struct InputWidth {
    cache: WidthCache,
    content: usize,
}

impl Default for InputWidth {
    fn default() -> Self {
        Self::new()
    }
}

impl InputWidth {
    /// Cells reserved for the caret after the text.
    pub const CARET: usize = 1;

    /// Create a tracker with a small width cache.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a tracker with the given cache capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: WidthCache::new(capacity),
            content: 0,
        }
    }

    /// Measure `text` and remember it as the current content.
    pub fn update(&mut self, text: &str) -> usize {
        self.content = self.cache.get_or_compute(text);
        self.content
    }

    /// Width of the last measured content, without the caret.
    pub fn content_width(&self) -> usize {
        self.content
    }

    /// Field width inside a container `container_width` cells wide.
    pub fn resolve(&self, container_width: u16) -> u16 {
        let wanted = self.content.saturating_add(Self::CARET);
        wanted.min(container_width as usize) as u16
    }

    /// Measure `text` and resolve against the container in one step.
    pub fn measure(&mut self, text: &str, container_width: u16) -> u16 {
        self.update(text);
        self.resolve(container_width)
    }

    /// Cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
