#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, frames, and terminal presentation.

pub mod buffer;
pub mod cell;
pub mod frame;
#[cfg(feature = "crossterm")]
pub mod presenter;

/// Display width of a single char in terminal cells.
///
/// Control characters and zero-width code points report 0.
#[inline]
pub fn char_width(c: char) -> usize {
    if c.is_ascii() {
        return if (' '..='~').contains(&c) { 1 } else { 0 };
    }
    unicode_width::UnicodeWidthChar::width(c).unwrap_or(0)
}
