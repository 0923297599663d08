#![forbid(unsafe_code)]

//! Partial cell style.

use tagpick_render::cell::{PackedRgba, StyleFlags};

/// A partial style: every field is optional, and unset fields leave the
/// underlying cell untouched when applied.
///
/// # Example
///
/// ```
/// use tagpick_render::cell::PackedRgba;
/// use tagpick_style::Style;
///
/// let base = Style::new().fg(PackedRgba::rgb(200, 200, 200));
/// let accent = Style::new().bold();
/// let merged = accent.merge(&base);
/// assert_eq!(merged.fg, Some(PackedRgba::rgb(200, 200, 200)));
/// assert!(merged.has_attr(tagpick_render::cell::StyleFlags::BOLD));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<PackedRgba>,
    /// Background color.
    pub bg: Option<PackedRgba>,
    /// Text attributes.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// An empty style.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[inline]
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[inline]
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags.
    #[must_use]
    pub fn attrs(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or(StyleFlags::empty()) | flags);
        self
    }

    /// Add bold.
    #[must_use]
    pub fn bold(self) -> Self {
        self.attrs(StyleFlags::BOLD)
    }

    /// Add dim.
    #[must_use]
    pub fn dim(self) -> Self {
        self.attrs(StyleFlags::DIM)
    }

    /// Add italic.
    #[must_use]
    pub fn italic(self) -> Self {
        self.attrs(StyleFlags::ITALIC)
    }

    /// Add underline.
    #[must_use]
    pub fn underline(self) -> Self {
        self.attrs(StyleFlags::UNDERLINE)
    }

    /// Add reverse video.
    #[must_use]
    pub fn reverse(self) -> Self {
        self.attrs(StyleFlags::REVERSE)
    }

    /// Whether no field is set.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Whether the given attribute is set.
    pub fn has_attr(&self, flag: StyleFlags) -> bool {
        self.attrs.is_some_and(|a| a.contains(flag))
    }

    /// Layer `self` over `parent`: colors set here win, attributes combine.
    #[must_use]
    pub fn merge(&self, parent: &Style) -> Style {
        let attrs = match (self.attrs, parent.attrs) {
            (Some(a), Some(b)) => Some(a | b),
            (a, b) => a.or(b),
        };
        Style {
            fg: self.fg.or(parent.fg),
            bg: self.bg.or(parent.bg),
            attrs,
        }
    }
}
