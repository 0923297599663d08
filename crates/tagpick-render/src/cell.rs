#![forbid(unsafe_code)]

//! Cell types.
//!
//! A `Cell` is one slot of the grid: a character, two colors, and style
//! flags. Wide characters occupy a head cell followed by `CONTINUATION`
//! cells.

use crate::char_width;

/// Cell content: a Unicode char, or one of the two sentinel values.
///
/// - `EMPTY` (0x0): nothing drawn, width 0
/// - `CONTINUATION`: tail of a wide character, width 0
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CellContent(u32);

impl CellContent {
    /// Empty cell content (no character).
    pub const EMPTY: Self = Self(0);

    /// Continuation marker for wide characters.
    ///
    /// Outside the Unicode scalar range, so it can never collide with a char.
    pub const CONTINUATION: Self = Self(0x7FFF_FFFF);

    /// Create content from a single Unicode character.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self(c as u32)
    }

    /// Check if this is a continuation cell (part of a wide character).
    #[inline]
    pub const fn is_continuation(self) -> bool {
        self.0 == Self::CONTINUATION.0
    }

    /// Check if this cell is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// Extract the character, or `None` for empty and continuation cells.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        if self.is_empty() || self.is_continuation() {
            None
        } else {
            char::from_u32(self.0)
        }
    }

    /// Display width of this content in cells.
    #[inline]
    pub fn width(self) -> usize {
        match self.as_char() {
            Some(c) => char_width(c),
            None => 0,
        }
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl core::fmt::Debug for CellContent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            write!(f, "CellContent::EMPTY")
        } else if self.is_continuation() {
            write!(f, "CellContent::CONTINUATION")
        } else if let Some(c) = self.as_char() {
            write!(f, "CellContent::Char({c:?})")
        } else {
            write!(f, "CellContent::Invalid({:#x})", self.0)
        }
    }
}

/// One grid cell.
///
/// The default cell is empty with a transparent background, white
/// foreground, and no style flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Character content.
    pub content: CellContent,
    /// Foreground color.
    pub fg: PackedRgba,
    /// Background color.
    pub bg: PackedRgba,
    /// Style flags.
    pub attrs: CellAttrs,
}

impl Cell {
    /// A continuation cell (placeholder for wide characters).
    pub const CONTINUATION: Self = Self {
        content: CellContent::CONTINUATION,
        fg: PackedRgba::TRANSPARENT,
        bg: PackedRgba::TRANSPARENT,
        attrs: CellAttrs::NONE,
    };

    /// Create a new cell with the given content and default colors.
    #[inline]
    pub const fn new(content: CellContent) -> Self {
        Self {
            content,
            fg: PackedRgba::WHITE,
            bg: PackedRgba::TRANSPARENT,
            attrs: CellAttrs::NONE,
        }
    }

    /// Create a cell from a single character.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self::new(CellContent::from_char(c))
    }

    /// Check if this is a continuation cell.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.content.is_continuation()
    }

    /// Check if this cell is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Set the foreground color.
    #[inline]
    pub const fn with_fg(mut self, fg: PackedRgba) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color.
    #[inline]
    pub const fn with_bg(mut self, bg: PackedRgba) -> Self {
        self.bg = bg;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(CellContent::EMPTY)
    }
}

/// A compact RGBA color, laid out as `0xRRGGBBAA` with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Fully transparent (alpha = 0).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque RGB color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Porter-Duff SourceOver: `self over dst`.
    #[inline]
    pub fn over(self, dst: Self) -> Self {
        let s_a = self.a() as u32;
        if s_a == 255 {
            return self;
        }
        if s_a == 0 {
            return dst;
        }
        let d_a = dst.a() as u32;
        let inv = 255 - s_a;
        let out_a = s_a + (d_a * inv + 127) / 255;
        if out_a == 0 {
            return Self::TRANSPARENT;
        }
        let blend = |s: u8, d: u8| -> u8 {
            let numer = s as u32 * s_a * 255 + d as u32 * d_a * inv;
            let denom = out_a * 255;
            ((numer + denom / 2) / denom).min(255) as u8
        };
        Self::rgba(
            blend(self.r(), dst.r()),
            blend(self.g(), dst.g()),
            blend(self.b(), dst.b()),
            out_a.min(255) as u8,
        )
    }
}

bitflags::bitflags! {
    /// 8-bit cell style flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD          = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Reverse video (swap fg/bg).
        const REVERSE       = 0b0010_0000;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0100_0000;
    }
}

/// Cell attributes (style flags only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CellAttrs(StyleFlags);

impl Default for CellAttrs {
    fn default() -> Self {
        Self::NONE
    }
}

impl CellAttrs {
    /// No attributes.
    pub const NONE: Self = Self(StyleFlags::empty());

    /// Create attributes from flags.
    #[inline]
    pub const fn new(flags: StyleFlags) -> Self {
        Self(flags)
    }

    /// Extract the style flags.
    #[inline]
    pub const fn flags(self) -> StyleFlags {
        self.0
    }

    /// Return a copy with different style flags.
    #[inline]
    pub const fn with_flags(self, flags: StyleFlags) -> Self {
        Self(flags)
    }

    /// Check whether a specific flag is set.
    #[inline]
    pub fn has_flag(self, flag: StyleFlags) -> bool {
        self.0.contains(flag)
    }
}
