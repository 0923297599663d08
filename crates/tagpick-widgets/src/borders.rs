#![forbid(unsafe_code)]

//! Border glyph sets and outline drawing.

use tagpick_core::geometry::Rect;
use tagpick_render::cell::Cell;
use tagpick_render::frame::Frame;
use tagpick_style::Style;

use crate::apply_style;

/// Characters used to draw a box outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderSet {
    /// Rounded corners.
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    /// Square corners.
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Plain ASCII.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };
}

/// Border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    #[default]
    Rounded,
    Square,
    Ascii,
}

impl BorderType {
    /// Glyphs for this border type.
    pub const fn to_border_set(self) -> BorderSet {
        match self {
            Self::Rounded => BorderSet::ROUNDED,
            Self::Square => BorderSet::SQUARE,
            Self::Ascii => BorderSet::ASCII,
        }
    }
}

/// Draw a full outline around `area`. Areas smaller than 2x2 are skipped.
pub(crate) fn render_border(frame: &mut Frame, area: Rect, border_type: BorderType, style: Style) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let set = border_type.to_border_set();
    let cell = |c: char| {
        let mut cell = Cell::from_char(c);
        apply_style(&mut cell, style);
        cell
    };

    let right = area.right() - 1;
    let bottom = area.bottom() - 1;
    for x in area.x..area.right() {
        frame.buffer.set(x, area.y, cell(set.horizontal));
        frame.buffer.set(x, bottom, cell(set.horizontal));
    }
    for y in area.y..area.bottom() {
        frame.buffer.set(area.x, y, cell(set.vertical));
        frame.buffer.set(right, y, cell(set.vertical));
    }

    // Corners after edges so they overwrite the edge glyphs.
    frame.buffer.set(area.x, area.y, cell(set.top_left));
    frame.buffer.set(right, area.y, cell(set.top_right));
    frame.buffer.set(area.x, bottom, cell(set.bottom_left));
    frame.buffer.set(right, bottom, cell(set.bottom_right));
}
