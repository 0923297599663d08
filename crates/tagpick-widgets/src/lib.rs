#![forbid(unsafe_code)]

//! Widgets for tagpick: the `MultiSelect` tag picker and its parts.

pub mod borders;
pub mod input;
pub mod measure;
pub mod multi_select;
pub mod select_list;

pub use borders::BorderType;
pub use input::SearchInput;
pub use measure::InputWidth;
pub use multi_select::{
    DerivedOptions, FieldSize, MultiSelect, MultiSelectProps, PropsError, SelectOption,
    SelectableOption, ValueChange, annotate_active, derive_options, reconcile_active,
};
pub use select_list::{SelectList, SelectListEvent, SelectListItem, SelectListState};

use tagpick_core::geometry::Rect;
use tagpick_render::buffer::Buffer;
use tagpick_render::cell::Cell;
use tagpick_render::frame::Frame;
use tagpick_style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Frame` within a given `Rect`, and may
/// register hit regions and the cursor position on the way.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;

    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}

/// Helper to apply style to a cell.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg;
    }
    if let Some(bg) = style.bg {
        cell.bg = bg;
    }
    if let Some(attrs) = style.attrs {
        cell.attrs = cell.attrs.with_flags(attrs);
    }
}

/// Apply a style to all cells in a rectangular area.
///
/// This modifies existing cells, preserving their content.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    let area = area.intersection(&buf.current_scissor());
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Draw a text span into a frame at the given position.
///
/// Returns the x position after the last drawn character.
/// Stops at `max_x` (exclusive).
pub(crate) fn draw_text_span(
    frame: &mut Frame,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x as usize + w > max_x as usize {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            let mut cell = Cell::from_char(c);
            apply_style(&mut cell, style);
            frame.buffer.set(x, y, cell);
        }
        x = x.saturating_add(w as u16);
    }
    x
}
