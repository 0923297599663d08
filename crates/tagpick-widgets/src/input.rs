#![forbid(unsafe_code)]

//! Search text input.
//!
//! A single-line, grapheme-aware text field with a cursor and horizontal
//! scrolling. `MultiSelect` embeds one as its search box; it can also be
//! used on its own.

use tagpick_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use tagpick_core::geometry::Rect;
use tagpick_render::cell::{Cell, StyleFlags};
use tagpick_render::frame::Frame;
use tagpick_style::Style;
use tagpick_text::{grapheme_byte_offset, grapheme_count, prefix_width};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::Widget;

/// A single-line search input.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    /// Text value.
    value: String,
    /// Cursor position (grapheme index).
    cursor: usize,
    /// Placeholder text, shown while the value is empty.
    placeholder: String,
    style: Style,
    placeholder_style: Style,
    cursor_style: Style,
    /// Whether the input is focused (controls cursor output).
    focused: bool,
}

impl SearchInput {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial value (cursor moves to the end).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the text style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the placeholder style.
    #[must_use]
    pub fn with_placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    /// Set the cursor style. An empty style renders the cursor in reverse video.
    #[must_use]
    pub fn with_cursor_style(mut self, style: Style) -> Self {
        self.cursor_style = style;
        self
    }

    /// Set focus.
    #[must_use]
    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = grapheme_count(&self.value);
    }

    /// Clear the value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Cursor position in graphemes.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replace the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Whether the placeholder is what gets drawn.
    pub fn is_placeholder_shown(&self) -> bool {
        self.value.is_empty() && !self.placeholder.is_empty()
    }

    /// The text that currently occupies the field: the value, or the
    /// placeholder while it is shown.
    pub fn shown_text(&self) -> &str {
        if self.is_placeholder_shown() {
            &self.placeholder
        } else {
            &self.value
        }
    }

    /// Whether the input has focus.
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Set focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Insert text at the cursor. Line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let cleaned: String = text
            .chars()
            .filter(|c| *c != '\r')
            .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
            .collect();
        if cleaned.is_empty() {
            return;
        }
        let byte_offset = grapheme_byte_offset(&self.value, self.cursor);
        self.value.insert_str(byte_offset, &cleaned);
        self.cursor += grapheme_count(&cleaned);
    }

    // --- Event handling ---

    /// Handle a terminal event.
    ///
    /// Returns `true` if the event was consumed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Paste(paste) => {
                self.insert_str(&paste.text);
                true
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.ctrl() && !key.alt() => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.delete_char_back();
                true
            }
            KeyCode::Delete => {
                self.delete_char_forward();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(grapheme_count(&self.value));
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = grapheme_count(&self.value);
                true
            }
            _ => false,
        }
    }

    // --- Editing operations ---

    fn insert_char(&mut self, c: char) {
        let byte_offset = grapheme_byte_offset(&self.value, self.cursor);
        let before = grapheme_count(&self.value);
        self.value.insert(byte_offset, c);
        // A combining mark joins the previous grapheme instead of adding one.
        if grapheme_count(&self.value) > before {
            self.cursor += 1;
        }
    }

    fn delete_char_back(&mut self) {
        if self.cursor > 0 {
            let byte_start = grapheme_byte_offset(&self.value, self.cursor - 1);
            let byte_end = grapheme_byte_offset(&self.value, self.cursor);
            self.value.drain(byte_start..byte_end);
            self.cursor -= 1;
        }
    }

    fn delete_char_forward(&mut self) {
        if self.cursor < grapheme_count(&self.value) {
            let byte_start = grapheme_byte_offset(&self.value, self.cursor);
            let byte_end = grapheme_byte_offset(&self.value, self.cursor + 1);
            self.value.drain(byte_start..byte_end);
        }
    }

    /// First visible cell so the cursor stays inside `viewport_width`.
    fn scroll_for(&self, viewport_width: usize) -> usize {
        let cursor_visual = prefix_width(&self.value, self.cursor);
        if cursor_visual >= viewport_width {
            cursor_visual + 1 - viewport_width
        } else {
            0
        }
    }
}

impl Widget for SearchInput {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "SearchInput",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }

        let viewport_width = area.width as usize;
        let y = area.y;

        let (text, style, scroll) = if self.is_placeholder_shown() {
            (self.placeholder.as_str(), self.placeholder_style, 0)
        } else {
            (self.value.as_str(), self.style, self.scroll_for(viewport_width))
        };

        let mut visual_x = 0usize;
        for g in text.graphemes(true) {
            let w = UnicodeWidthStr::width(g);
            if visual_x < scroll {
                visual_x += w;
                continue;
            }
            let rel_x = visual_x - scroll;
            if rel_x + w > viewport_width {
                break;
            }
            if w > 0
                && let Some(c) = g.chars().next()
            {
                let mut cell = Cell::from_char(c);
                crate::apply_style(&mut cell, style);
                frame.buffer.set(area.x + rel_x as u16, y, cell);
            }
            visual_x += w;
        }

        if !self.focused {
            return;
        }

        let cursor_rel_x = prefix_width(&self.value, self.cursor).saturating_sub(scroll);
        if cursor_rel_x < viewport_width {
            let cursor_x = area.x + cursor_rel_x as u16;
            if let Some(cell) = frame.buffer.get_mut(cursor_x, y) {
                if self.cursor_style.is_empty() {
                    cell.attrs = cell.attrs.with_flags(cell.attrs.flags() ^ StyleFlags::REVERSE);
                } else {
                    crate::apply_style(cell, self.cursor_style);
                }
            }
            frame.set_cursor(Some((cursor_x, y)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagpick_core::event::{Modifiers, PasteEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    fn type_str(input: &mut SearchInput, s: &str) {
        for c in s.chars() {
            input.handle_event(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn empty_input() {
        let input = SearchInput::new();
        assert!(input.value().is_empty());
        assert_eq!(input.cursor(), 0);
        assert!(!input.is_placeholder_shown());
    }

    #[test]
    fn with_value_moves_cursor_to_end() {
        let input = SearchInput::new().with_value("hello");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut input = SearchInput::new();
        type_str(&mut input, "ac");
        input.handle_event(&key(KeyCode::Left));
        type_str(&mut input, "b");
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn ctrl_chars_are_not_inserted() {
        let mut input = SearchInput::new();
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('a')).with_modifiers(Modifiers::CTRL));
        assert!(!input.handle_event(&ev));
        assert!(input.value().is_empty());
    }

    #[test]
    fn backspace_and_delete() {
        let mut input = SearchInput::new().with_value("abcd");
        input.handle_event(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "abc");
        input.handle_event(&key(KeyCode::Home));
        input.handle_event(&key(KeyCode::Delete));
        assert_eq!(input.value(), "bc");
        assert_eq!(input.cursor(), 0);
        input.handle_event(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn cursor_movement_is_bounded() {
        let mut input = SearchInput::new().with_value("ab");
        input.handle_event(&key(KeyCode::Right));
        assert_eq!(input.cursor(), 2);
        input.handle_event(&key(KeyCode::Home));
        input.handle_event(&key(KeyCode::Left));
        assert_eq!(input.cursor(), 0);
        input.handle_event(&key(KeyCode::End));
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn grapheme_aware_delete() {
        let mut input = SearchInput::new().with_value("ae\u{0301}");
        assert_eq!(input.cursor(), 2);
        input.handle_event(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut input = SearchInput::new();
        input.handle_event(&Event::Paste(PasteEvent::new("a\r\nb")));
        assert_eq!(input.value(), "a b");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn placeholder_shown_only_when_empty() {
        let mut input = SearchInput::new().with_placeholder("Search");
        assert!(input.is_placeholder_shown());
        assert_eq!(input.shown_text(), "Search");
        input.insert_str("x");
        assert!(!input.is_placeholder_shown());
        assert_eq!(input.shown_text(), "x");
    }

    #[test]
    fn render_sets_cursor_when_focused() {
        let input = SearchInput::new().with_value("hi").with_focused(true);
        let mut frame = Frame::new(10, 1);
        input.render(Rect::new(3, 0, 5, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "   hi     ");
        assert_eq!(frame.cursor_position, Some((5, 0)));
    }

    #[test]
    fn render_without_focus_has_no_cursor() {
        let input = SearchInput::new().with_value("hi");
        let mut frame = Frame::new(10, 1);
        input.render(Rect::new(0, 0, 5, 1), &mut frame);
        assert_eq!(frame.cursor_position, None);
    }

    #[test]
    fn render_scrolls_to_keep_cursor_visible() {
        let input = SearchInput::new().with_value("abcdefgh").with_focused(true);
        let mut frame = Frame::new(4, 1);
        input.render(Rect::new(0, 0, 4, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "fgh ");
        assert_eq!(frame.cursor_position, Some((3, 0)));
    }

    #[test]
    fn render_placeholder() {
        let input = SearchInput::new().with_placeholder("Pick");
        let mut frame = Frame::new(6, 1);
        input.render(Rect::new(0, 0, 6, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "Pick  ");
    }
}
