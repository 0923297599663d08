#![forbid(unsafe_code)]

//! Selectable option rows.
//!
//! [`SelectListItem`] draws one option row from its flags; it owns no
//! state. [`SelectList`] lays rows out vertically, keeps the active row in
//! the viewport, and registers one hit region per visible row so a click can
//! be mapped back to a label through [`SelectListState::handle_mouse`].
//!
//! # Hover rule
//!
//! A hovered row gets the hover highlight only when no sibling row is
//! active, so the keyboard cursor and the pointer never highlight two rows
//! at once. Hovering a selected row keeps the selected look.

use tagpick_core::event::{MouseButton, MouseEvent, MouseEventKind};
use tagpick_core::geometry::Rect;
use tagpick_render::frame::{Frame, HitData, HitId, HitRegion};
use tagpick_style::{SelectStyle, Style};
use tagpick_text::{display_width, truncate_with_ellipsis};

use crate::multi_select::{FieldSize, SelectableOption};
use crate::{StatefulWidget, Widget, draw_text_span, set_style_area};

/// Glyph drawn at the right edge of selected rows.
const CHECK_MARK: &str = "✓";

/// Rows moved per wheel notch.
const WHEEL_LINES: usize = 1;

/// One option row.
#[derive(Debug, Clone, Copy)]
pub struct SelectListItem<'a> {
    label: &'a str,
    selected: bool,
    active: bool,
    has_active: bool,
    hovered: bool,
    size: FieldSize,
    theme: &'a SelectStyle,
}

impl<'a> SelectListItem<'a> {
    /// A neutral row.
    pub fn new(label: &'a str, theme: &'a SelectStyle) -> Self {
        Self {
            label,
            selected: false,
            active: false,
            has_active: false,
            hovered: false,
            size: FieldSize::Normal,
            theme,
        }
    }

    /// A row mirroring the flags of a derived option.
    pub fn from_option(option: &'a SelectableOption, theme: &'a SelectStyle) -> Self {
        Self::new(&option.label, theme)
            .selected(option.selected)
            .active(option.active)
            .has_active(option.has_active)
    }

    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Whether some row in the same list is active.
    #[must_use]
    pub fn has_active(mut self, has_active: bool) -> Self {
        self.has_active = has_active;
        self
    }

    #[must_use]
    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    #[must_use]
    pub fn size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    /// Row label.
    pub fn label(&self) -> &str {
        self.label
    }

    /// Whether the hover highlight is drawn.
    pub fn shows_hover(&self) -> bool {
        self.hovered && !self.selected && !self.has_active
    }

    /// Effective row style after layering selected, active, and hover looks.
    pub fn resolved_style(&self) -> Style {
        let mut style = self.theme.item;
        if self.selected {
            style = self.theme.item_selected.merge(&style);
        }
        if self.active {
            style = self.theme.item_active.merge(&style);
        }
        if self.shows_hover() {
            style = self.theme.item_hover.merge(&style);
        }
        style
    }
}

impl Widget for SelectListItem<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let row = area.row(0);
        let style = self.resolved_style();
        set_style_area(&mut frame.buffer, row, style);

        let pad = self.size.padding();
        let check_w = if self.selected {
            display_width(CHECK_MARK) as u16 + 1
        } else {
            0
        };
        let label_x = row.x.saturating_add(pad);
        let label_end = row.right().saturating_sub(pad).saturating_sub(check_w);
        if label_end > label_x {
            let text = truncate_with_ellipsis(self.label, (label_end - label_x) as usize, "…");
            draw_text_span(frame, label_x, row.y, &text, style, label_end);
        }

        if self.selected {
            let check_x = row.right().saturating_sub(pad).saturating_sub(1);
            if check_x >= label_x {
                let check_style = self.theme.check.merge(&style);
                draw_text_span(frame, check_x, row.y, CHECK_MARK, check_style, row.right());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// Vertical list of option rows.
#[derive(Debug, Clone, Copy)]
pub struct SelectList<'a> {
    items: &'a [SelectableOption],
    theme: &'a SelectStyle,
    size: FieldSize,
    hit_id: Option<HitId>,
}

impl<'a> SelectList<'a> {
    pub fn new(items: &'a [SelectableOption], theme: &'a SelectStyle) -> Self {
        Self {
            items,
            theme,
            size: FieldSize::Normal,
            hit_id: None,
        }
    }

    #[must_use]
    pub fn size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    /// Set a hit ID; each visible row then registers `HitRegion::Content`
    /// with `data = row index`.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }
}

/// Scroll and hover state for a [`SelectList`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectListState {
    /// Index of the first visible row.
    pub offset: usize,
    /// Row under the pointer, if any.
    pub hovered: Option<usize>,
}

/// Outcome of routing a mouse event to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectListEvent {
    /// A row was clicked.
    Select(String),
    /// The hovered row changed.
    Hovered(Option<usize>),
    /// The viewport scrolled.
    Scrolled,
    /// Nothing happened.
    Ignored,
}

impl SelectListState {
    /// Adjust the offset so `index` lies within a viewport of `viewport` rows.
    pub fn ensure_visible(&mut self, index: Option<usize>, viewport: usize) {
        let Some(index) = index else { return };
        if viewport == 0 {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + viewport {
            self.offset = index + 1 - viewport;
        }
    }

    /// Clamp offset and hover to a list of `item_count` rows.
    pub fn clamp(&mut self, item_count: usize, viewport: usize) {
        self.offset = self.offset.min(item_count.saturating_sub(viewport.max(1)));
        if self.hovered.is_some_and(|h| h >= item_count) {
            self.hovered = None;
        }
    }

    /// Scroll up by `lines`.
    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Scroll down by `lines`, stopping once the last row is at the bottom.
    pub fn scroll_down(&mut self, lines: usize, item_count: usize, viewport: usize) {
        let max = item_count.saturating_sub(viewport.max(1));
        self.offset = (self.offset + lines).min(max);
    }

    /// Handle a mouse event for this list.
    ///
    /// `hit` is the result of `frame.hit_test(event.x, event.y)` from the
    /// last rendered frame; `expected_id` is the ID the list rendered with.
    pub fn handle_mouse(
        &mut self,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
        expected_id: HitId,
        items: &[SelectableOption],
        viewport: usize,
    ) -> SelectListEvent {
        let row = match hit {
            Some((id, HitRegion::Content, data)) if id == expected_id => {
                usize::try_from(data).ok().filter(|&i| i < items.len())
            }
            _ => None,
        };

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => match row {
                Some(index) => SelectListEvent::Select(items[index].label.clone()),
                None => SelectListEvent::Ignored,
            },
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if self.hovered == row {
                    SelectListEvent::Ignored
                } else {
                    self.hovered = row;
                    SelectListEvent::Hovered(row)
                }
            }
            MouseEventKind::ScrollUp => {
                self.scroll_up(WHEEL_LINES);
                SelectListEvent::Scrolled
            }
            MouseEventKind::ScrollDown => {
                self.scroll_down(WHEEL_LINES, items.len(), viewport);
                SelectListEvent::Scrolled
            }
            _ => SelectListEvent::Ignored,
        }
    }
}

impl StatefulWidget for SelectList<'_> {
    type State = SelectListState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "SelectList",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        if self.items.is_empty() {
            *state = SelectListState::default();
            return;
        }

        let viewport = area.height as usize;
        state.clamp(self.items.len(), viewport);
        let active = self.items.iter().position(|o| o.active);
        state.ensure_visible(active, viewport);

        for (i, option) in self
            .items
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(viewport)
        {
            let row_area = area.row((i - state.offset) as u16);
            SelectListItem::from_option(option, self.theme)
                .hovered(state.hovered == Some(i))
                .size(self.size)
                .render(row_area, frame);

            if let Some(id) = self.hit_id {
                frame.register_hit(row_area, id, HitRegion::Content, i as HitData);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagpick_render::cell::PackedRgba;

    fn opt(label: &str) -> SelectableOption {
        SelectableOption::new(label)
    }

    fn left_click(x: u16, y: u16) -> MouseEvent {
        MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x, y)
    }

    #[test]
    fn selected_row_shows_check_and_selected_style() {
        let theme = SelectStyle::default();
        let mut frame = Frame::new(12, 1);
        SelectListItem::new("Apple", &theme)
            .selected(true)
            .render(Rect::new(0, 0, 12, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0), " Apple    ✓ ");
        assert_eq!(frame.buffer.get(1, 0).unwrap().bg, theme.item_selected.bg.unwrap());
    }

    #[test]
    fn small_rows_drop_padding() {
        let theme = SelectStyle::default();
        let mut frame = Frame::new(8, 1);
        SelectListItem::new("Kiwi", &theme)
            .size(FieldSize::Small)
            .render(Rect::new(0, 0, 8, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "Kiwi    ");
    }

    #[test]
    fn long_label_is_truncated() {
        let theme = SelectStyle::default();
        let mut frame = Frame::new(8, 1);
        SelectListItem::new("Watermelon", &theme).render(Rect::new(0, 0, 8, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0), " Water… ");
    }

    #[test]
    fn hover_suppressed_when_sibling_active() {
        let theme = SelectStyle::default();
        let plain = SelectListItem::new("A", &theme).hovered(true);
        assert!(plain.shows_hover());
        assert_eq!(plain.resolved_style().bg, theme.item_hover.bg);

        let suppressed = plain.has_active(true);
        assert!(!suppressed.shows_hover());
        assert_eq!(suppressed.resolved_style(), theme.item);
    }

    #[test]
    fn hover_on_selected_keeps_selected_look() {
        let theme = SelectStyle::default();
        let row = SelectListItem::new("A", &theme).selected(true);
        assert_eq!(row.hovered(true).resolved_style(), row.resolved_style());
    }

    #[test]
    fn active_row_gets_active_background() {
        let theme = SelectStyle::default();
        let row = SelectListItem::new("A", &theme).active(true).has_active(true);
        assert_eq!(row.resolved_style().bg, theme.item_active.bg);
    }

    #[test]
    fn list_scrolls_active_into_view() {
        let theme = SelectStyle::default();
        let mut items: Vec<_> = (0..10).map(|i| opt(&format!("item {i}"))).collect();
        items[7].active = true;
        let mut state = SelectListState::default();
        let mut frame = Frame::new(10, 3);
        SelectList::new(&items, &theme).render(Rect::new(0, 0, 10, 3), &mut frame, &mut state);
        assert_eq!(state.offset, 5);
        assert!(frame.buffer.row_text(2).contains("item 7"));
    }

    #[test]
    fn list_scrolls_up_to_active_above_viewport() {
        let theme = SelectStyle::default();
        let mut items: Vec<_> = (0..10).map(|i| opt(&format!("{i}"))).collect();
        items[1].active = true;
        let mut state = SelectListState {
            offset: 6,
            hovered: None,
        };
        let mut frame = Frame::new(10, 3);
        SelectList::new(&items, &theme).render(Rect::new(0, 0, 10, 3), &mut frame, &mut state);
        assert_eq!(state.offset, 1);
    }

    #[test]
    fn rows_register_hits_with_index() {
        let theme = SelectStyle::default();
        let items = vec![opt("a"), opt("b"), opt("c")];
        let mut state = SelectListState::default();
        let mut frame = Frame::with_hit_grid(10, 3);
        SelectList::new(&items, &theme)
            .hit_id(HitId::new(4))
            .render(Rect::new(0, 0, 10, 3), &mut frame, &mut state);
        assert_eq!(frame.hit_test(3, 1), Some((HitId::new(4), HitRegion::Content, 1)));
    }

    #[test]
    fn click_selects_label() {
        let items = vec![opt("a"), opt("b")];
        let mut state = SelectListState::default();
        let hit = Some((HitId::new(1), HitRegion::Content, 1));
        let ev = state.handle_mouse(&left_click(0, 1), hit, HitId::new(1), &items, 5);
        assert_eq!(ev, SelectListEvent::Select("b".into()));
    }

    #[test]
    fn click_with_wrong_id_or_range_ignored() {
        let items = vec![opt("a")];
        let mut state = SelectListState::default();
        let wrong = Some((HitId::new(9), HitRegion::Content, 0));
        assert_eq!(
            state.handle_mouse(&left_click(0, 0), wrong, HitId::new(1), &items, 5),
            SelectListEvent::Ignored
        );
        let out_of_range = Some((HitId::new(1), HitRegion::Content, 4));
        assert_eq!(
            state.handle_mouse(&left_click(0, 0), out_of_range, HitId::new(1), &items, 5),
            SelectListEvent::Ignored
        );
    }

    #[test]
    fn move_tracks_hover() {
        let items = vec![opt("a"), opt("b")];
        let mut state = SelectListState::default();
        let moved = MouseEvent::new(MouseEventKind::Moved, 0, 0);
        let hit = Some((HitId::new(1), HitRegion::Content, 0));
        assert_eq!(
            state.handle_mouse(&moved, hit, HitId::new(1), &items, 5),
            SelectListEvent::Hovered(Some(0))
        );
        assert_eq!(
            state.handle_mouse(&moved, hit, HitId::new(1), &items, 5),
            SelectListEvent::Ignored
        );
        assert_eq!(
            state.handle_mouse(&moved, None, HitId::new(1), &items, 5),
            SelectListEvent::Hovered(None)
        );
    }

    #[test]
    fn wheel_scroll_is_clamped() {
        let items: Vec<_> = (0..5).map(|i| opt(&i.to_string())).collect();
        let mut state = SelectListState::default();
        let down = MouseEvent::new(MouseEventKind::ScrollDown, 0, 0);
        for _ in 0..10 {
            state.handle_mouse(&down, None, HitId::new(1), &items, 3);
        }
        assert_eq!(state.offset, 2);
        let up = MouseEvent::new(MouseEventKind::ScrollUp, 0, 0);
        for _ in 0..10 {
            state.handle_mouse(&up, None, HitId::new(1), &items, 3);
        }
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn empty_list_resets_state() {
        let theme = SelectStyle::default();
        let mut state = SelectListState {
            offset: 3,
            hovered: Some(1),
        };
        let mut frame = Frame::new(5, 2);
        SelectList::new(&[], &theme).render(Rect::new(0, 0, 5, 2), &mut frame, &mut state);
        assert_eq!(state, SelectListState::default());
    }

    #[test]
    fn custom_theme_applies() {
        let mut theme = SelectStyle::default();
        theme.item = Style::new().fg(PackedRgba::rgb(1, 2, 3));
        let mut frame = Frame::new(6, 1);
        SelectListItem::new("x", &theme).render(Rect::new(0, 0, 6, 1), &mut frame);
        assert_eq!(frame.buffer.get(1, 0).unwrap().fg, PackedRgba::rgb(1, 2, 3));
    }
}
