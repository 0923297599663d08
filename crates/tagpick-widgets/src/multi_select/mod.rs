#![forbid(unsafe_code)]

//! Multi-value tag picker with autocomplete.
//!
//! A `MultiSelect` shows the committed value as removable chips followed by
//! a search input inside a bordered control. While the input has focus a
//! dropdown lists the catalog and any typed ("extra") options that match the
//! search term.
//!
//! # State
//!
//! Everything the dropdown shows is re-derived after each mutation from
//! `(catalog, extra, value, search)` (see [`derive_options`]); the cursor is
//! then reconciled against the new rows (see [`reconcile_active`]). Typing a
//! label that is not in the catalog and committing it adds it to the extra
//! options; deselecting it removes it again.
//!
//! # Hit regions
//!
//! All regions are registered under the widget's [`HitId`]:
//!
//! | Region        | Where                        | Data              |
//! |---------------|------------------------------|-------------------|
//! | `Custom(0)`   | caption, control, dropdown   | 0                 |
//! | `Button`      | a chip's removal icon        | index into value  |
//! | `Content`     | a dropdown row               | row index         |
//!
//! # Example
//!
//! ```
//! use tagpick_core::event::{Event, KeyCode, KeyEvent};
//! use tagpick_widgets::{MultiSelect, MultiSelectProps};
//!
//! let mut picker = MultiSelect::new(MultiSelectProps::new("colors", ["Red", "Blue"]));
//! picker.focus();
//! for c in "Gre".chars() {
//!     picker.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char(c))));
//! }
//! picker.handle_event(&Event::Key(KeyEvent::new(KeyCode::Enter)));
//!
//! assert_eq!(picker.value(), ["Gre"]);
//! assert_eq!(picker.extra_options()[0].label, "Gre");
//! assert_eq!(picker.search_term(), "");
//! ```

mod options;
mod props;

pub use options::{
    DerivedOptions, SelectOption, SelectableOption, annotate_active, derive_options,
    reconcile_active,
};
pub use props::{FieldSize, MultiSelectProps, PropsError, ValueChange};

use std::fmt;

use tagpick_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use tagpick_core::geometry::{Rect, Sides};
use tagpick_render::cell::Cell;
use tagpick_render::frame::{Frame, HitData, HitId, HitRegion};
use tagpick_style::SelectStyle;
use tagpick_text::{display_width, truncate_with_ellipsis};

use crate::borders::{BorderType, render_border};
use crate::input::SearchInput;
use crate::measure::InputWidth;
use crate::select_list::{SelectList, SelectListEvent, SelectListState};
use crate::{StatefulWidget, Widget, draw_text_span, set_style_area};

/// Glyph of a chip's removal icon.
const REMOVE_ICON: &str = "×";
/// Blank cells between chips.
const CHIP_GAP: u16 = 1;
/// Dropdown rows shown before scrolling.
const DEFAULT_MAX_VISIBLE: u16 = 6;
/// Region data for the focusable surface.
const SURFACE: HitRegion = HitRegion::Custom(0);

/// Position of one chip inside the control, relative to its inner area.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChipSlot {
    value_index: usize,
    text: String,
    x: u16,
    row: u16,
    width: u16,
}

/// Chip and input placement for a given inner width.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ControlLayout {
    chips: Vec<ChipSlot>,
    input_x: u16,
    input_row: u16,
    input_width: u16,
    rows: u16,
}

/// Multi-value tag picker.
pub struct MultiSelect {
    name: String,
    label: Option<String>,
    size: FieldSize,
    catalog: Vec<SelectOption>,
    placeholder: String,
    value: Vec<String>,
    extra: Vec<SelectOption>,
    input: SearchInput,
    options: Vec<SelectableOption>,
    active: Option<String>,
    list_state: SelectListState,
    input_width: InputWidth,
    value_change: Option<ValueChange>,
    theme: SelectStyle,
    border_type: BorderType,
    hit_id: HitId,
    max_visible_options: u16,
}

impl fmt::Debug for MultiSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiSelect")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("extra", &self.extra)
            .field("search", &self.input.value())
            .field("active", &self.active)
            .field("focused", &self.input.focused())
            .finish_non_exhaustive()
    }
}

impl MultiSelect {
    /// Create a picker. Duplicate labels in the initial value are dropped.
    pub fn new(props: MultiSelectProps) -> Self {
        let MultiSelectProps {
            name,
            label,
            size,
            option_list,
            placeholder,
            value,
            value_change,
        } = props;

        let mut unique = Vec::with_capacity(value.len());
        for label in value {
            if !unique.contains(&label) {
                unique.push(label);
            }
        }

        let theme = SelectStyle::default();
        let input = SearchInput::new()
            .with_style(theme.input)
            .with_placeholder_style(theme.placeholder);

        let mut this = Self {
            name,
            label,
            size,
            catalog: option_list,
            placeholder: placeholder.unwrap_or_default(),
            value: unique,
            extra: Vec::new(),
            input,
            options: Vec::new(),
            active: None,
            list_state: SelectListState::default(),
            input_width: InputWidth::new(),
            value_change,
            theme,
            border_type: BorderType::default(),
            hit_id: HitId::new(1),
            max_visible_options: DEFAULT_MAX_VISIBLE,
        };
        this.refresh();
        this
    }

    /// Validate `props`, then create a picker.
    pub fn try_new(props: MultiSelectProps) -> Result<Self, PropsError> {
        props.validate()?;
        Ok(Self::new(props))
    }

    #[must_use]
    pub fn with_style(mut self, theme: SelectStyle) -> Self {
        self.input = std::mem::take(&mut self.input)
            .with_style(theme.input)
            .with_placeholder_style(theme.placeholder);
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Hit ID used for every region this widget registers.
    #[must_use]
    pub fn with_hit_id(mut self, id: HitId) -> Self {
        self.hit_id = id;
        self
    }

    #[must_use]
    pub fn with_max_visible_options(mut self, rows: u16) -> Self {
        self.max_visible_options = rows.max(1);
        self.refresh();
        self
    }

    // --- Accessors ---

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn size(&self) -> FieldSize {
        self.size
    }

    pub fn hit_id(&self) -> HitId {
        self.hit_id
    }

    /// The catalog.
    pub fn option_list(&self) -> &[SelectOption] {
        &self.catalog
    }

    /// Committed labels, in selection order.
    pub fn value(&self) -> &[String] {
        &self.value
    }

    /// Options created from typed text.
    pub fn extra_options(&self) -> &[SelectOption] {
        &self.extra
    }

    /// Current dropdown rows.
    pub fn options(&self) -> &[SelectableOption] {
        &self.options
    }

    /// Label under the keyboard cursor.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn search_term(&self) -> &str {
        self.input.value()
    }

    pub fn is_focused(&self) -> bool {
        self.input.focused()
    }

    /// Committed labels that resolve to a catalog or extra option, paired
    /// with their index in [`value`](Self::value). Unresolved labels are
    /// skipped.
    pub fn mapped_value(&self) -> Vec<(usize, &str)> {
        self.value
            .iter()
            .enumerate()
            .filter(|(_, label)| self.is_known(label))
            .map(|(i, label)| (i, label.as_str()))
            .collect()
    }

    // --- Operations ---

    pub fn focus(&mut self) {
        if !self.input.focused() {
            tagpick_core::debug!(name = %self.name, "multi-select focused");
            self.input.set_focused(true);
        }
    }

    /// Drop input focus. Value, search and cursor are kept.
    pub fn blur(&mut self) {
        if self.input.focused() {
            tagpick_core::debug!(name = %self.name, "multi-select blurred");
            self.input.set_focused(false);
            self.list_state.hovered = None;
        }
    }

    /// Replace the search text and re-derive the dropdown.
    pub fn set_search_term(&mut self, search: impl Into<String>) {
        self.input.set_value(search);
        self.refresh();
    }

    /// Toggle `label` (or the cursor label when `None`) in the value.
    ///
    /// Adding a label unknown to the catalog and extras records it as an
    /// extra option; removing one drops its extra option. The search term is
    /// cleared and the change callback fires. Returns `false` without side
    /// effects when there is nothing to commit: no label and no cursor, or
    /// the empty label of the blank row an empty catalog shows.
    pub fn change_value(&mut self, label: Option<&str>) -> bool {
        let Some(label) = label.map(str::to_owned).or_else(|| self.active.clone()) else {
            return false;
        };
        if label.is_empty() {
            return false;
        }

        if let Some(pos) = self.value.iter().position(|v| *v == label) {
            self.value.remove(pos);
            self.extra.retain(|o| o.label != label);
            tagpick_core::debug!(name = %self.name, label = %label, "value removed");
        } else {
            if !self.is_known(&label) {
                self.extra.push(SelectOption::new(label.clone()));
            }
            tagpick_core::debug!(name = %self.name, label = %label, "value added");
            self.value.push(label);
        }

        self.input.clear();
        self.notify();
        self.refresh();
        true
    }

    /// Commit the option a dropdown row stands for.
    ///
    /// `label` is resolved against the catalog, then the extra options; a row
    /// that matches neither is the search row and commits the search text.
    pub fn select_item(&mut self, label: &str) -> bool {
        let resolved = self
            .catalog
            .iter()
            .chain(&self.extra)
            .find(|o| o.label == label)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| self.input.value().to_owned());
        self.change_value(Some(&resolved))
    }

    /// Remove the trailing chip.
    pub fn remove_last(&mut self) -> bool {
        let Some(label) = self.value.pop() else {
            return false;
        };
        self.extra.retain(|o| o.label != label);
        tagpick_core::debug!(name = %self.name, label = %label, "trailing value removed");
        self.notify();
        self.refresh();
        true
    }

    /// Handle a keyboard, paste or focus event.
    ///
    /// Keys and paste are only handled while focused. Mouse events need hit
    /// information and go through [`handle_mouse`](Self::handle_mouse).
    /// Returns `true` if the event was consumed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if self.is_focused() && key.kind != KeyEventKind::Release => {
                self.handle_key(key)
            }
            Event::Paste(_) if self.is_focused() => {
                self.edit_search(event);
                true
            }
            Event::Focus(false) if self.is_focused() => {
                self.blur();
                true
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Down => {
                self.move_cursor(true);
                true
            }
            KeyCode::Up => {
                self.move_cursor(false);
                true
            }
            KeyCode::Enter => {
                self.change_value(None);
                true
            }
            KeyCode::Escape => {
                self.blur();
                true
            }
            KeyCode::Backspace if self.input.value().is_empty() => {
                self.remove_last();
                true
            }
            _ => self.edit_search(&Event::Key(*key)),
        }
    }

    fn edit_search(&mut self, event: &Event) -> bool {
        let before = self.input.value().to_owned();
        let consumed = self.input.handle_event(event);
        if self.input.value() != before {
            self.refresh();
        }
        consumed
    }

    /// Handle a mouse event.
    ///
    /// `hit` is `frame.hit_test(event.x, event.y)` on the last rendered frame.
    /// Returns `true` if the event landed on this widget.
    pub fn handle_mouse(
        &mut self,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> bool {
        let ours = hit.filter(|(id, _, _)| *id == self.hit_id);
        let viewport = self.dropdown_rows() as usize;

        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if ours.is_none() {
                    return self.list_state.hovered.take().is_some();
                }
                self.clear_cursor();
                self.list_state
                    .handle_mouse(event, ours, self.hit_id, &self.options, viewport);
                true
            }
            MouseEventKind::Down(MouseButton::Left) => match ours {
                Some((_, HitRegion::Button, data)) => {
                    let label = usize::try_from(data)
                        .ok()
                        .and_then(|i| self.value.get(i))
                        .cloned();
                    if let Some(label) = label {
                        self.change_value(Some(&label));
                    }
                    self.focus();
                    true
                }
                Some((_, HitRegion::Content, _)) => {
                    if let SelectListEvent::Select(label) =
                        self.list_state
                            .handle_mouse(event, ours, self.hit_id, &self.options, viewport)
                    {
                        self.select_item(&label);
                    }
                    self.focus();
                    true
                }
                Some(_) => {
                    self.focus();
                    true
                }
                None => {
                    self.blur();
                    false
                }
            },
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown if ours.is_some() => {
                self.list_state
                    .handle_mouse(event, ours, self.hit_id, &self.options, viewport);
                true
            }
            _ => false,
        }
    }

    /// Rows needed to draw the widget `width` cells wide in its current state.
    pub fn required_height(&self, width: u16) -> u16 {
        let caption = u16::from(self.label.is_some());
        let inner = width.saturating_sub(2);
        let control = self.layout_control(inner).rows.saturating_add(2);
        let dropdown = if self.dropdown_open() {
            self.dropdown_rows().saturating_add(2)
        } else {
            0
        };
        caption.saturating_add(control).saturating_add(dropdown)
    }

    // --- Internals ---

    fn is_known(&self, label: &str) -> bool {
        self.catalog
            .iter()
            .chain(&self.extra)
            .any(|o| o.label == label)
    }

    fn notify(&mut self) {
        if let Some(callback) = self.value_change.as_mut() {
            callback(&self.value);
        }
    }

    fn move_cursor(&mut self, down: bool) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        let current = self
            .active
            .as_deref()
            .and_then(|label| self.options.iter().position(|o| o.label == label));
        let next = match (current, down) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1).min(len - 1),
            (Some(i), false) => i.saturating_sub(1),
        };
        self.active = Some(self.options[next].label.clone());
        annotate_active(&mut self.options, self.active.as_deref());
        self.list_state
            .ensure_visible(Some(next), self.dropdown_rows() as usize);
    }

    fn clear_cursor(&mut self) {
        if self.active.take().is_some() {
            annotate_active(&mut self.options, None);
        }
    }

    /// Re-derive the dropdown and everything that depends on it.
    fn refresh(&mut self) {
        let derived = derive_options(&self.catalog, &self.extra, &self.value, self.input.value());
        let active = reconcile_active(
            &derived.items,
            derived.designated.as_deref(),
            self.active.as_deref(),
        );
        let mut items = derived.items;
        annotate_active(&mut items, active.as_deref());
        self.options = items;
        self.active = active;

        let placeholder = if self.value.is_empty() {
            self.placeholder.as_str()
        } else {
            ""
        };
        self.input.set_placeholder(placeholder);
        self.input_width.update(self.input.shown_text());

        let viewport = self.dropdown_rows() as usize;
        self.list_state.clamp(self.options.len(), viewport);
        let index = self
            .active
            .as_deref()
            .and_then(|label| self.options.iter().position(|o| o.label == label));
        self.list_state.ensure_visible(index, viewport);
    }

    fn dropdown_open(&self) -> bool {
        self.is_focused() && !self.options.is_empty()
    }

    fn dropdown_rows(&self) -> u16 {
        let len = u16::try_from(self.options.len()).unwrap_or(u16::MAX);
        len.min(self.max_visible_options)
    }

    /// Place chips and the input inside an inner area `width` cells wide.
    fn layout_control(&self, width: u16) -> ControlLayout {
        let pad = self.size.padding();
        // Label plus " ×" plus padding on both sides.
        let chrome = 2 + 2 * pad;
        let mut chips = Vec::new();
        let (mut x, mut row) = (0u16, 0u16);

        if width > 0 {
            for (value_index, label) in self.mapped_value() {
                let natural = u16::try_from(display_width(label))
                    .unwrap_or(u16::MAX)
                    .saturating_add(chrome);
                let chip_width = natural.min(width);
                if x > 0 && x.saturating_add(chip_width) > width {
                    row += 1;
                    x = 0;
                }
                let room = chip_width.saturating_sub(chrome) as usize;
                chips.push(ChipSlot {
                    value_index,
                    text: truncate_with_ellipsis(label, room, "…"),
                    x,
                    row,
                    width: chip_width,
                });
                x = x.saturating_add(chip_width).saturating_add(CHIP_GAP);
            }
        }

        let input_width = self.input_width.resolve(width);
        if x > 0 && x.saturating_add(input_width) > width {
            row += 1;
            x = 0;
        }

        ControlLayout {
            chips,
            input_x: x,
            input_row: row,
            input_width,
            rows: row + 1,
        }
    }

    fn render_chip(&self, chip: &ChipSlot, inner: Rect, frame: &mut Frame) {
        let pad = self.size.padding();
        let x = inner.x.saturating_add(chip.x);
        let y = inner.y.saturating_add(chip.row);
        let end = x.saturating_add(chip.width).min(inner.right());
        let chip_style = self.theme.chip;

        for cx in x..end {
            frame.buffer.set(cx, y, Cell::from_char(' '));
        }
        set_style_area(&mut frame.buffer, Rect::new(x, y, end.saturating_sub(x), 1), chip_style);

        let remove_x = end.saturating_sub(pad).saturating_sub(1);
        draw_text_span(frame, x.saturating_add(pad), y, &chip.text, chip_style, remove_x);

        let remove_style = self.theme.chip_remove.merge(&chip_style);
        draw_text_span(frame, remove_x, y, REMOVE_ICON, remove_style, end);
        frame.register_hit(
            Rect::new(remove_x, y, 1, 1),
            self.hit_id,
            HitRegion::Button,
            chip.value_index as HitData,
        );
    }
}

impl Widget for MultiSelect {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "MultiSelect",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }

        let mut y = area.y;
        if let Some(label) = &self.label {
            let caption = Rect::new(area.x, y, area.width, 1);
            draw_text_span(frame, area.x, y, label, self.theme.caption, area.right());
            frame.register_hit(caption, self.hit_id, SURFACE, 0);
            y = y.saturating_add(1);
        }

        let layout = self.layout_control(area.width.saturating_sub(2));
        let control = Rect::new(area.x, y, area.width, layout.rows.saturating_add(2))
            .intersection(&area);
        if control.is_empty() {
            return;
        }
        let border_style = if self.is_focused() {
            self.theme.border_focused
        } else {
            self.theme.border
        };
        render_border(frame, control, self.border_type, border_style);
        frame.register_hit(control, self.hit_id, SURFACE, 0);

        let inner = control.inner(Sides::all(1));
        if !inner.is_empty() {
            frame.buffer.push_scissor(inner);
            for chip in &layout.chips {
                self.render_chip(chip, inner, frame);
            }
            let input_area = Rect::new(
                inner.x.saturating_add(layout.input_x),
                inner.y.saturating_add(layout.input_row),
                layout.input_width,
                1,
            )
            .intersection(&inner);
            self.input.render(input_area, frame);
            frame.buffer.pop_scissor();
        }

        if !self.dropdown_open() {
            return;
        }
        let dropdown = Rect::new(
            area.x,
            control.bottom(),
            area.width,
            self.dropdown_rows().saturating_add(2),
        )
        .intersection(&area);
        if dropdown.height < 3 {
            return;
        }
        render_border(frame, dropdown, self.border_type, self.theme.dropdown_border);
        frame.register_hit(dropdown, self.hit_id, SURFACE, 0);

        let mut state = self.list_state;
        SelectList::new(&self.options, &self.theme)
            .size(self.size)
            .hit_id(self.hit_id)
            .render(dropdown.inner(Sides::all(1)), frame, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tagpick_core::event::PasteEvent;

    fn picker(catalog: &[&str]) -> MultiSelect {
        let mut ms = MultiSelect::new(MultiSelectProps::new("colors", catalog.iter().copied()));
        ms.focus();
        ms
    }

    fn recorded(props: MultiSelectProps) -> (MultiSelect, Rc<RefCell<Vec<Vec<String>>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let props = props.on_value_change(move |v| sink.borrow_mut().push(v.to_vec()));
        let mut ms = MultiSelect::new(props);
        ms.focus();
        (ms, calls)
    }

    fn press(ms: &mut MultiSelect, code: KeyCode) -> bool {
        ms.handle_event(&Event::Key(KeyEvent::new(code)))
    }

    fn type_text(ms: &mut MultiSelect, text: &str) {
        for c in text.chars() {
            press(ms, KeyCode::Char(c));
        }
    }

    fn labels(ms: &MultiSelect) -> Vec<&str> {
        ms.options().iter().map(|o| o.label.as_str()).collect()
    }

    fn find_char(frame: &Frame, c: char) -> Option<(u16, u16)> {
        (0..frame.height()).find_map(|y| {
            (0..frame.width()).find_map(|x| {
                frame
                    .buffer
                    .get(x, y)
                    .and_then(|cell| cell.content.as_char())
                    .filter(|&ch| ch == c)
                    .map(|_| (x, y))
            })
        })
    }

    fn find_text(frame: &Frame, needle: &str) -> Option<(u16, u16)> {
        (0..frame.height()).find_map(|y| {
            let text = frame.buffer.row_text(y);
            text.find(needle)
                .map(|byte| (text[..byte].chars().count() as u16, y))
        })
    }

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x, y)
    }

    #[test]
    fn typed_value_becomes_extra_option() {
        let mut ms = picker(&["Red", "Blue"]);
        type_text(&mut ms, "Gre");
        assert_eq!(labels(&ms), ["Gre"]);
        assert!(!ms.options()[0].selected);
        assert_eq!(ms.active(), Some("Gre"));

        press(&mut ms, KeyCode::Enter);
        assert_eq!(ms.value(), ["Gre"]);
        assert_eq!(ms.extra_options(), [SelectOption::new("Gre")]);
        assert_eq!(ms.search_term(), "");
    }

    #[test]
    fn chip_removal_clears_value_and_notifies() {
        let props = MultiSelectProps::new("colors", ["Red", "Blue"]).value(["Red"]);
        let (mut ms, calls) = recorded(props);
        ms.blur();

        let mut frame = Frame::with_hit_grid(30, 6);
        ms.render(Rect::new(0, 0, 30, 6), &mut frame);
        let (x, y) = find_char(&frame, '×').expect("chip icon rendered");
        let hit = frame.hit_test(x, y);
        assert_eq!(hit, Some((ms.hit_id(), HitRegion::Button, 0)));

        assert!(ms.handle_mouse(&click(x, y), hit));
        assert!(ms.value().is_empty());
        assert_eq!(*calls.borrow(), vec![Vec::<String>::new()]);
    }

    #[test]
    fn search_row_prepended_without_exact_match() {
        let mut ms = picker(&["Apple", "Banana", "Grape"]);
        type_text(&mut ms, "ap");
        assert_eq!(labels(&ms), ["ap", "Apple", "Grape"]);
        assert_eq!(ms.active(), Some("ap"));
        assert!(ms.options().iter().all(|o| o.has_active));
    }

    #[test]
    fn arrows_saturate_at_both_ends() {
        let mut ms = picker(&["a", "b", "c"]);
        assert_eq!(ms.active(), None);

        press(&mut ms, KeyCode::Up);
        assert_eq!(ms.active(), Some("c"));
        press(&mut ms, KeyCode::Down);
        assert_eq!(ms.active(), Some("c"));

        press(&mut ms, KeyCode::Up);
        press(&mut ms, KeyCode::Up);
        press(&mut ms, KeyCode::Up);
        assert_eq!(ms.active(), Some("a"));
    }

    #[test]
    fn down_without_cursor_starts_at_first_row() {
        let mut ms = picker(&["a", "b"]);
        press(&mut ms, KeyCode::Down);
        assert_eq!(ms.active(), Some("a"));
        assert!(ms.options()[0].active);
        assert!(!ms.options()[1].active);
    }

    #[test]
    fn enter_without_cursor_is_noop() {
        let (mut ms, calls) = recorded(MultiSelectProps::new("x", ["a", "b"]));
        assert!(press(&mut ms, KeyCode::Enter));
        assert!(ms.value().is_empty());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn backspace_on_empty_search_removes_trailing_chip() {
        let props = MultiSelectProps::new("x", ["A"]);
        let (mut ms, calls) = recorded(props);
        type_text(&mut ms, "A");
        press(&mut ms, KeyCode::Enter);
        type_text(&mut ms, "B");
        press(&mut ms, KeyCode::Enter);
        assert_eq!(ms.value(), ["A", "B"]);
        assert_eq!(ms.extra_options(), [SelectOption::new("B")]);

        press(&mut ms, KeyCode::Backspace);
        assert_eq!(ms.value(), ["A"]);
        assert!(ms.extra_options().is_empty());
        assert_eq!(calls.borrow().last(), Some(&vec!["A".to_string()]));
    }

    #[test]
    fn backspace_with_search_edits_text() {
        let props = MultiSelectProps::new("x", ["A"]).value(["A"]);
        let mut ms = MultiSelect::new(props);
        ms.focus();
        type_text(&mut ms, "zz");
        press(&mut ms, KeyCode::Backspace);
        assert_eq!(ms.search_term(), "z");
        assert_eq!(ms.value(), ["A"]);
    }

    #[test]
    fn toggling_twice_restores_value() {
        let mut ms = picker(&["Red", "Blue"]);
        ms.change_value(Some("Blue"));
        ms.change_value(Some("Blue"));
        assert!(ms.value().is_empty());

        ms.change_value(Some("Teal"));
        assert_eq!(ms.extra_options().len(), 1);
        ms.change_value(Some("Teal"));
        assert!(ms.value().is_empty());
        assert!(ms.extra_options().is_empty());
    }

    #[test]
    fn committing_known_label_adds_no_extra() {
        let mut ms = picker(&["Red"]);
        ms.change_value(Some("Red"));
        assert_eq!(ms.value(), ["Red"]);
        assert!(ms.extra_options().is_empty());
    }

    #[test]
    fn empty_label_is_not_committed() {
        let mut ms = picker(&[]);
        assert_eq!(labels(&ms), [""]);
        assert_eq!(ms.active(), Some(""));
        assert!(!press(&mut ms, KeyCode::Tab));
        press(&mut ms, KeyCode::Enter);
        assert!(ms.value().is_empty());
    }

    #[test]
    fn whitespace_label_commits_like_any_typed_text() {
        let (mut ms, calls) = recorded(MultiSelectProps::new("colors", ["Red", "Blue"]));
        type_text(&mut ms, " ");
        assert_eq!(ms.active(), Some(" "));
        press(&mut ms, KeyCode::Enter);

        assert_eq!(ms.value(), [" "]);
        assert_eq!(ms.extra_options().len(), 1);
        assert_eq!(ms.extra_options()[0].label, " ");
        assert_eq!(ms.search_term(), "");
        assert_eq!(*calls.borrow(), vec![vec![" ".to_string()]]);
    }

    #[test]
    fn whitespace_chip_can_be_removed() {
        let mut ms = picker(&[" ", "Red"]);
        ms.change_value(Some(" "));
        assert_eq!(ms.value(), [" "]);

        assert!(ms.change_value(Some(" ")));
        assert!(ms.value().is_empty());
        assert!(ms.extra_options().is_empty());
    }

    #[test]
    fn huge_label_chip_fits_control() {
        let mut ms = picker(&[]);
        let long = "x".repeat(70_000);
        ms.change_value(Some(&long));
        let layout = ms.layout_control(20);
        assert_eq!(layout.chips.len(), 1);
        assert_eq!(layout.chips[0].width, 20);
    }

    #[test]
    fn escape_blurs_without_touching_state() {
        let mut ms = picker(&["Red", "Blue"]);
        type_text(&mut ms, "Re");
        press(&mut ms, KeyCode::Escape);
        assert!(!ms.is_focused());
        assert_eq!(ms.search_term(), "Re");

        assert!(!press(&mut ms, KeyCode::Char('d')));
        assert_eq!(ms.search_term(), "Re");
    }

    #[test]
    fn designated_row_replaces_cursor() {
        let mut ms = picker(&["Red", "Rose", "Blue"]);
        press(&mut ms, KeyCode::Down);
        press(&mut ms, KeyCode::Down);
        assert_eq!(ms.active(), Some("Rose"));

        ms.set_search_term("R");
        assert_eq!(labels(&ms), ["R", "Red", "Rose"]);
        assert_eq!(ms.active(), Some("R"));

        // "R" is gone from the unfiltered list, so the cursor is dropped.
        ms.set_search_term("");
        assert_eq!(ms.active(), None);
    }

    #[test]
    fn cursor_follows_designation_then_persists() {
        let mut ms = picker(&["Red", "Rose", "Blue"]);
        press(&mut ms, KeyCode::Up);
        assert_eq!(ms.active(), Some("Blue"));
        ms.set_search_term("Ro");
        assert_eq!(ms.active(), Some("Ro"));
        ms.set_search_term("Rose");
        assert_eq!(ms.active(), Some("Rose"));
        ms.set_search_term("");
        assert_eq!(ms.active(), Some("Rose"));
    }

    #[test]
    fn pointer_move_clears_cursor() {
        let mut ms = picker(&["Red", "Blue"]);
        press(&mut ms, KeyCode::Down);
        let hit = Some((ms.hit_id(), HitRegion::Content, 1));
        let moved = MouseEvent::new(MouseEventKind::Moved, 2, 5);
        assert!(ms.handle_mouse(&moved, hit));
        assert_eq!(ms.active(), None);
        assert!(ms.options().iter().all(|o| !o.active && !o.has_active));
    }

    #[test]
    fn clicking_row_selects_its_label() {
        let (mut ms, calls) = recorded(MultiSelectProps::new("x", ["Red", "Blue"]));
        let mut frame = Frame::with_hit_grid(20, 8);
        ms.render(Rect::new(0, 0, 20, 8), &mut frame);

        let (x, y) = find_text(&frame, "Blue").expect("row rendered");
        let hit = frame.hit_test(x, y);
        assert_eq!(hit, Some((ms.hit_id(), HitRegion::Content, 1)));
        assert!(ms.handle_mouse(&click(x, y), hit));
        assert_eq!(ms.value(), ["Blue"]);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn clicking_search_row_commits_search_text() {
        let mut ms = picker(&["Red"]);
        type_text(&mut ms, "Gr");
        assert!(ms.select_item("Gr"));
        assert_eq!(ms.value(), ["Gr"]);
        assert_eq!(ms.extra_options(), [SelectOption::new("Gr")]);
    }

    #[test]
    fn click_on_control_focuses_and_outside_blurs() {
        let mut ms = MultiSelect::new(MultiSelectProps::new("x", ["a"]));
        let hit = Some((ms.hit_id(), HitRegion::Custom(0), 0));
        assert!(ms.handle_mouse(&click(1, 1), hit));
        assert!(ms.is_focused());

        assert!(!ms.handle_mouse(&click(40, 40), None));
        assert!(!ms.is_focused());
    }

    #[test]
    fn paste_extends_search() {
        let mut ms = picker(&["Red", "Blue"]);
        ms.handle_event(&Event::Paste(PasteEvent::new("Bl")));
        assert_eq!(ms.search_term(), "Bl");
        assert_eq!(labels(&ms), ["Bl", "Blue"]);
    }

    #[test]
    fn focus_lost_event_blurs() {
        let mut ms = picker(&["a"]);
        assert!(ms.handle_event(&Event::Focus(false)));
        assert!(!ms.is_focused());
    }

    #[test]
    fn unresolved_initial_labels_are_not_chips() {
        let props = MultiSelectProps::new("x", ["Red"]).value(["Red", "Ghost", "Red"]);
        let ms = MultiSelect::new(props);
        assert_eq!(ms.value(), ["Red", "Ghost"]);
        assert_eq!(ms.mapped_value(), vec![(0, "Red")]);
    }

    #[test]
    fn try_new_validates() {
        let err = MultiSelect::try_new(MultiSelectProps::new("", ["a"])).unwrap_err();
        assert_eq!(err, PropsError::EmptyName);
        assert!(MultiSelect::try_new(MultiSelectProps::new("ok", ["a"])).is_ok());
    }

    #[test]
    fn placeholder_only_while_value_empty() {
        let props = MultiSelectProps::new("x", ["Red"]).placeholder("Pick colors");
        let mut ms = MultiSelect::new(props);
        let mut frame = Frame::new(30, 3);
        ms.render(Rect::new(0, 0, 30, 3), &mut frame);
        assert!(frame.buffer.row_text(1).contains("Pick colors"));

        ms.change_value(Some("Red"));
        let mut frame = Frame::new(30, 3);
        ms.render(Rect::new(0, 0, 30, 3), &mut frame);
        assert!(!frame.buffer.row_text(1).contains("Pick colors"));
        assert!(frame.buffer.row_text(1).contains("Red ×"));
    }

    #[test]
    fn caption_and_dropdown_rows() {
        let props = MultiSelectProps::new("x", ["Red", "Blue"]).label("Colors");
        let mut ms = MultiSelect::new(props);
        assert_eq!(ms.required_height(20), 4);
        ms.focus();
        assert_eq!(ms.required_height(20), 8);

        let mut frame = Frame::new(20, 8);
        ms.render(Rect::new(0, 0, 20, 8), &mut frame);
        assert!(frame.buffer.row_text(0).starts_with("Colors"));
        assert!(frame.buffer.row_text(5).contains("Red"));
        assert!(frame.buffer.row_text(6).contains("Blue"));
        assert_eq!(frame.cursor_position, Some((1, 2)));
    }

    #[test]
    fn chips_wrap_onto_new_rows() {
        let props = MultiSelectProps::new("x", ["Alpha", "Bravo", "Charlie"])
            .value(["Alpha", "Bravo", "Charlie"]);
        let ms = MultiSelect::new(props);
        let layout = ms.layout_control(18);
        let rows: Vec<u16> = layout.chips.iter().map(|c| c.row).collect();
        assert_eq!(rows, [0, 1, 2]);
        assert_eq!(layout.chips[0].width, 9);
        assert_eq!(layout.rows, 3);
        assert_eq!((layout.input_x, layout.input_row), (12, 2));
    }

    #[test]
    fn small_chips_have_no_padding() {
        let props = MultiSelectProps::new("x", ["Red"])
            .value(["Red"])
            .size(FieldSize::Small);
        let ms = MultiSelect::new(props);
        let layout = ms.layout_control(30);
        assert_eq!(layout.chips[0].width, 5);
        assert_eq!(layout.input_x, 6);
    }

    #[test]
    fn input_width_capped_by_container() {
        let mut ms = picker(&["a"]);
        ms.set_search_term("a very long search term");
        let layout = ms.layout_control(10);
        assert_eq!(layout.input_width, 10);
    }

    #[test]
    fn wheel_scrolls_long_dropdown() {
        let catalog: Vec<String> = (0..20).map(|i| format!("opt{i}")).collect();
        let mut ms = MultiSelect::new(MultiSelectProps::new("x", catalog.iter().map(String::as_str)))
            .with_max_visible_options(4);
        ms.focus();
        let hit = Some((ms.hit_id(), HitRegion::Content, 0));
        let wheel = MouseEvent::new(MouseEventKind::ScrollDown, 1, 5);
        assert!(ms.handle_mouse(&wheel, hit));
        assert_eq!(ms.list_state.offset, 1);
    }
}
