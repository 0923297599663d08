#![forbid(unsafe_code)]

//! Demo screen: a caption, the picker, and a status line.

use tagpick::prelude::*;
use tagpick::KeyEventKind;

const TITLE: &str = "tagpick demo: type to filter, Enter toggles, Esc leaves, Ctrl+C quits";

/// Screen state for the demo.
#[derive(Debug)]
pub struct App {
    picker: MultiSelect,
    quit: bool,
}

impl App {
    pub fn new(picker: MultiSelect) -> Self {
        Self {
            picker,
            quit: false,
        }
    }

    pub fn picker(&self) -> &MultiSelect {
        &self.picker
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Area the picker occupies on a `width` x `height` screen.
    fn picker_area(&self, width: u16, height: u16) -> Rect {
        let inner_width = width.saturating_sub(2);
        let wanted = self.picker.required_height(inner_width);
        Rect::new(1, 2, inner_width, wanted.min(height.saturating_sub(4)))
    }

    /// Draw the whole screen.
    pub fn render(&self, frame: &mut Frame) {
        let (width, height) = (frame.width(), frame.height());
        let title_style = SelectStyle::default().caption;
        draw_line(frame, 0, TITLE, title_style);

        self.picker.render(self.picker_area(width, height), frame);

        let status = format!(
            "value: [{}]  extra: {}",
            self.picker.value().join(", "),
            self.picker.extra_options().len()
        );
        draw_line(frame, height.saturating_sub(1), &status, Style::new());
    }

    /// Apply one input event. `frame` is the frame the user is looking at.
    pub fn handle_event(&mut self, event: &Event, frame: &Frame) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if key.ctrl() && key.is_char('c') {
                    self.quit = true;
                    return;
                }
                if !self.picker.is_focused() {
                    match key.code {
                        KeyCode::Char('q') => self.quit = true,
                        KeyCode::Tab => self.picker.focus(),
                        _ => {}
                    }
                    return;
                }
                self.picker.handle_event(event);
            }
            Event::Mouse(mouse) => {
                let hit = frame.hit_test(mouse.x, mouse.y);
                self.picker.handle_mouse(mouse, hit);
            }
            _ => {
                self.picker.handle_event(event);
            }
        }
    }
}

fn draw_line(frame: &mut Frame, y: u16, text: &str, style: Style) {
    let mut x = 0u16;
    for c in text.chars() {
        if x >= frame.width() {
            break;
        }
        let mut cell = tagpick::Cell::from_char(c);
        if let Some(fg) = style.fg {
            cell.fg = fg;
        }
        if let Some(attrs) = style.attrs {
            cell.attrs = cell.attrs.with_flags(attrs);
        }
        frame.buffer.set(x, y, cell);
        x = x.saturating_add(tagpick::render::char_width(c) as u16);
    }
}
