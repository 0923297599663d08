#![forbid(unsafe_code)]

//! Presenter: state-tracked frame emission through crossterm.
//!
//! The presenter walks the buffer row by row and queues crossterm commands,
//! emitting color and attribute changes only when they differ from the
//! last cell written. Output is buffered and flushed once per frame.
//!
//! # Usage
//!
//! ```no_run
//! use tagpick_render::frame::Frame;
//! use tagpick_render::presenter::Presenter;
//!
//! let mut presenter = Presenter::new(std::io::stdout());
//! let frame = Frame::new(80, 24);
//! presenter.present(&frame)?;
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, BufWriter, Write};

use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, queue};

use crate::cell::{Cell, PackedRgba, StyleFlags};
use crate::frame::Frame;

/// Size of the internal write buffer (64KB).
const BUFFER_CAPACITY: usize = 64 * 1024;

/// Cached style state for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellStyle {
    fg: PackedRgba,
    bg: PackedRgba,
    attrs: StyleFlags,
}

impl CellStyle {
    fn from_cell(cell: &Cell) -> Self {
        Self {
            fg: cell.fg,
            bg: cell.bg,
            attrs: cell.attrs.flags(),
        }
    }
}

/// State-tracked frame presenter.
#[derive(Debug)]
pub struct Presenter<W: Write> {
    writer: BufWriter<W>,
    current_style: Option<CellStyle>,
}

impl<W: Write> Presenter<W> {
    /// Create a presenter writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            current_style: None,
        }
    }

    /// Write the whole frame, position the cursor, and flush.
    pub fn present(&mut self, frame: &Frame) -> io::Result<()> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "present",
            width = frame.width(),
            height = frame.height()
        )
        .entered();

        queue!(self.writer, cursor::Hide)?;
        self.current_style = None;

        let buffer = &frame.buffer;
        for y in 0..buffer.height() {
            queue!(self.writer, cursor::MoveTo(0, y))?;
            for x in 0..buffer.width() {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                if cell.is_continuation() {
                    continue;
                }
                self.emit_style(cell)?;
                let ch = cell.content.as_char().unwrap_or(' ');
                queue!(self.writer, Print(ch))?;
            }
        }

        queue!(self.writer, SetAttribute(Attribute::Reset))?;
        self.current_style = None;

        if let Some((x, y)) = frame.cursor_position {
            queue!(self.writer, cursor::MoveTo(x, y), cursor::Show)?;
        }
        self.writer.flush()
    }

    fn emit_style(&mut self, cell: &Cell) -> io::Result<()> {
        let next = CellStyle::from_cell(cell);
        if self.current_style == Some(next) {
            return Ok(());
        }

        let attrs_changed = self.current_style.is_none_or(|prev| prev.attrs != next.attrs);
        if attrs_changed {
            // Reset clears colors too, so they must be re-emitted below.
            queue!(self.writer, SetAttribute(Attribute::Reset))?;
            for (flag, attr) in ATTRIBUTE_MAP {
                if next.attrs.contains(flag) {
                    queue!(self.writer, SetAttribute(attr))?;
                }
            }
        }

        let prev = if attrs_changed { None } else { self.current_style };
        if prev.is_none_or(|p| p.fg != next.fg) {
            queue!(self.writer, SetForegroundColor(to_color(next.fg)))?;
        }
        if prev.is_none_or(|p| p.bg != next.bg) {
            queue!(self.writer, SetBackgroundColor(to_color(next.bg)))?;
        }

        self.current_style = Some(next);
        Ok(())
    }

    /// Consume the presenter and return the inner writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

const ATTRIBUTE_MAP: [(StyleFlags, Attribute); 6] = [
    (StyleFlags::BOLD, Attribute::Bold),
    (StyleFlags::DIM, Attribute::Dim),
    (StyleFlags::ITALIC, Attribute::Italic),
    (StyleFlags::UNDERLINE, Attribute::Underlined),
    (StyleFlags::REVERSE, Attribute::Reverse),
    (StyleFlags::STRIKETHROUGH, Attribute::CrossedOut),
];

/// Map a packed color to a crossterm color. Fully transparent means "use
/// the terminal default".
fn to_color(c: PackedRgba) -> Color {
    if c.a() == 0 {
        Color::Reset
    } else {
        Color::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}
