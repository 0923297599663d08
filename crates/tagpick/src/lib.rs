#![forbid(unsafe_code)]

//! tagpick public facade crate.
//!
//! Re-exports the widget, rendering and event types a host needs to embed a
//! [`MultiSelect`] tag picker, plus a small prelude.
//!
//! ```
//! use tagpick::prelude::*;
//!
//! let props = MultiSelectProps::new("colors", ["Red", "Blue"]).placeholder("Pick colors");
//! let picker = tagpick::multi_select(props)?;
//!
//! let mut frame = Frame::with_hit_grid(30, 4);
//! picker.render(Rect::new(0, 0, 30, 4), &mut frame);
//! assert!(frame.buffer.row_text(1).contains("Pick colors"));
//! # Ok::<(), tagpick::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use tagpick_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
    PasteEvent,
};
pub use tagpick_core::geometry::{Rect, Sides};

// --- Render re-exports -----------------------------------------------------

pub use tagpick_render::buffer::Buffer;
pub use tagpick_render::cell::{Cell, CellAttrs, PackedRgba, StyleFlags};
pub use tagpick_render::frame::{Frame, HitData, HitId, HitRegion};
#[cfg(feature = "crossterm")]
pub use tagpick_render::presenter::Presenter;

// --- Style re-exports ------------------------------------------------------

pub use tagpick_style::{SelectPresetId, SelectStyle, Style};

// --- Widget re-exports -----------------------------------------------------

pub use tagpick_widgets::{
    BorderType, FieldSize, InputWidth, MultiSelect, MultiSelectProps, PropsError, SearchInput,
    SelectList, SelectListEvent, SelectListItem, SelectListState, SelectOption,
    SelectableOption, StatefulWidget, ValueChange, Widget,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tagpick hosts.
#[derive(Debug)]
pub enum Error {
    /// Picker props failed validation.
    Props(PropsError),
    /// I/O failure during terminal operations.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Props(err) => write!(f, "invalid props: {err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Props(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<PropsError> for Error {
    fn from(err: PropsError) -> Self {
        Self::Props(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for tagpick APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Validate `props` and build a picker.
pub fn multi_select(props: MultiSelectProps) -> Result<MultiSelect> {
    Ok(MultiSelect::try_new(props)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, Event, Frame, HitId, KeyCode, KeyEvent, MouseEvent, MultiSelect, MultiSelectProps,
        Rect, Result, SelectStyle, StatefulWidget, Style, Widget,
    };

    pub use crate::{core, render, style, text, widgets};
}

pub use tagpick_core as core;
pub use tagpick_render as render;
pub use tagpick_style as style;
pub use tagpick_text as text;
pub use tagpick_widgets as widgets;
