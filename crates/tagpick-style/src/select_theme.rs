#![forbid(unsafe_code)]

//! Styles for the multi-select control and its dropdown rows.

use crate::Style;
use tagpick_render::cell::PackedRgba;

/// Built-in select theme identifiers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub enum SelectPresetId {
    /// Dark background, blue accents.
    #[default]
    Dusk,
    /// Light background for bright terminals.
    Paper,
}

/// Visual styling for `MultiSelect` and `SelectList`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStyle {
    /// Field caption above the control.
    pub caption: Style,
    /// Control border while blurred.
    pub border: Style,
    /// Control border while the input has focus.
    pub border_focused: Style,
    /// Selected-value chip.
    pub chip: Style,
    /// The removal icon inside a chip.
    pub chip_remove: Style,
    /// Search text.
    pub input: Style,
    /// Placeholder text (shown while nothing is selected).
    pub placeholder: Style,
    /// Dropdown border.
    pub dropdown_border: Style,
    /// Plain option row.
    pub item: Style,
    /// Selected option row.
    pub item_selected: Style,
    /// Row under the keyboard cursor.
    pub item_active: Style,
    /// Row under the pointer.
    pub item_hover: Style,
    /// Check mark on selected rows.
    pub check: Style,
}

impl Default for SelectStyle {
    fn default() -> Self {
        Self::dusk()
    }
}

impl SelectStyle {
    /// Build a theme from a preset identifier.
    #[must_use]
    pub fn preset(preset: SelectPresetId) -> Self {
        match preset {
            SelectPresetId::Dusk => Self::dusk(),
            SelectPresetId::Paper => Self::paper(),
        }
    }

    /// Dark theme.
    #[must_use]
    pub fn dusk() -> Self {
        // Contrast against bg(30,30,40):
        // - item (190,190,200) ≈ 9.5:1 (AAA)
        // - chip text (235,240,255) on (40,60,100) ≈ 10:1 (AAA)
        // - placeholder (130,130,150) ≈ 4.6:1 (AA)
        Self {
            caption: Style::new().fg(PackedRgba::rgb(220, 220, 230)).bold(),
            border: Style::new().fg(PackedRgba::rgb(100, 100, 120)),
            border_focused: Style::new().fg(PackedRgba::rgb(96, 165, 250)),
            chip: Style::new()
                .fg(PackedRgba::rgb(235, 240, 255))
                .bg(PackedRgba::rgb(40, 60, 100))
                .bold(),
            chip_remove: Style::new()
                .fg(PackedRgba::rgb(200, 210, 235))
                .bg(PackedRgba::rgb(40, 60, 100)),
            input: Style::new().fg(PackedRgba::rgb(220, 220, 230)),
            placeholder: Style::new().fg(PackedRgba::rgb(130, 130, 150)),
            dropdown_border: Style::new().fg(PackedRgba::rgb(90, 90, 110)),
            item: Style::new().fg(PackedRgba::rgb(190, 190, 200)),
            item_selected: Style::new()
                .fg(PackedRgba::rgb(235, 240, 255))
                .bg(PackedRgba::rgb(40, 60, 100))
                .bold(),
            item_active: Style::new().bg(PackedRgba::rgb(60, 60, 75)),
            item_hover: Style::new().bg(PackedRgba::rgb(50, 50, 62)),
            check: Style::new().fg(PackedRgba::rgb(120, 190, 255)),
        }
    }

    /// Light theme.
    #[must_use]
    pub fn paper() -> Self {
        Self {
            caption: Style::new().fg(PackedRgba::rgb(30, 30, 40)).bold(),
            border: Style::new().fg(PackedRgba::rgb(160, 160, 170)),
            border_focused: Style::new().fg(PackedRgba::rgb(37, 99, 235)),
            chip: Style::new()
                .fg(PackedRgba::rgb(20, 30, 60))
                .bg(PackedRgba::rgb(219, 234, 254))
                .bold(),
            chip_remove: Style::new()
                .fg(PackedRgba::rgb(60, 60, 70))
                .bg(PackedRgba::rgb(219, 234, 254)),
            input: Style::new().fg(PackedRgba::rgb(30, 30, 40)),
            placeholder: Style::new().fg(PackedRgba::rgb(110, 110, 120)),
            dropdown_border: Style::new().fg(PackedRgba::rgb(200, 200, 210)),
            item: Style::new().fg(PackedRgba::rgb(40, 40, 50)),
            item_selected: Style::new()
                .fg(PackedRgba::rgb(20, 30, 60))
                .bg(PackedRgba::rgb(219, 234, 254))
                .bold(),
            item_active: Style::new().bg(PackedRgba::rgb(229, 231, 235)),
            item_hover: Style::new().bg(PackedRgba::rgb(240, 241, 243)),
            check: Style::new().fg(PackedRgba::rgb(30, 58, 138)),
        }
    }
}
