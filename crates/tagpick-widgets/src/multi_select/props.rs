#![forbid(unsafe_code)]

//! Construction inputs for [`MultiSelect`](super::MultiSelect).

use std::collections::HashSet;
use std::fmt;

use super::options::SelectOption;

/// Change-notification callback. Receives the full value after each commit.
pub type ValueChange = Box<dyn FnMut(&[String])>;

/// Text sizing for the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldSize {
    #[default]
    Normal,
    /// Compact: no horizontal padding inside chips and rows.
    Small,
}

impl FieldSize {
    /// Horizontal padding, in cells, on each side of chips and rows.
    pub const fn padding(self) -> u16 {
        match self {
            Self::Normal => 1,
            Self::Small => 0,
        }
    }
}

/// Props for a [`MultiSelect`](super::MultiSelect).
pub struct MultiSelectProps {
    /// Field identifier.
    pub name: String,
    /// Visible caption.
    pub label: Option<String>,
    pub size: FieldSize,
    /// Selectable catalog.
    pub option_list: Vec<SelectOption>,
    /// Shown while the value is empty.
    pub placeholder: Option<String>,
    /// Initial value.
    pub value: Vec<String>,
    /// Fired on every commit or removal.
    pub value_change: Option<ValueChange>,
}

impl MultiSelectProps {
    pub fn new<I, O>(name: impl Into<String>, option_list: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<SelectOption>,
    {
        Self {
            name: name.into(),
            label: None,
            size: FieldSize::Normal,
            option_list: option_list.into_iter().map(Into::into).collect(),
            placeholder: None,
            value: Vec::new(),
            value_change: None,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn value<I, S>(mut self, value: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value = value.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn on_value_change(mut self, callback: impl FnMut(&[String]) + 'static) -> Self {
        self.value_change = Some(Box::new(callback));
        self
    }

    /// Check that the props describe a usable field.
    pub fn validate(&self) -> Result<(), PropsError> {
        if self.name.trim().is_empty() {
            return Err(PropsError::EmptyName);
        }
        let mut seen = HashSet::with_capacity(self.option_list.len());
        for option in &self.option_list {
            if !seen.insert(option.label.as_str()) {
                return Err(PropsError::DuplicateOption(option.label.clone()));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for MultiSelectProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiSelectProps")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("size", &self.size)
            .field("option_list", &self.option_list)
            .field("placeholder", &self.placeholder)
            .field("value", &self.value)
            .field("value_change", &self.value_change.is_some())
            .finish()
    }
}

/// Invalid [`MultiSelectProps`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropsError {
    /// `name` is empty or whitespace.
    EmptyName,
    /// Two catalog entries share a label.
    DuplicateOption(String),
}

impl fmt::Display for PropsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "multi-select name must not be empty"),
            Self::DuplicateOption(label) => write!(f, "duplicate option label: {label:?}"),
        }
    }
}

impl std::error::Error for PropsError {}
