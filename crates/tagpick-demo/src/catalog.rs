#![forbid(unsafe_code)]

//! Option catalogs for the demo.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tagpick::SelectOption;

/// One catalog entry as written in a JSON file: either a bare label or an
/// object with a `label` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Entry {
    Label(String),
    Object { label: String },
}

impl From<Entry> for SelectOption {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Label(label) | Entry::Object { label } => SelectOption::new(label),
        }
    }
}

/// Parse a JSON catalog.
pub fn parse(json: &str) -> io::Result<Vec<SelectOption>> {
    let entries: Vec<Entry> = serde_json::from_str(json)?;
    Ok(entries.into_iter().map(SelectOption::from).collect())
}

/// Read and parse a JSON catalog file.
pub fn load(path: &Path) -> io::Result<Vec<SelectOption>> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Catalog used when no file is given.
pub fn builtin() -> Vec<SelectOption> {
    [
        "Red", "Orange", "Yellow", "Green", "Blue", "Indigo", "Violet", "Black", "White",
        "Grey", "Teal", "Maroon",
    ]
    .into_iter()
    .map(SelectOption::from)
    .collect()
}
