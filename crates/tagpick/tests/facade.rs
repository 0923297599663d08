#![forbid(unsafe_code)]

use std::error::Error as _;

use tagpick::prelude::*;
use tagpick::{Error, PropsError};

#[test]
fn builds_valid_picker() {
    let picker = tagpick::multi_select(MultiSelectProps::new("tags", ["a", "b"]).value(["b"]))
        .expect("valid props");
    assert_eq!(picker.name(), "tags");
    assert_eq!(picker.value(), ["b"]);
}

#[test]
fn rejects_invalid_props() {
    let err = tagpick::multi_select(MultiSelectProps::new("tags", ["a", "a"])).unwrap_err();
    assert!(matches!(err, Error::Props(PropsError::DuplicateOption(ref l)) if l == "a"));
    assert_eq!(err.to_string(), "invalid props: duplicate option label: \"a\"");
    assert!(err.source().is_some());
}

#[test]
fn io_errors_convert() {
    let io = std::io::Error::other("tty gone");
    let err: Error = io.into();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.to_string(), "tty gone");
}

#[test]
fn prelude_renders() {
    let picker = tagpick::multi_select(MultiSelectProps::new("tags", ["a"]).label("Tags"))
        .expect("valid props");
    let mut frame = Frame::new(20, 4);
    picker.render(Rect::new(0, 0, 20, 4), &mut frame);
    assert!(frame.buffer.row_text(0).starts_with("Tags"));
}
