#![cfg(test)]

use std::sync::Arc;

use super::*;
use crate::util::error::{IndexOutOfBounds, KeyNotFound};
use crate::util::panic::panic_message;

#[test]
fn test_recorder_levels() {
    let recorder = Arc::new(Recorder::new());
    let diag = recorder.handle();

    diag.warn("first");
    diag.err("second");
    diag.warn("third");

    assert_eq!(recorder.warnings(), ["first", "third"]);
    assert_eq!(recorder.errors(), ["second"]);
    assert_eq!(
        recorder.records()[1],
        Record { level: Level::Error, message: String::from("second") },
        "Records should be kept in the order received."
    );

    recorder.clear();
    assert!(recorder.records().is_empty());

    let errors_only = Arc::new(Recorder::with_levels(false, true));
    let diag = errors_only.handle();
    diag.warn("dropped");
    diag.err("kept");
    assert_eq!(errors_only.records().len(), 1, "Disabled levels should be dropped.");
}

#[test]
fn test_fail_records_then_panics() {
    let recorder = Arc::new(Recorder::new());
    let diag = recorder.handle();

    let message = panic_message::<()>(|| diag.fail(IndexOutOfBounds { index: 7, len: 2 }));
    assert_eq!(
        message.as_deref(),
        Some("Index 7 out of bounds for collection with 2 elements!")
    );
    assert_eq!(
        recorder.errors(),
        ["Index 7 out of bounds for collection with 2 elements!"],
        "The error should be recorded before panicking."
    );

    let message = panic_message::<()>(|| diag.fail(KeyNotFound { key: String::from("\"b\"") }));
    assert_eq!(message.as_deref(), Some("Key \"b\" not found in association list!"));
}

#[test]
fn test_silent_still_panics() {
    let diag = Diagnostics::Silent;
    diag.warn("ignored");
    diag.err("ignored");

    assert!(panic_message::<()>(|| diag.fail(IndexOutOfBounds { index: 0, len: 0 })).is_some());
    assert!(panic_message::<()>(|| Diagnostics::Log.fail(IndexOutOfBounds { index: 1, len: 0 })).is_some());
}
