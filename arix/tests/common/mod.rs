#![allow(dead_code)]

use arix::{ArityDispatcher, Bar, Diagnostics, Value, testing::RecordingHandler};

// ============================================================================
// Fixtures
// ============================================================================

/// A dispatcher with one recorder per class, so every call shows which
/// handler ran and what it received.
pub struct Recorders {
    pub unary: RecordingHandler,
    pub binary: RecordingHandler,
    pub variadic: RecordingHandler,
    pub dispatcher: ArityDispatcher,
}

impl Recorders {
    pub fn new() -> Self {
        let unary = RecordingHandler::new("unary");
        let binary = RecordingHandler::new("binary");
        let variadic = RecordingHandler::new("variadic");
        let dispatcher = ArityDispatcher::builder()
            .unary_handler(unary.clone())
            .binary_handler(binary.clone())
            .variadic_handler(variadic.clone())
            .build();
        Self {
            unary,
            binary,
            variadic,
            dispatcher,
        }
    }

    /// Call counts as `(unary, binary, variadic)`.
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.unary.count(), self.binary.count(), self.variadic.count())
    }
}

pub fn recording_bar() -> Bar {
    Bar::with_diagnostics(Diagnostics::recording())
}

/// `n` integer arguments `0, 1, .., n - 1`.
pub fn ints(n: i64) -> Vec<Value> {
    (0..n).map(Value::Int).collect()
}
