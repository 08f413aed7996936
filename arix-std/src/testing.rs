//! Testing utilities for arix.
//!
//! This module provides handlers that make routing easy to verify.
//!
//! # Features
//!
//! - [`RecordingHandler`]: records every argument list it receives
//! - [`CountingHandler`]: counts invocations
//!
//! Both implement all three handler shapes and return a fixed tag, so one
//! value can be registered for several classes of the same dispatcher.

use arix_core::{BinaryHandler, BoxError, UnaryHandler, Value, VariadicHandler};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records the arguments of every call.
///
/// Variadic calls are recorded flattened: `x, y` followed by the tail.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new("seen");
/// let dispatcher = ArityDispatcher::builder()
///     .unary_handler(recorder.clone())
///     .build();
///
/// dispatcher.call((1,))?;
/// assert_eq!(recorder.calls(), vec![vec![Value::Int(1)]]);
/// ```
#[derive(Clone)]
pub struct RecordingHandler {
    calls: Arc<Mutex<Vec<Vec<Value>>>>,
    tag: Value,
}

impl RecordingHandler {
    /// Create a recording handler that returns `tag`.
    pub fn new(tag: impl Into<Value>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            tag: tag.into(),
        }
    }

    /// Get a clone of the recorded argument lists.
    pub fn calls(&self) -> Vec<Vec<Value>> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, args: Vec<Value>) -> Result<Value, BoxError> {
        self.calls.lock().unwrap().push(args);
        Ok(self.tag.clone())
    }
}

impl UnaryHandler for RecordingHandler {
    fn call(&self, x: &Value) -> Result<Value, BoxError> {
        self.record(vec![x.clone()])
    }
}

impl BinaryHandler for RecordingHandler {
    fn call(&self, x: &Value, y: &Value) -> Result<Value, BoxError> {
        self.record(vec![x.clone(), y.clone()])
    }
}

impl VariadicHandler for RecordingHandler {
    fn call(&self, x: &Value, y: &Value, rest: &[Value]) -> Result<Value, BoxError> {
        let mut args = Vec::with_capacity(rest.len() + 2);
        args.push(x.clone());
        args.push(y.clone());
        args.extend_from_slice(rest);
        self.record(args)
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
#[derive(Clone)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
    tag: Value,
}

impl CountingHandler {
    /// Create a counting handler that returns `tag`.
    pub fn new(tag: impl Into<Value>) -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            tag: tag.into(),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    fn hit(&self) -> Result<Value, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(self.tag.clone())
    }
}

impl UnaryHandler for CountingHandler {
    fn call(&self, _x: &Value) -> Result<Value, BoxError> {
        self.hit()
    }
}

impl BinaryHandler for CountingHandler {
    fn call(&self, _x: &Value, _y: &Value) -> Result<Value, BoxError> {
        self.hit()
    }
}

impl VariadicHandler for CountingHandler {
    fn call(&self, _x: &Value, _y: &Value, _rest: &[Value]) -> Result<Value, BoxError> {
        self.hit()
    }
}
