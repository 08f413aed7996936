//! The `bar` handler family.
//!
//! `bar` is one callable name with three implementations:
//!
//! | Handler | Arity | Result |
//! |---------|-------|--------|
//! | [`Bar::bar_1`] | 1 | `"Bar_1"` |
//! | [`Bar::bar_2`] | 2 | `"Bar_2"` |
//! | [`Bar::bar_2_va`] | 2 + tail | `"Bar_2_VA"` |
//!
//! Each handler writes its arguments to the [`Diagnostics`] sink and returns
//! its tag. Calls with no arguments are rejected.

use crate::{diagnostics::Diagnostics, dispatcher::ArityDispatcher};
use arix_core::{DispatchError, Dispatcher, Value};

/// Tag returned by the unary handler.
pub const BAR_1: &str = "Bar_1";
/// Tag returned by the binary handler.
pub const BAR_2: &str = "Bar_2";
/// Tag returned by the variadic handler.
pub const BAR_2_VA: &str = "Bar_2_VA";

/// Dispatches `bar` calls by arity.
#[derive(Clone, Debug)]
pub struct Bar {
    diagnostics: Diagnostics,
    dispatcher: ArityDispatcher,
}

impl Bar {
    /// Create a `Bar` that prints diagnostics to standard output.
    pub fn new() -> Self {
        Self::with_diagnostics(Diagnostics::Stdout)
    }

    /// Create a `Bar` writing diagnostics to `diagnostics`.
    pub fn with_diagnostics(diagnostics: Diagnostics) -> Self {
        let (d1, d2, d3) = (diagnostics.clone(), diagnostics.clone(), diagnostics.clone());
        let dispatcher = ArityDispatcher::builder()
            .unary(move |x| Ok(bar_1(&d1, x)))
            .binary(move |x, y| Ok(bar_2(&d2, x, y)))
            .variadic(move |x, y, rest| Ok(bar_2_va(&d3, x, y, rest)))
            .build();
        Self {
            diagnostics,
            dispatcher,
        }
    }

    /// Call `bar` with the arguments written out at the call site.
    pub fn bar(&self, args: &[Value]) -> Result<Value, DispatchError> {
        self.dispatcher.dispatch(args)
    }

    /// Call `bar` with an already collected argument list.
    pub fn bar_apply_to(&self, args: &[Value]) -> Result<Value, DispatchError> {
        self.dispatcher.apply_to(args)
    }

    /// The one-argument implementation.
    pub fn bar_1(&self, x: &Value) -> Value {
        bar_1(&self.diagnostics, x)
    }

    /// The two-argument implementation.
    pub fn bar_2(&self, x: &Value, y: &Value) -> Value {
        bar_2(&self.diagnostics, x, y)
    }

    /// The variadic implementation. `rest` may be empty.
    pub fn bar_2_va(&self, x: &Value, y: &Value, rest: &[Value]) -> Value {
        bar_2_va(&self.diagnostics, x, y, rest)
    }

    /// The diagnostics sink.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

impl Default for Bar {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher for Bar {
    fn dispatch(&self, args: &[Value]) -> Result<Value, DispatchError> {
        self.bar(args)
    }

    fn dispatch_from_list(&self, args: Vec<Value>) -> Result<Value, DispatchError> {
        self.bar_apply_to(&args)
    }
}

fn bar_1(diagnostics: &Diagnostics, x: &Value) -> Value {
    diagnostics.emit(format!("{x}"));
    Value::from(BAR_1)
}

fn bar_2(diagnostics: &Diagnostics, x: &Value, y: &Value) -> Value {
    diagnostics.emit(format!("{x} {y}"));
    Value::from(BAR_2)
}

fn bar_2_va(diagnostics: &Diagnostics, x: &Value, y: &Value, rest: &[Value]) -> Value {
    let tail: Vec<String> = rest.iter().map(ToString::to_string).collect();
    diagnostics.emit(format!("{x} {y} [{}]", tail.join(" ")));
    Value::from(BAR_2_VA)
}
