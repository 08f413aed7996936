//! # Handlers
//!
//! A handler is the unit of behavior bound to one [`ArityClass`]. There is one
//! trait per shape, so a handler receives its arguments already decomposed:
//!
//! | Trait | Class | Arguments |
//! |-------|-------|-----------|
//! | [`UnaryHandler`] | `Unary` | `x` |
//! | [`BinaryHandler`] | `Binary` | `x, y` |
//! | [`VariadicHandler`] | `Variadic` | `x, y, rest` |
//!
//! Every trait has a blanket implementation for plain closures of the matching
//! signature. Handlers must not keep state between calls that would make two
//! concurrent dispatches observe each other.
//!
//! [`ArityClass`]: crate::ArityClass

use crate::{error::BoxError, value::Value};

/// A handler for calls with exactly one argument.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a unary handler",
    label = "missing `UnaryHandler` implementation",
    note = "Closures of type `Fn(&Value) -> Result<Value, BoxError>` implement it automatically."
)]
pub trait UnaryHandler: Send + Sync + 'static {
    /// Executes the handler.
    fn call(&self, x: &Value) -> Result<Value, BoxError>;
}

/// A handler for calls with exactly two arguments.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a binary handler",
    label = "missing `BinaryHandler` implementation",
    note = "Closures of type `Fn(&Value, &Value) -> Result<Value, BoxError>` implement it automatically."
)]
pub trait BinaryHandler: Send + Sync + 'static {
    /// Executes the handler.
    fn call(&self, x: &Value, y: &Value) -> Result<Value, BoxError>;
}

/// A handler for two fixed arguments plus an ordered tail.
///
/// The tail may be empty when the handler is invoked directly; a dispatcher
/// only routes here when at least one tail element is present.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a variadic handler",
    label = "missing `VariadicHandler` implementation",
    note = "Closures of type `Fn(&Value, &Value, &[Value]) -> Result<Value, BoxError>` implement it automatically."
)]
pub trait VariadicHandler: Send + Sync + 'static {
    /// Executes the handler.
    fn call(&self, x: &Value, y: &Value, rest: &[Value]) -> Result<Value, BoxError>;
}

// Blanket impls for closures

impl<F> UnaryHandler for F
where
    F: Fn(&Value) -> Result<Value, BoxError> + Send + Sync + 'static,
{
    fn call(&self, x: &Value) -> Result<Value, BoxError> {
        (self)(x)
    }
}

impl<F> BinaryHandler for F
where
    F: Fn(&Value, &Value) -> Result<Value, BoxError> + Send + Sync + 'static,
{
    fn call(&self, x: &Value, y: &Value) -> Result<Value, BoxError> {
        (self)(x, y)
    }
}

impl<F> VariadicHandler for F
where
    F: Fn(&Value, &Value, &[Value]) -> Result<Value, BoxError> + Send + Sync + 'static,
{
    fn call(&self, x: &Value, y: &Value, rest: &[Value]) -> Result<Value, BoxError> {
        (self)(x, y, rest)
    }
}
