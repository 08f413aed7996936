//! # Arity Dispatcher
//!
//! [`ArityDispatcher`] binds a fixed family of handlers under one entry point
//! and routes each call by the number of arguments it carries.
//!
//! # Routing
//!
//! | Arguments | Handler |
//! |-----------|---------|
//! | `n > 2` | variadic, with `args[0], args[1]` fixed and `args[2..]` as tail |
//! | `n == 1` | unary |
//! | `n == 2` | binary |
//! | otherwise | [`DispatchError::UnsupportedArity`] |
//!
//! A class with no registered handler is also reported as an unsupported arity.
//!
//! # Entry Points
//!
//! - [`ArityDispatcher::dispatch`] calls the selected handler directly with
//!   its positional arguments.
//! - [`ArityDispatcher::apply_to`] goes through the generic table entry,
//!   unpacking the list into whatever shape the entry has.
//!
//! Both select the same handler and return the same result.
//!
//! # Example
//!
//! ```rust
//! use arix_std::dispatcher::ArityDispatcher;
//! use arix_core::Value;
//!
//! let dispatcher = ArityDispatcher::builder()
//!     .unary(|_| Ok(Value::from("one")))
//!     .binary(|_, _| Ok(Value::from("two")))
//!     .variadic(|_, _, rest| Ok(Value::Int(rest.len() as i64)))
//!     .build();
//!
//! assert_eq!(dispatcher.call((8,)).unwrap(), Value::from("one"));
//! assert_eq!(dispatcher.call((1, 2, 3, 4)).unwrap(), Value::Int(2));
//! assert!(dispatcher.call(()).is_err());
//! ```

use crate::table::{DispatchTable, Entry};
use arix_core::{
    ArityClass, BinaryHandler, BoxError, DispatchError, Dispatcher, IntoArgs, UnaryHandler, Value,
    VariadicHandler,
};
use std::sync::Arc;

/// Routes calls to a unary, binary or variadic handler by argument count.
///
/// Cloning is cheap; handlers are shared.
#[derive(Clone, Debug)]
pub struct ArityDispatcher {
    table: DispatchTable,
}

impl ArityDispatcher {
    /// Start building a dispatcher.
    pub fn builder() -> ArityDispatcherBuilder {
        ArityDispatcherBuilder::new()
    }

    /// Create a dispatcher from a prepared table.
    pub fn from_table(table: DispatchTable) -> Self {
        Self { table }
    }

    /// The underlying table.
    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    /// Whether a handler is registered for `class`.
    pub fn handles(&self, class: ArityClass) -> bool {
        self.table.entry(class).is_some()
    }

    /// Route `args` to the handler for `args.len()`, calling it directly.
    pub fn dispatch(&self, args: &[Value]) -> Result<Value, DispatchError> {
        let class = resolve(args.len())?;

        let result = match (class, args) {
            (ArityClass::Variadic, [x, y, rest @ ..]) => self
                .table
                .variadic()
                .map(|h| VariadicHandler::call(h, x, y, rest)),
            (ArityClass::Unary, [x]) => self.table.unary().map(|h| UnaryHandler::call(h, x)),
            (ArityClass::Binary, [x, y]) => {
                self.table.binary().map(|h| BinaryHandler::call(h, x, y))
            }
            _ => None,
        };

        match result {
            Some(result) => result.map_err(|source| DispatchError::Handler { class, source }),
            None => Err(unsupported(args.len())),
        }
    }

    /// Route `args` through the generic table entry for their length.
    pub fn apply_to(&self, args: &[Value]) -> Result<Value, DispatchError> {
        let class = resolve(args.len())?;
        let entry = self
            .table
            .entry(class)
            .ok_or_else(|| unsupported(args.len()))?;
        entry.apply(args)
    }

    /// Pack `args` and dispatch them.
    pub fn call(&self, args: impl IntoArgs) -> Result<Value, DispatchError> {
        self.dispatch(&args.into_args())
    }
}

impl Dispatcher for ArityDispatcher {
    fn dispatch(&self, args: &[Value]) -> Result<Value, DispatchError> {
        ArityDispatcher::dispatch(self, args)
    }

    fn dispatch_from_list(&self, args: Vec<Value>) -> Result<Value, DispatchError> {
        self.apply_to(&args)
    }
}

fn resolve(arity: usize) -> Result<ArityClass, DispatchError> {
    let class = ArityClass::resolve(arity).ok_or_else(|| unsupported(arity))?;
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(arity, %class, "dispatching call");
    }
    Ok(class)
}

fn unsupported(arity: usize) -> DispatchError {
    #[cfg(feature = "tracing")]
    {
        tracing::warn!(arity, "no handler for arity");
    }
    DispatchError::UnsupportedArity { arity }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for constructing an [`ArityDispatcher`].
///
/// Registering a second handler for the same class replaces the first.
#[derive(Default)]
pub struct ArityDispatcherBuilder {
    table: DispatchTable,
}

impl ArityDispatcherBuilder {
    /// Create a builder with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure for calls with one argument.
    pub fn unary<F>(self, f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.unary_handler(f)
    }

    /// Register a closure for calls with two arguments.
    pub fn binary<F>(self, f: F) -> Self
    where
        F: Fn(&Value, &Value) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.binary_handler(f)
    }

    /// Register a closure for calls with more than two arguments.
    pub fn variadic<F>(self, f: F) -> Self
    where
        F: Fn(&Value, &Value, &[Value]) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.variadic_handler(f)
    }

    /// Register a [`UnaryHandler`].
    pub fn unary_handler<H: UnaryHandler>(mut self, handler: H) -> Self {
        self.table.insert(Entry::Unary(Arc::new(handler)));
        self
    }

    /// Register a [`BinaryHandler`].
    pub fn binary_handler<H: BinaryHandler>(mut self, handler: H) -> Self {
        self.table.insert(Entry::Binary(Arc::new(handler)));
        self
    }

    /// Register a [`VariadicHandler`].
    pub fn variadic_handler<H: VariadicHandler>(mut self, handler: H) -> Self {
        self.table.insert(Entry::Variadic(Arc::new(handler)));
        self
    }

    /// Build the dispatcher.
    pub fn build(self) -> ArityDispatcher {
        ArityDispatcher::from_table(self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arix_core::coerce::double;

    fn tagged() -> ArityDispatcher {
        ArityDispatcher::builder()
            .unary(|x| Ok(Value::from(vec![Value::from("unary"), x.clone()])))
            .binary(|x, y| {
                Ok(Value::from(vec![Value::from("binary"), x.clone(), y.clone()]))
            })
            .variadic(|x, y, rest| {
                let mut out = vec![Value::from("variadic"), x.clone(), y.clone()];
                out.push(Value::List(rest.to_vec()));
                Ok(Value::List(out))
            })
            .build()
    }

    #[test]
    fn test_routes_each_class() {
        let d = tagged();
        assert_eq!(
            d.call((8,)).unwrap(),
            Value::from(vec![Value::from("unary"), Value::Int(8)])
        );
        assert_eq!(
            d.call((2, 3)).unwrap(),
            Value::from(vec![Value::from("binary"), Value::Int(2), Value::Int(3)])
        );
        assert_eq!(
            d.call((2, 3, 4, 5)).unwrap(),
            Value::List(vec![
                Value::from("variadic"),
                Value::Int(2),
                Value::Int(3),
                Value::from(vec![4, 5]),
            ])
        );
    }

    #[test]
    fn test_zero_arguments_is_unsupported() {
        let err = tagged().dispatch(&[]).unwrap_err();
        assert!(matches!(err, DispatchError::UnsupportedArity { arity: 0 }));
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn test_missing_handler_is_unsupported() {
        let d = ArityDispatcher::builder()
            .binary(|_, _| Ok(Value::Int(2)))
            .build();
        assert!(!d.handles(ArityClass::Unary));
        assert_eq!(d.call((1,)).unwrap_err().unsupported_arity(), Some(1));
        assert_eq!(d.apply_to(&[Value::Int(1)]).unwrap_err().unsupported_arity(), Some(1));
        assert_eq!(d.call((1, 2, 3)).unwrap_err().unsupported_arity(), Some(3));
    }

    #[test]
    fn test_direct_and_table_paths_agree() {
        let d = tagged();
        for n in 0_i64..8 {
            let args: Vec<Value> = (0..n).map(Value::Int).collect();
            let direct = d.dispatch(&args).ok();
            let table = d.apply_to(&args).ok();
            assert_eq!(direct, table, "paths disagree for {n} arguments");
        }
    }

    #[test]
    fn test_handler_error_is_wrapped_with_class() {
        let d = ArityDispatcher::builder()
            .unary(|x| Ok(Value::Float(double(x)? * 2.0)))
            .build();
        assert_eq!(d.call((1.5,)).unwrap(), Value::Float(3.0));

        let err = d.call(("nope",)).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Handler {
                class: ArityClass::Unary,
                ..
            }
        ));
    }

    #[test]
    fn test_later_registration_replaces_earlier() {
        let d = ArityDispatcher::builder()
            .unary(|_| Ok(Value::Int(1)))
            .unary(|_| Ok(Value::Int(2)))
            .build();
        assert_eq!(d.call((0,)).unwrap(), Value::Int(2));
        assert_eq!(d.table().len(), 1);
    }
}
