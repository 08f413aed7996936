//! Static dispatch table.
//!
//! A [`DispatchTable`] holds at most one handler per [`ArityClass`]. It is
//! filled once by [`ArityDispatcherBuilder`](crate::dispatcher::ArityDispatcherBuilder)
//! and never changes afterwards.

use arix_core::{
    ArityClass, BinaryHandler, DispatchError, UnaryHandler, Value, VariadicHandler,
};
use std::sync::Arc;

/// A handler stored in a table slot, tagged with its shape.
#[derive(Clone)]
pub enum Entry {
    /// Handler for exactly one argument.
    Unary(Arc<dyn UnaryHandler>),
    /// Handler for exactly two arguments.
    Binary(Arc<dyn BinaryHandler>),
    /// Handler for two fixed arguments plus a tail.
    Variadic(Arc<dyn VariadicHandler>),
}

impl Entry {
    /// The class this entry serves.
    pub const fn class(&self) -> ArityClass {
        match self {
            Entry::Unary(_) => ArityClass::Unary,
            Entry::Binary(_) => ArityClass::Binary,
            Entry::Variadic(_) => ArityClass::Variadic,
        }
    }

    /// Unpack `args` into this entry's shape and invoke the handler.
    ///
    /// Returns [`DispatchError::UnsupportedArity`] when `args` does not fit
    /// the shape. A variadic entry accepts an empty tail.
    pub fn apply(&self, args: &[Value]) -> Result<Value, DispatchError> {
        let result = match (self, args) {
            (Entry::Unary(h), [x]) => UnaryHandler::call(&**h, x),
            (Entry::Binary(h), [x, y]) => BinaryHandler::call(&**h, x, y),
            (Entry::Variadic(h), [x, y, rest @ ..]) => VariadicHandler::call(&**h, x, y, rest),
            _ => {
                return Err(DispatchError::UnsupportedArity { arity: args.len() });
            }
        };
        result.map_err(|source| DispatchError::Handler {
            class: self.class(),
            source,
        })
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Entry").field(&self.class()).finish()
    }
}

/// One slot per [`ArityClass`].
#[derive(Clone, Debug, Default)]
pub struct DispatchTable {
    slots: [Option<Entry>; ArityClass::COUNT],
}

impl DispatchTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `entry` in its class slot, returning the entry it replaced.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.slots[entry.class().index()].replace(entry)
    }

    /// The entry registered for `class`.
    pub fn entry(&self, class: ArityClass) -> Option<&Entry> {
        self.slots[class.index()].as_ref()
    }

    /// The unary handler, if registered.
    pub fn unary(&self) -> Option<&dyn UnaryHandler> {
        match self.entry(ArityClass::Unary) {
            Some(Entry::Unary(h)) => Some(&**h),
            _ => None,
        }
    }

    /// The binary handler, if registered.
    pub fn binary(&self) -> Option<&dyn BinaryHandler> {
        match self.entry(ArityClass::Binary) {
            Some(Entry::Binary(h)) => Some(&**h),
            _ => None,
        }
    }

    /// The variadic handler, if registered.
    pub fn variadic(&self) -> Option<&dyn VariadicHandler> {
        match self.entry(ArityClass::Variadic) {
            Some(Entry::Variadic(h)) => Some(&**h),
            _ => None,
        }
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Whether no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
