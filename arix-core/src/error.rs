//! Error types for arix.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ArixError`] - Top-level error type for all arix operations
//! - [`DispatchError`] - Errors during dispatch
//! - [`TypeMismatch`] - Errors from numeric coercion
//! - [`ObjectError`] - Errors building key/value objects

use crate::{arity::ArityClass, value::ValueKind};
use thiserror::Error;

/// A boxed error type for handler failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all arix operations.
#[derive(Error, Debug)]
pub enum ArixError {
    /// An error occurred during dispatch.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A value could not be coerced.
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),

    /// An object could not be built.
    #[error("object error: {0}")]
    Object(#[from] ObjectError),
}

/// Errors that can occur during dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No handler is registered for the number of arguments supplied.
    #[error("invalid arity: {arity}")]
    UnsupportedArity {
        /// The number of arguments of the rejected call.
        arity: usize,
    },

    /// The selected handler failed.
    #[error("{class} handler failed")]
    Handler {
        /// The class of the handler that ran.
        class: ArityClass,
        /// The handler's error.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// Returns the rejected arity if this is an [`DispatchError::UnsupportedArity`].
    pub fn unsupported_arity(&self) -> Option<usize> {
        match self {
            DispatchError::UnsupportedArity { arity } => Some(*arity),
            DispatchError::Handler { .. } => None,
        }
    }
}

/// A value was not of a kind the coercion accepts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("type mismatch: expected {expected}, found {found}")]
pub struct TypeMismatch {
    /// The target of the coercion.
    pub expected: &'static str,
    /// The kind that was actually supplied.
    pub found: ValueKind,
}

/// Errors that can occur while building an object from key/value pairs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// A key position held something other than a string.
    #[error("key at position {index} is a {found}, expected string")]
    NonStringKey {
        /// Position of the offending key in the input.
        index: usize,
        /// The kind found there.
        found: ValueKind,
    },

    /// The input ended after a key.
    #[error("key {key:?} has no value")]
    MissingValue {
        /// The dangling key.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_arity_message_carries_arity() {
        let err = DispatchError::UnsupportedArity { arity: 0 };
        assert_eq!(err.to_string(), "invalid arity: 0");
        assert_eq!(err.unsupported_arity(), Some(0));
    }

    #[test]
    fn test_handler_error_keeps_source() {
        let err = DispatchError::Handler {
            class: ArityClass::Binary,
            source: "boom".into(),
        };
        assert_eq!(err.to_string(), "binary handler failed");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "boom");
        assert_eq!(err.unsupported_arity(), None);
    }

    #[test]
    fn test_top_level_conversion() {
        let err: ArixError = TypeMismatch {
            expected: "float",
            found: ValueKind::Str,
        }
        .into();
        assert_eq!(err.to_string(), "type mismatch: expected float, found string");
    }
}
