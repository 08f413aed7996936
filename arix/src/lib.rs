//! # arix - Runtime Arity Dispatch
//!
//! `arix` binds several implementations to one callable name and picks one at
//! runtime from the number of arguments in the call.
//!
//! ## Quick Start
//!
//! ```rust
//! use arix::{ArityDispatcher, Value};
//!
//! let area = ArityDispatcher::builder()
//!     // square
//!     .unary(|side| Ok(Value::Float(arix::coerce::double(side)?.powi(2))))
//!     // rectangle
//!     .binary(|w, h| Ok(Value::Float(arix::coerce::double(w)? * arix::coerce::double(h)?)))
//!     .build();
//!
//! assert_eq!(area.call((3,)).unwrap(), Value::Float(9.0));
//! assert_eq!(area.call((2, 1.5)).unwrap(), Value::Float(3.0));
//! assert!(area.call(()).is_err());
//! ```
//!
//! ## Routing
//!
//! More than two arguments go to the variadic handler, one to the unary
//! handler, two to the binary handler. Anything else, including a class with
//! no registered handler, is [`DispatchError::UnsupportedArity`].

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

#[allow(clippy::pub_use)]
pub use arix_core::{
    // Arity
    ArityClass,
    // Errors
    ArixError,
    // Dispatch
    AsyncDispatcher,
    // Handlers
    BinaryHandler,
    BoxError,
    DispatchError,
    Dispatcher,
    // Call-site packing
    IntoArgs,
    ObjectError,
    TypeMismatch,
    UnaryHandler,
    // Values
    Value,
    ValueKind,
    VariadicHandler,
    coerce,
};

#[allow(clippy::pub_use)]
pub use arix_std::{
    bar::{self, Bar},
    batch,
    diagnostics::Diagnostics,
    dispatch,
    dispatcher::{ArityDispatcher, ArityDispatcherBuilder},
    object,
    table::{DispatchTable, Entry},
};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::pub_use, clippy::wildcard_imports)]
    pub use arix_std::testing::*;
}

/// Prelude module - common imports for arix.
///
/// # Usage
///
/// ```rust,ignore
/// use arix::prelude::*;
/// ```
pub mod prelude {
    #[allow(clippy::pub_use)]
    pub use crate::{
        ArityClass, ArityDispatcher, BoxError, DispatchError, Dispatcher, IntoArgs, Value,
    };
}
