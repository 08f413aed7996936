//! # arix-core
//!
//! Core types for arity-based dispatch.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that defines handlers without needing the full `arix-std` dispatcher.
//!
//! # Pieces
//!
//! - [`Value`] - the closed set of dynamically typed argument values
//! - [`ArityClass`] - the routing key derived from an argument count
//! - [`UnaryHandler`], [`BinaryHandler`], [`VariadicHandler`] - handler shapes
//! - [`Dispatcher`] / [`AsyncDispatcher`] - dispatch entry points
//! - [`IntoArgs`] - call-site argument packing
//! - [`coerce`] - numeric coercion helpers
//!
//! # Error Types
//!
//! - [`ArixError`] - Top-level error type
//! - [`DispatchError`] - Routing errors
//! - [`TypeMismatch`] - Coercion errors
//! - [`ObjectError`] - Object construction errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod args;
mod arity;
pub mod coerce;
mod dispatcher;
mod error;
mod handler;
mod value;

// Re-exports
pub use args::IntoArgs;
pub use arity::ArityClass;
pub use dispatcher::{AsyncDispatcher, Dispatcher};
pub use error::{ArixError, BoxError, DispatchError, ObjectError, TypeMismatch};
pub use handler::{BinaryHandler, UnaryHandler, VariadicHandler};
pub use value::{Value, ValueKind};
