//! # arix-std
//!
//! Standard implementations for the arix arity dispatcher.
//!
//! This crate provides:
//! - **Dispatch**: [`dispatcher::ArityDispatcher`], [`dispatcher::ArityDispatcherBuilder`],
//!   [`table::DispatchTable`]
//! - **Reference handlers**: the [`bar::Bar`] family
//! - **Diagnostics**: [`diagnostics::Diagnostics`] sink for handler output
//! - **Objects**: [`object::create`], [`object::for_each`]
//! - **Batch dispatch**: [`batch::dispatch_all`]
//! - **Testing**: [`testing`] utilities

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
#[allow(clippy::pub_use)]
pub use arix_core;

// Modules
pub mod bar;
pub mod batch;
pub mod diagnostics;
pub mod dispatcher;
pub mod object;
pub mod table;
pub mod testing;

/// Dispatch a call written in direct call shape.
///
/// Each argument is converted with `Value::from`; the call routes through
/// [`Dispatcher::dispatch`](arix_core::Dispatcher::dispatch).
///
/// # Example
/// ```ignore
/// let bar = Bar::new();
/// assert_eq!(dispatch!(bar, 2, 3)?, Value::from("Bar_2"));
/// assert!(dispatch!(bar).is_err());
/// ```
#[macro_export]
macro_rules! dispatch {
    ($dispatcher:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::arix_core::Dispatcher as _;
        ($dispatcher).dispatch(&[$($crate::arix_core::Value::from($arg)),*])
    }};
}
