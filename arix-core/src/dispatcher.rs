//! Dispatcher core traits.

use crate::{error::DispatchError, value::Value};
use std::future::Future;

/// A dispatcher that routes an argument list to one handler by its length.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch argument lists",
    label = "missing `Dispatcher` implementation",
    note = "Implement `Dispatcher` to route calls by arity."
)]
pub trait Dispatcher: Send + Sync {
    /// Route `args` to the handler for `args.len()` and return its result.
    fn dispatch(&self, args: &[Value]) -> Result<Value, DispatchError>;

    /// Route an already collected argument list.
    ///
    /// Must select the same handler and produce the same result as
    /// [`Dispatcher::dispatch`] for identical input.
    fn dispatch_from_list(&self, args: Vec<Value>) -> Result<Value, DispatchError> {
        self.dispatch(&args)
    }
}

/// Async entry point for callers that drive many dispatches concurrently.
///
/// Every [`Dispatcher`] implements this; dispatch itself never suspends, so
/// the returned future is always immediately ready.
pub trait AsyncDispatcher: Send + Sync {
    /// Dispatch `args` asynchronously.
    fn dispatch_async<'a>(
        &'a self,
        args: &'a [Value],
    ) -> impl Future<Output = Result<Value, DispatchError>> + Send + 'a;
}

impl<T> AsyncDispatcher for T
where
    T: Dispatcher,
{
    fn dispatch_async<'a>(
        &'a self,
        args: &'a [Value],
    ) -> impl Future<Output = Result<Value, DispatchError>> + Send + 'a {
        std::future::ready(self.dispatch(args))
    }
}
