//! Concurrent batch dispatch.
//!
//! Drives many independent calls against one shared dispatcher. Handlers hold
//! no shared mutable state, so the calls never observe each other.

use arix_core::{AsyncDispatcher, DispatchError, Value};
use futures::future::join_all;

/// Dispatch every argument list in `calls` concurrently.
///
/// Results are returned in the order of `calls`; a failing call does not stop
/// the others.
///
/// # Example
///
/// ```rust,ignore
/// let results = dispatch_all(&bar, &[vec![Value::Int(8)], vec![]]).await;
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub async fn dispatch_all<D>(
    dispatcher: &D,
    calls: &[Vec<Value>],
) -> Vec<Result<Value, DispatchError>>
where
    D: AsyncDispatcher,
{
    join_all(calls.iter().map(|args| dispatcher.dispatch_async(args))).await
}
