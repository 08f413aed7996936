//! Concurrent callers sharing one dispatcher.

use arix::{Bar, Diagnostics, IntoArgs, Value, batch::dispatch_all, testing::CountingHandler};
use futures::future::join_all;
use std::sync::Arc;

#[tokio::test]
async fn test_dispatch_all_preserves_order() {
    let bar = Bar::with_diagnostics(Diagnostics::Silent);
    let calls = vec![
        (4, 5, 6, 7).into_args(),
        (4,).into_args(),
        (8, 9).into_args(),
        ().into_args(),
    ];

    let results = dispatch_all(&bar, &calls).await;

    let tags: Vec<Option<Value>> = results.into_iter().map(Result::ok).collect();
    assert_eq!(
        tags,
        vec![
            Some(Value::from("Bar_2_VA")),
            Some(Value::from("Bar_1")),
            Some(Value::from("Bar_2")),
            None,
        ]
    );
}

#[tokio::test]
async fn test_async_dispatch_matches_sync() {
    use arix::{AsyncDispatcher, Dispatcher};

    let bar = Bar::with_diagnostics(Diagnostics::Silent);
    let calls: Vec<Vec<Value>> = (1..6).map(|n| (0..n).map(Value::Int).collect()).collect();

    let futures = calls.iter().map(|args| bar.dispatch_async(args));
    let async_results = join_all(futures).await;

    for (args, result) in calls.iter().zip(async_results) {
        assert_eq!(result.unwrap(), bar.dispatch(args).unwrap());
    }
}

#[test]
fn test_threads_share_dispatcher() {
    let counter = CountingHandler::new("hit");
    let dispatcher = Arc::new(
        arix::ArityDispatcher::builder()
            .unary_handler(counter.clone())
            .binary_handler(counter.clone())
            .variadic_handler(counter.clone())
            .build(),
    );

    std::thread::scope(|s| {
        for t in 0..4_i64 {
            let dispatcher = Arc::clone(&dispatcher);
            s.spawn(move || {
                for n in 1..=5 {
                    let args: Vec<Value> = (0..n).map(|i| Value::Int(t * 10 + i)).collect();
                    assert_eq!(dispatcher.dispatch(&args).unwrap(), Value::from("hit"));
                }
            });
        }
    });

    assert_eq!(counter.count(), 20);
}
