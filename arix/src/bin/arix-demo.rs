//! Replays a fixed sequence of `bar` calls and prints each result.
//!
//! The last call has no arguments; it is rejected and the process exits with
//! a failure code. Set `RUST_LOG=debug` to see routing decisions.

use arix::{ArixError, Bar, Value, coerce::plus_one, dispatch};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "demo aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ArixError> {
    println!("plus_one(1) = {}", plus_one(&Value::from(1))?);

    let bar = Bar::new();
    println!("{}", dispatch!(bar, 8)?);

    for xs in [vec![4, 5, 6, 7], vec![4], vec![8, 9]] {
        let args: Vec<Value> = xs.into_iter().map(Value::from).collect();
        println!("{}", bar.bar_apply_to(&args)?);
    }

    println!("{}", bar.bar_1(&Value::from(2)));
    println!("{}", bar.bar_2(&Value::from(2), &Value::from(3)));
    println!(
        "{}",
        bar.bar_2_va(&Value::from(2), &Value::from(3), &[Value::from(4)])
    );

    println!("{}", dispatch!(bar, 2)?);
    println!("{}", dispatch!(bar, 2, 3)?);
    println!("{}", dispatch!(bar, 2, 3, 4)?);
    println!("{}", dispatch!(bar)?);
    Ok(())
}
