//! Numeric coercion used by handlers.

use arix::{
    ArityDispatcher, DispatchError, TypeMismatch, Value, ValueKind,
    coerce::{double, long, plus_one},
};

#[test]
fn test_plus_one() {
    assert_eq!(plus_one(&Value::from(1)).unwrap(), 2.0);
    assert_eq!(plus_one(&Value::from(1.5)).unwrap(), 2.5);
    assert_eq!(plus_one(&Value::from(41_i64)).unwrap(), 42.0);
    assert_eq!(plus_one(&Value::from(0.5_f32)).unwrap(), 1.5);
}

#[test]
fn test_narrow_integers_coerce() {
    assert_eq!(double(&Value::from(7_u8)).unwrap(), 7.0);
    assert_eq!(long(&Value::from(-7_i16)).unwrap(), -7);
    assert_eq!(long(&Value::from(3.99)).unwrap(), 3);
}

#[test]
fn test_non_numeric_is_type_mismatch() {
    let err = double(&Value::from("1")).unwrap_err();
    assert_eq!(
        err,
        TypeMismatch {
            expected: "float",
            found: ValueKind::Str,
        }
    );
    assert_eq!(long(&Value::from(vec![1])).unwrap_err().found, ValueKind::List);
}

#[test]
fn test_type_mismatch_surfaces_through_dispatch() {
    let sum = ArityDispatcher::builder()
        .binary(|x, y| Ok(Value::Float(double(x)? + double(y)?)))
        .build();

    assert_eq!(sum.call((1, 2.5)).unwrap(), Value::Float(3.5));

    let source = match sum.call((1, "x")) {
        Err(DispatchError::Handler { source, .. }) => source,
        other => panic!("expected handler error, got {other:?}"),
    };
    let mismatch = source.downcast_ref::<TypeMismatch>().unwrap();
    assert_eq!(mismatch.found, ValueKind::Str);
}
