//! Object helpers.

use arix::{
    ObjectError, Value,
    object::{create, for_each},
};
use std::collections::BTreeMap;

#[test]
fn test_create_and_iterate() {
    let obj = create(&[
        Value::from("name"),
        Value::from("bar"),
        Value::from("arity"),
        Value::Int(2),
        Value::from("tail"),
        Value::from(vec![4, 5]),
    ])
    .unwrap();

    let mut seen = BTreeMap::new();
    let mut visits = 0;
    for_each(&obj, |k, v, whole| {
        visits += 1;
        assert!(whole.contains_key(k));
        seen.insert(k.to_string(), v.to_string())
    });

    assert_eq!(visits, 3);
    assert_eq!(seen["name"], "bar");
    assert_eq!(seen["arity"], "2");
    assert_eq!(seen["tail"], "[4 5]");
}

#[test]
fn test_create_errors() {
    assert!(matches!(
        create(&[Value::Int(1), Value::Int(2)]),
        Err(ObjectError::NonStringKey { index: 0, .. })
    ));
    assert!(matches!(
        create(&[Value::from("only")]),
        Err(ObjectError::MissingValue { .. })
    ));
}

#[test]
fn test_for_each_on_empty_object() {
    let obj = create(&[]).unwrap();
    let mut visits = 0;
    for_each(&obj, |_, _, _| visits += 1);
    assert_eq!(visits, 0);
}
