//! Key/value objects.

use arix_core::{ObjectError, Value};
use std::collections::HashMap;

/// A string-keyed mapping of values. Iteration order is unspecified.
pub type Object = HashMap<String, Value>;

/// Build an [`Object`] from alternating keys and values.
///
/// Keys must be strings. A later pair with the same key overwrites an earlier
/// one.
///
/// # Example
/// ```
/// use arix_core::Value;
/// use arix_std::object::create;
///
/// let obj = create(&[Value::from("a"), Value::Int(1), Value::from("b"), Value::Int(2)])?;
/// assert_eq!(obj["b"], Value::Int(2));
/// # Ok::<(), arix_core::ObjectError>(())
/// ```
pub fn create(keyvals: &[Value]) -> Result<Object, ObjectError> {
    let mut obj = Object::with_capacity(keyvals.len() / 2);
    for (index, key) in keyvals.iter().enumerate().step_by(2) {
        let key = key.as_str().ok_or(ObjectError::NonStringKey {
            index,
            found: key.kind(),
        })?;
        let value = keyvals
            .get(index + 1)
            .ok_or_else(|| ObjectError::MissingValue {
                key: key.to_owned(),
            })?;
        obj.insert(key.to_owned(), value.clone());
    }
    Ok(obj)
}

/// Call `f(key, value, obj)` for every entry of `obj`.
///
/// Whatever `f` returns is discarded.
pub fn for_each<F, R>(obj: &Object, mut f: F)
where
    F: FnMut(&str, &Value, &Object) -> R,
{
    for (key, value) in obj {
        let _ = f(key, value, obj);
    }
}
