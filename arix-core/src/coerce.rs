//! Numeric coercion helpers.
//!
//! Handlers that need uniform numeric semantics convert their arguments with
//! [`double`] or [`long`]. Both reject non-numeric values with [`TypeMismatch`].

use crate::{error::TypeMismatch, value::Value};

/// Coerce a numeric value to `f64`.
///
/// # Examples
/// ```
/// use arix_core::{Value, coerce::double};
///
/// assert_eq!(double(&Value::Int(3)), Ok(3.0));
/// assert_eq!(double(&Value::Float(0.5)), Ok(0.5));
/// assert!(double(&Value::from("3")).is_err());
/// ```
pub fn double(x: &Value) -> Result<f64, TypeMismatch> {
    match x {
        Value::Int(n) => Ok(*n as f64),
        Value::Float(f) => Ok(*f),
        other => Err(TypeMismatch {
            expected: "float",
            found: other.kind(),
        }),
    }
}

/// Coerce a numeric value to `i64`.
///
/// Floats are truncated toward zero and saturate at the `i64` bounds; NaN
/// becomes 0.
pub fn long(x: &Value) -> Result<i64, TypeMismatch> {
    match x {
        Value::Int(n) => Ok(*n),
        Value::Float(f) => Ok(*f as i64),
        other => Err(TypeMismatch {
            expected: "int",
            found: other.kind(),
        }),
    }
}

/// `double(x) + 1`.
pub fn plus_one(x: &Value) -> Result<f64, TypeMismatch> {
    Ok(double(x)? + 1.0)
}
