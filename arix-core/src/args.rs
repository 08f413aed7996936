//! Call-site argument packing.
//!
//! [`IntoArgs`] turns the things a caller naturally has at hand (a tuple of
//! plain Rust values, a `Vec`, a slice) into the owned argument list a
//! dispatcher consumes.

use crate::value::Value;

/// Conversion into an ordered argument list.
///
/// # Example
///
/// ```
/// use arix_core::{IntoArgs, Value};
///
/// let args = (2, 3.5, "x").into_args();
/// assert_eq!(args, vec![Value::Int(2), Value::Float(3.5), Value::from("x")]);
/// assert!(().into_args().is_empty());
/// ```
pub trait IntoArgs {
    /// Pack `self` into an argument list.
    fn into_args(self) -> Vec<Value>;
}

impl IntoArgs for () {
    fn into_args(self) -> Vec<Value> {
        Vec::new()
    }
}

impl IntoArgs for Vec<Value> {
    fn into_args(self) -> Vec<Value> {
        self
    }
}

impl IntoArgs for &[Value] {
    fn into_args(self) -> Vec<Value> {
        self.to_vec()
    }
}

impl<const N: usize> IntoArgs for [Value; N] {
    fn into_args(self) -> Vec<Value> {
        Vec::from(self)
    }
}

/// Macro to implement IntoArgs for tuples of convertible values.
macro_rules! impl_into_args_tuple {
    ($($T:ident),+) => {
        impl<$($T,)+> IntoArgs for ($($T,)+)
        where
            $($T: Into<Value>,)+
        {
            #[allow(non_snake_case)]
            fn into_args(self) -> Vec<Value> {
                let ($($T,)+) = self;
                vec![$($T.into(),)+]
            }
        }
    };
}

impl_into_args_tuple!(T1);
impl_into_args_tuple!(T1, T2);
impl_into_args_tuple!(T1, T2, T3);
impl_into_args_tuple!(T1, T2, T3, T4);
impl_into_args_tuple!(T1, T2, T3, T4, T5);
impl_into_args_tuple!(T1, T2, T3, T4, T5, T6);
impl_into_args_tuple!(T1, T2, T3, T4, T5, T6, T7);
impl_into_args_tuple!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_into_args_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_into_args_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_into_args_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_into_args_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);
