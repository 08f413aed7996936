//! Arity classes.
//!
//! An [`ArityClass`] is the routing key of a dispatcher. It is derived from the
//! length of the argument list alone, never from the argument values.

use std::fmt;

/// The family of handler shapes a dispatcher can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArityClass {
    /// Exactly one argument.
    Unary,
    /// Exactly two arguments.
    Binary,
    /// Two fixed arguments followed by a tail of at least one more.
    Variadic,
}

impl ArityClass {
    /// Number of arity classes.
    pub const COUNT: usize = 3;

    /// Resolve the class for a call with `n` arguments.
    ///
    /// The variadic case is checked first, so any call with more than two
    /// arguments routes there. Returns `None` for zero arguments.
    ///
    /// # Examples
    /// ```
    /// use arix_core::ArityClass;
    ///
    /// assert_eq!(ArityClass::resolve(1), Some(ArityClass::Unary));
    /// assert_eq!(ArityClass::resolve(2), Some(ArityClass::Binary));
    /// assert_eq!(ArityClass::resolve(5), Some(ArityClass::Variadic));
    /// assert_eq!(ArityClass::resolve(0), None);
    /// ```
    pub const fn resolve(n: usize) -> Option<Self> {
        match n {
            n if n > 2 => Some(ArityClass::Variadic),
            1 => Some(ArityClass::Unary),
            2 => Some(ArityClass::Binary),
            _ => None,
        }
    }

    /// Slot index of this class in a dispatch table.
    pub const fn index(self) -> usize {
        match self {
            ArityClass::Unary => 0,
            ArityClass::Binary => 1,
            ArityClass::Variadic => 2,
        }
    }
}

impl fmt::Display for ArityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArityClass::Unary => "unary",
            ArityClass::Binary => "binary",
            ArityClass::Variadic => "variadic",
        };
        f.write_str(name)
    }
}
