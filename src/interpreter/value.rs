use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce or bind: numbers,
/// booleans from comparisons, in-place-mutable arrays, stored subroutine
/// bodies, and the unit result of statements. A variable may rebind from any
/// of these to any other; there is no type stability across assignments.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double-precision floating-point number. Produced by division,
    /// reciprocals, and mixed-type arithmetic.
    Real(f64),
    /// A boolean, produced by the comparison operators.
    Bool(bool),
    /// A fixed-length array of values, mutable in place. The `Rc` makes
    /// rebinding alias rather than copy, so a `setv` through one name is
    /// visible through every name bound to the same array.
    Array(Rc<RefCell<Vec<Value>>>),
    /// An unevaluated subroutine body stored by `defsub`.
    Sub(Rc<Expr>),
    /// The no-value result of statements such as `alloc` or `while`.
    Unit,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Integer`, `Real`, and `Bool` (booleans count as 1 and 0, the
    /// way the comparison results behave in arithmetic). Integer conversion
    /// fails if the value is too large to be represented exactly.
    ///
    /// # Example
    /// ```
    /// use revpol::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real().unwrap(), 10.0);
    /// assert_eq!(Value::Bool(true).as_real().unwrap(), 1.0);
    /// assert!(Value::Unit.as_real().is_err());
    /// ```
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => {
                i64_to_f64_checked(*n,
                                   RuntimeError::InvalidArithmeticOperation { details: format!("integer {n} is too large to represent exactly as a real"), })
            },
            Self::Bool(b) => Ok(f64::from(*b)),
            _ => Err(RuntimeError::InvalidArithmeticOperation { details: format!("expected a number, found {self}"), }),
        }
    }

    /// Converts the value to an `i64`, or returns an error otherwise.
    ///
    /// Only `Integer` and `Bool` qualify; a fractional or even a whole `Real`
    /// is rejected, since the sites that require integers (array sizes,
    /// element indices, loop bounds) demand genuinely integral operands.
    pub fn as_integer(&self) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Bool(b) => Ok(i64::from(*b)),
            _ => Err(RuntimeError::InvalidArithmeticOperation { details: format!("expected an integer, found {self}"), }),
        }
    }

    /// Returns `true` if the value is numeric (`Integer`, `Real`, or `Bool`).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_) | Self::Bool(_))
    }

    /// Returns the truthiness of the value, as used by `if` and `while`.
    ///
    /// Numbers are truthy when nonzero, arrays when non-empty, stored
    /// subroutine bodies always, and `Unit` never.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Bool(b) => *b,
            Self::Array(elements) => !elements.borrow().is_empty(),
            Self::Sub(_) => true,
            Self::Unit => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Sub(body) => write!(f, "{body}"),
            Self::Unit => write!(f, "nil"),
        }
    }
}
