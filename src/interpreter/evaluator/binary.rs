use crate::{
    ast::{BinaryOperator, UnaryOperator},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
    util::num::{floor_mod_f64, floor_mod_i64},
};

/// Evaluates a binary arithmetic or comparison operation.
///
/// `x` and `y` are the resolved operands in slot order (`x` from the first
/// slot, `y` from the second), and every operator computes with the roles
/// swapped: subtraction produces `y - x`, division `y / x` with `x` as the
/// divisor, and `>` answers `y > x`. Integer operands yield integers where
/// the operator allows it; division always yields a real.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] when a division's `x` is zero.
/// - [`RuntimeError::InvalidArithmeticOperation`] for non-numeric operands,
///   a zero modulus, or integer overflow.
///
/// # Example
/// ```
/// use revpol::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let x = Value::Integer(2);
/// let y = Value::Integer(7);
///
/// // Slot order (x, y); computed as y - x.
/// let result = eval_binary(BinaryOperator::Sub, &x, &y).unwrap();
/// assert_eq!(result, Value::Integer(5));
/// ```
pub fn eval_binary(op: BinaryOperator, x: &Value, y: &Value) -> EvalResult<Value> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Pow, Sub,
    };

    match op {
        Add | Sub | Mul => eval_ring_op(op, x, y),
        Div => {
            let divisor = x.as_real()?;
            if divisor == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Value::Real(y.as_real()? / divisor))
        },
        Pow => eval_power(x, y),
        Mod => eval_modulus(x, y),
        Greater | Less | GreaterEqual | LessEqual => {
            let x = x.as_real()?;
            let y = y.as_real()?;

            Ok(Value::Bool(match op {
                               Greater => y > x,
                               Less => y < x,
                               GreaterEqual => y >= x,
                               LessEqual => y <= x,
                               _ => unreachable!(),
                           }))
        },
        Equal | NotEqual => {
            let is_equal = values_equal(x, y)?;
            Ok(Value::Bool(if op == Equal { is_equal } else { !is_equal }))
        },
    }
}

/// Evaluates a unary operation on a resolved operand.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for the reciprocal of zero.
/// - [`RuntimeError::InvalidArithmeticOperation`] for non-numeric operands
///   or integer overflow (`abs` of the minimum integer).
pub fn eval_unary(op: UnaryOperator, x: &Value) -> EvalResult<Value> {
    match op {
        UnaryOperator::Reciprocal => {
            let value = x.as_real()?;
            if value == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Value::Real(1.0 / value))
        },
        UnaryOperator::Abs => match x {
            Value::Integer(n) => {
                n.checked_abs()
                 .map(Value::Integer)
                 .ok_or_else(|| overflow(&format!("abs({n})")))
            },
            Value::Real(r) => Ok(Value::Real(r.abs())),
            Value::Bool(b) => Ok(Value::Integer(i64::from(*b))),
            _ => Err(RuntimeError::InvalidArithmeticOperation { details: format!("expected a number, found {x}"), }),
        },
    }
}

/// Evaluates addition, subtraction, or multiplication.
///
/// Two integer operands stay in integer arithmetic, with overflow reported
/// instead of wrapped; any real operand switches the whole operation to
/// reals.
fn eval_ring_op(op: BinaryOperator, x: &Value, y: &Value) -> EvalResult<Value> {
    use BinaryOperator::{Add, Mul, Sub};

    if let (Some(x), Some(y)) = (to_i64(x), to_i64(y)) {
        let result = match op {
            Add => y.checked_add(x),
            Sub => y.checked_sub(x),
            Mul => y.checked_mul(x),
            _ => unreachable!(),
        };
        return result.map(Value::Integer).ok_or_else(|| overflow(&format!("{y} {op} {x}")));
    }

    let x = x.as_real()?;
    let y = y.as_real()?;

    Ok(Value::Real(match op {
                       Add => y + x,
                       Sub => y - x,
                       Mul => y * x,
                       _ => unreachable!(),
                   }))
}

/// Evaluates `y ** x` (`y` is the base, `x` the exponent).
///
/// An integer base raised to a non-negative integer exponent stays an
/// integer; everything else goes through reals. A zero base with a
/// negative exponent is a [`RuntimeError::DivisionByZero`].
fn eval_power(x: &Value, y: &Value) -> EvalResult<Value> {
    if let (Some(exponent), Some(base)) = (to_i64(x), to_i64(y)) {
        if exponent >= 0 {
            let exponent = u32::try_from(exponent).map_err(|_| overflow(&format!("{base} ** {exponent}")))?;
            return base.checked_pow(exponent)
                       .map(Value::Integer)
                       .ok_or_else(|| overflow(&format!("{base} ** {exponent}")));
        }
    }

    let exponent = x.as_real()?;
    let base = y.as_real()?;

    // A zero base cannot be raised to a negative power.
    if base == 0.0 && exponent < 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }

    Ok(Value::Real(base.powf(exponent)))
}

/// Evaluates `y % x` with floored semantics: the result takes the sign of
/// the divisor `x`.
fn eval_modulus(x: &Value, y: &Value) -> EvalResult<Value> {
    if let (Some(divisor), Some(dividend)) = (to_i64(x), to_i64(y)) {
        if divisor == 0 {
            return Err(RuntimeError::InvalidArithmeticOperation { details: "integer modulo by zero".to_string(), });
        }
        return Ok(Value::Integer(floor_mod_i64(dividend, divisor)));
    }

    let divisor = x.as_real()?;
    let dividend = y.as_real()?;

    if divisor == 0.0 {
        return Err(RuntimeError::InvalidArithmeticOperation { details: "modulo by zero".to_string(), });
    }
    Ok(Value::Real(floor_mod_f64(dividend, divisor)))
}

/// Compares two values for equality the way `=` and `!=` observe it.
///
/// Numeric values compare by magnitude regardless of representation, so
/// `5 = 5.0` and `1 = true` hold. Non-numeric values compare structurally;
/// values of different non-numeric kinds are simply unequal.
fn values_equal(x: &Value, y: &Value) -> EvalResult<bool> {
    if let (Value::Integer(a), Value::Integer(b)) = (x, y) {
        return Ok(a == b);
    }
    if x.is_numeric() && y.is_numeric() {
        return Ok(x.as_real()? == y.as_real()?);
    }
    Ok(x == y)
}

/// Converts a value to an integer for integer-path arithmetic, without
/// forcing reals through a lossy conversion.
const fn to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(n) => Some(*n),
        Value::Bool(b) => Some(*b as i64),
        _ => None,
    }
}

fn overflow(operation: &str) -> RuntimeError {
    RuntimeError::InvalidArithmeticOperation { details: format!("integer overflow while computing {operation}"), }
}
