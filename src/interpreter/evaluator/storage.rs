use std::rc::Rc;

use crate::{
    ast::{Expr, Operand},
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::Value},
    util::num::i64_to_usize_checked,
};

/// Binds a variable to the scalar `0`, replacing any previous binding.
pub fn eval_alloc(var_name: &str, env: &mut Environment) -> EvalResult<Value> {
    env.bind(var_name, Value::Integer(0));
    Ok(Value::Unit)
}

/// Binds a variable to a freshly allocated zero-filled array.
///
/// The size operand must resolve to a non-negative integer; anything else
/// is a fatal [`RuntimeError::InvalidArithmeticOperation`].
pub fn eval_valloc(size_expr: &Operand, var_name: &str, env: &mut Environment) -> EvalResult<Value> {
    let size = size_expr.resolve_value(env)?.as_integer()?;
    let size = i64_to_usize_checked(size,
                                    RuntimeError::InvalidArithmeticOperation { details: format!("array size must be a non-negative integer, found {size}"), })?;

    env.bind(var_name, Value::from(vec![Value::Integer(0); size]));
    Ok(Value::Unit)
}

/// Binds or rebinds a variable to the resolved value and returns it.
///
/// The previous value and its type are silently replaced; a name may move
/// from scalar to array to subroutine body freely.
pub fn eval_setq(expr: &Operand, var_name: &str, env: &mut Environment) -> EvalResult<Value> {
    let value = expr.resolve_value(env)?;
    env.bind(var_name, value.clone());
    Ok(value)
}

/// Stores a value into one element of a bound array, in place, and returns
/// the stored value.
///
/// The value operand resolves first, then the index (three-way rule). The
/// index must be a non-negative integer, the name must already be bound to
/// an array, and the index must lie inside it.
pub fn eval_setv(expr: &Operand,
                 index: &Operand,
                 var_name: &str,
                 env: &mut Environment)
                 -> EvalResult<Value> {
    let value = expr.resolve_value(env)?;

    let index = index.resolve(env)?.as_integer()?;
    let index = i64_to_usize_checked(index,
                                     RuntimeError::InvalidArithmeticOperation { details: format!("array index must be a non-negative integer, found {index}"), })?;

    let Some(Value::Array(cells)) = env.get(var_name) else {
        return Err(RuntimeError::VariableNotFound { name: var_name.to_string(), });
    };
    let cells = Rc::clone(cells);
    let mut elements = cells.borrow_mut();

    if index >= elements.len() {
        return Err(RuntimeError::ArrayIndexOutOfBounds { index,
                                                         len: elements.len(), });
    }

    elements[index] = value.clone();
    drop(elements);

    Ok(value)
}

/// Binds a name to an unevaluated subroutine body.
///
/// The body is stored as-is; nothing is evaluated until a `call`.
pub fn eval_defsub(expr: &Rc<Expr>, function_name: &str, env: &mut Environment) -> EvalResult<Value> {
    env.bind(function_name, Value::Sub(Rc::clone(expr)));
    Ok(Value::Unit)
}

/// Evaluates a stored subroutine body against the caller's environment.
///
/// There is no call frame and no parameter passing: the body reads and
/// mutates the very same environment as the caller, so repeated calls
/// observe each other's effects (dynamic scoping). A name that is unbound,
/// or bound to anything but a stored body, is a fatal
/// [`RuntimeError::FunctionNotFound`].
pub fn eval_call(function_name: &str, env: &mut Environment) -> EvalResult<Value> {
    match env.get(function_name) {
        Some(Value::Sub(body)) => {
            let body = Rc::clone(body);
            body.evaluate(env)
        },
        _ => Err(RuntimeError::FunctionNotFound { name: function_name.to_string(), }),
    }
}

/// Resolves a value, writes it to standard output as one line, and passes
/// it through unchanged, so `print` nests as a value-producing
/// sub-expression.
pub fn eval_print(expr: &Operand, env: &mut Environment) -> EvalResult<Value> {
    let value = expr.resolve(env)?;
    println!("{value}");
    Ok(value)
}
