use crate::{
    ast::{Expr, Operand},
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::Value},
};

/// Evaluates a `prog2`/`prog3`/`prog4` sequencing block.
///
/// Slots run from the highest-numbered down to the first, and the first
/// slot's result is returned; side effects of the later slots are therefore
/// visible to the first one.
pub fn eval_prog(exprs: &[Expr], env: &mut Environment) -> EvalResult<Value> {
    for expr in exprs.iter().skip(1).rev() {
        expr.evaluate(env)?;
    }

    match exprs.first() {
        Some(expr) => expr.evaluate(env),
        None => Ok(Value::Unit),
    }
}

/// Evaluates a conditional.
///
/// The condition resolves via the three-way operand rule; the chosen branch
/// resolves the same way and its value is returned. Only one branch is
/// touched.
pub fn eval_if(if_no: &Operand,
               if_yes: &Operand,
               cond: &Operand,
               env: &mut Environment)
               -> EvalResult<Value> {
    if cond.resolve(env)?.is_truthy() {
        if_yes.resolve(env)
    } else {
        if_no.resolve(env)
    }
}

/// Evaluates a conditional loop.
///
/// The condition is a sub-expression re-evaluated before every iteration;
/// the body runs while it stays truthy. The loop produces no value.
pub fn eval_while(expr: &Expr, cond: &Expr, env: &mut Environment) -> EvalResult<Value> {
    while cond.evaluate(env)?.is_truthy() {
        expr.evaluate(env)?;
    }
    Ok(Value::Unit)
}

/// Evaluates a counted loop.
///
/// `start` and `end` resolve once, before the first iteration, and must be
/// integers. The index runs ascending over the half-open range
/// `start..end`; each iteration binds the index variable in the shared
/// environment (where it remains after the loop) and then evaluates the
/// body. `start >= end` means zero iterations. The loop produces no value.
pub fn eval_for(expr: &Expr,
                end: &Operand,
                start: &Operand,
                i_var: &str,
                env: &mut Environment)
                -> EvalResult<Value> {
    let start = start.resolve_value(env)?.as_integer()?;
    let end = end.resolve_value(env)?.as_integer()?;

    for index in start..end {
        env.bind(i_var, Value::Integer(index));
        expr.evaluate(env)?;
    }
    Ok(Value::Unit)
}
