use crate::{
    ast::{Expr, Operand},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary, control, storage},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Operand {
    /// Resolves an operand to a value using the three-way rule.
    ///
    /// Sub-expressions are evaluated recursively, bare names are looked up
    /// in the environment (a missing binding is a fatal
    /// [`RuntimeError::MissingVariable`]), and literals are used unchanged.
    /// Every construct that reads an operand's value goes through this:
    /// arithmetic, comparisons, conditions, indices, and print targets.
    pub fn resolve(&self, env: &mut Environment) -> EvalResult<Value> {
        match self {
            Self::Expr(expr) => expr.evaluate(env),
            Self::Name(name) => {
                env.get(name)
                   .cloned()
                   .ok_or_else(|| RuntimeError::MissingVariable { name: name.clone(), })
            },
            Self::Literal(value) => Ok(value.clone()),
        }
    }

    /// Resolves a value-only operand: a sub-expression or a literal.
    ///
    /// Used by the slots that never resolve bare names, such as `setq`
    /// right-hand sides and `for` loop bounds. The node builders reject
    /// names in these slots, so the name arm only fires for trees built by
    /// hand.
    pub fn resolve_value(&self, env: &mut Environment) -> EvalResult<Value> {
        match self {
            Self::Expr(expr) => expr.evaluate(env),
            Self::Name(name) => Err(RuntimeError::InvalidArithmeticOperation { details: format!("bare name '{name}' cannot supply a value here"), }),
            Self::Literal(value) => Ok(value.clone()),
        }
    }
}

impl Expr {
    /// Evaluates the tree against a mutable environment.
    ///
    /// This is an ordinary recursive descent on the host call stack: there
    /// are no suspension points and no recursion guard, so a deep enough
    /// tree or an unbounded subroutine recursion overflows the stack.
    /// Every error aborts the evaluation immediately and propagates to the
    /// caller; there are no partial results.
    ///
    /// # Example
    /// ```
    /// use revpol::{
    ///     interpreter::{dispatch::default_dispatch, environment::Environment, value::Value},
    ///     parse_program,
    /// };
    ///
    /// let dispatch = default_dispatch();
    /// let tree = parse_program("2 3 +", &dispatch).unwrap();
    /// let mut env = Environment::new();
    ///
    /// assert_eq!(tree.evaluate(&mut env).unwrap(), Value::Integer(5));
    /// ```
    pub fn evaluate(&self, env: &mut Environment) -> EvalResult<Value> {
        match self {
            Self::Constant { value } => Ok(value.clone()),
            Self::Variable { name } => {
                env.get(name)
                   .cloned()
                   .ok_or_else(|| RuntimeError::MissingVariable { name: name.clone(), })
            },
            Self::Binary { op, x, y } => {
                let x = x.resolve(env)?;
                let y = y.resolve(env)?;
                binary::eval_binary(*op, &x, &y)
            },
            Self::Unary { op, x } => {
                let x = x.resolve(env)?;
                binary::eval_unary(*op, &x)
            },
            Self::Prog { exprs } => control::eval_prog(exprs, env),
            Self::If { if_no, if_yes, cond } => control::eval_if(if_no, if_yes, cond, env),
            Self::While { expr, cond } => control::eval_while(expr, cond, env),
            Self::For { expr,
                        end,
                        start,
                        i_var, } => control::eval_for(expr, end, start, i_var, env),
            Self::Alloc { var_name } => storage::eval_alloc(var_name, env),
            Self::Valloc { size_expr, var_name } => {
                storage::eval_valloc(size_expr, var_name, env)
            },
            Self::Setq { expr, var_name } => storage::eval_setq(expr, var_name, env),
            Self::Setv { expr,
                         index,
                         var_name, } => storage::eval_setv(expr, index, var_name, env),
            Self::DefSub { expr, function_name } => {
                storage::eval_defsub(expr, function_name, env)
            },
            Self::Call { function_name } => storage::eval_call(function_name, env),
            Self::Print { expr } => storage::eval_print(expr, env),
            Self::Nop => Ok(Value::Unit),
        }
    }
}
