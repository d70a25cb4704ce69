use std::rc::Rc;

use crate::interpreter::value::Value;

/// An operand slot inside an operation node.
///
/// The parser produces exactly one of these three kinds for every operand and
/// the classification is never revisited afterwards. Evaluation dispatches on
/// the kind to decide whether to recurse, look a name up in the environment,
/// or use a value as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A nested sub-expression, evaluated recursively.
    Expr(Box<Expr>),
    /// A bare variable name, resolved against the environment at evaluation
    /// time. Produced by the parser whenever a popped operand is a plain
    /// [`Expr::Variable`] node.
    Name(String),
    /// An already-resolved constant, used unchanged. Only appears in trees
    /// built programmatically; the parser never produces this kind.
    Literal(Value),
}

/// A binary operator applied to two operand slots.
///
/// The slots are stored in parse order, but every operator computes with the
/// roles swapped: for `Sub`, the produced value is the *second* slot's value
/// minus the first. See [`Expr::Binary`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
    /// Modulo (`%`)
    Mod,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Equal to (`=`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// A unary operator applied to a single operand slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Multiplicative inverse (`1/`)
    Reciprocal,
    /// Absolute value (`abs`)
    Abs,
}

/// An abstract syntax tree (AST) node representing one program construct.
///
/// `Expr` is a closed sum type: there is no abstract base to instantiate and
/// no fallback variant. Nodes are built once by the parser (or by hand) and
/// are immutable afterwards; node identity and child structure never change
/// post-construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant leaf value.
    Constant {
        /// The constant value.
        value: Value,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A binary arithmetic or comparison operation.
    ///
    /// `x` and `y` hold the operands in parse order (`x` is the first token,
    /// `y` the second), yet the operator computes with the resolved values in
    /// swapped roles: `a b -` produces `b - a`.
    Binary {
        /// The operator.
        op: BinaryOperator,
        /// First operand in parse order.
        x:  Operand,
        /// Second operand in parse order.
        y:  Operand,
    },
    /// A unary operation.
    Unary {
        /// The operator.
        op: UnaryOperator,
        /// The sole operand.
        x:  Operand,
    },
    /// A sequencing block of two to four expressions (`prog2`, `prog3`,
    /// `prog4`).
    ///
    /// Evaluation runs the *last* expression first and works down to the
    /// first, whose result is returned. Side effects of later slots are
    /// therefore observed before the first slot runs.
    Prog {
        /// The sequenced expressions, in slot order. Length is 2, 3, or 4.
        exprs: Vec<Expr>,
    },
    /// A conditional. Note the slot order: the false branch comes first.
    If {
        /// Operand produced when the condition is falsy.
        if_no:  Operand,
        /// Operand produced when the condition is truthy.
        if_yes: Operand,
        /// The condition.
        cond:   Operand,
    },
    /// A conditional loop. The condition is re-evaluated before every
    /// iteration.
    While {
        /// The loop body.
        expr: Box<Expr>,
        /// The loop condition.
        cond: Box<Expr>,
    },
    /// A counted ascending loop over a half-open index range.
    For {
        /// The loop body.
        expr:  Box<Expr>,
        /// Exclusive upper bound, resolved once before the first iteration.
        end:   Operand,
        /// Inclusive lower bound, resolved once before the first iteration.
        start: Operand,
        /// Name bound to the current index on every iteration.
        i_var: String,
    },
    /// Binds a variable to the scalar `0`.
    Alloc {
        /// The name to bind.
        var_name: String,
    },
    /// Binds a variable to a zero-filled array of computed length.
    Valloc {
        /// Evaluates to the array length.
        size_expr: Operand,
        /// The name to bind.
        var_name:  String,
    },
    /// Binds or rebinds a variable to the value of an expression.
    Setq {
        /// Evaluates to the new value.
        expr:     Operand,
        /// The name to bind.
        var_name: String,
    },
    /// Stores a value into one element of a bound array, in place.
    Setv {
        /// Evaluates to the value to store.
        expr:     Operand,
        /// Evaluates to the element index.
        index:    Operand,
        /// Name of the array variable.
        var_name: String,
    },
    /// Binds a name to an unevaluated subroutine body.
    DefSub {
        /// The stored body; not evaluated at definition time.
        expr:          Rc<Expr>,
        /// The name to bind.
        function_name: String,
    },
    /// Evaluates a stored subroutine body against the caller's environment.
    Call {
        /// Name of the subroutine.
        function_name: String,
    },
    /// Emits a resolved value to the output sink and passes it through.
    Print {
        /// The value to emit.
        expr: Operand,
    },
    /// Does nothing and produces no value.
    Nop,
}

impl Expr {
    /// Re-serializes the tree as a whitespace-delimited RPN token string.
    ///
    /// Feeding the result back through the parser yields a tree that
    /// evaluates identically to `self`. The canonical [`Display`] rendering
    /// is a prefix form meant for inspection and is *not* re-parseable; this
    /// post-order walk is the round-trip representation.
    ///
    /// # Example
    /// ```
    /// use revpol::{interpreter::dispatch::default_dispatch, parse_program};
    ///
    /// let dispatch = default_dispatch();
    /// let tree = parse_program("2 3 + x *", &dispatch).unwrap();
    ///
    /// assert_eq!(tree.to_rpn(), "2 3 + x *");
    /// ```
    #[must_use]
    pub fn to_rpn(&self) -> String {
        let mut tokens = Vec::new();
        self.push_rpn(&mut tokens);
        tokens.join(" ")
    }

    fn push_rpn(&self, out: &mut Vec<String>) {
        match self {
            Self::Constant { value } => out.push(value.to_string()),
            Self::Variable { name } => out.push(name.clone()),
            Self::Binary { op, x, y } => {
                x.push_rpn(out);
                y.push_rpn(out);
                out.push(op.to_string());
            },
            Self::Unary { op, x } => {
                x.push_rpn(out);
                out.push(op.to_string());
            },
            Self::Prog { exprs } => {
                for expr in exprs {
                    expr.push_rpn(out);
                }
                out.push(format!("prog{}", exprs.len()));
            },
            Self::If { if_no, if_yes, cond } => {
                if_no.push_rpn(out);
                if_yes.push_rpn(out);
                cond.push_rpn(out);
                out.push("if".to_string());
            },
            Self::While { expr, cond } => {
                expr.push_rpn(out);
                cond.push_rpn(out);
                out.push("while".to_string());
            },
            Self::For { expr,
                        end,
                        start,
                        i_var, } => {
                expr.push_rpn(out);
                end.push_rpn(out);
                start.push_rpn(out);
                out.push(i_var.clone());
                out.push("for".to_string());
            },
            Self::Alloc { var_name } => {
                out.push(var_name.clone());
                out.push("alloc".to_string());
            },
            Self::Valloc { size_expr, var_name } => {
                size_expr.push_rpn(out);
                out.push(var_name.clone());
                out.push("valloc".to_string());
            },
            Self::Setq { expr, var_name } => {
                expr.push_rpn(out);
                out.push(var_name.clone());
                out.push("setq".to_string());
            },
            Self::Setv { expr,
                         index,
                         var_name, } => {
                expr.push_rpn(out);
                index.push_rpn(out);
                out.push(var_name.clone());
                out.push("setv".to_string());
            },
            Self::DefSub { expr, function_name } => {
                expr.push_rpn(out);
                out.push(function_name.clone());
                out.push("defsub".to_string());
            },
            Self::Call { function_name } => {
                out.push(function_name.clone());
                out.push("call".to_string());
            },
            Self::Print { expr } => {
                expr.push_rpn(out);
                out.push("print".to_string());
            },
            Self::Nop => out.push("nop".to_string()),
        }
    }
}

impl Operand {
    fn push_rpn(&self, out: &mut Vec<String>) {
        match self {
            Self::Expr(expr) => expr.push_rpn(out),
            Self::Name(name) => out.push(name.clone()),
            Self::Literal(value) => out.push(value.to_string()),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "**",
            Mod => "%",
            Greater => ">",
            Less => "<",
            GreaterEqual => ">=",
            LessEqual => "<=",
            Equal => "=",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reciprocal => write!(f, "1/"),
            Self::Abs => write!(f, "abs"),
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expr(expr) => write!(f, "{expr}"),
            Self::Name(name) => write!(f, "{name}"),
            Self::Literal(value) => write!(f, "{value}"),
        }
    }
}

impl std::fmt::Display for Expr {
    /// Renders the canonical textual form of the node.
    ///
    /// Operands appear in their original field order, not in evaluation
    /// order: `2 3 -` renders as `(- 2 3)` even though it computes `3 - 2`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::Binary { op, x, y } => write!(f, "({op} {x} {y})"),
            Self::Unary { op: UnaryOperator::Reciprocal,
                          x, } => write!(f, "(1/ {x})"),
            Self::Unary { op: UnaryOperator::Abs,
                          x, } => write!(f, "abs({x})"),
            Self::Prog { exprs } => {
                write!(f, "prog{} (", exprs.len())?;
                for (index, expr) in exprs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{expr}")?;
                }
                write!(f, ")")
            },
            Self::If { if_no, if_yes, cond } => write!(f, "if({if_no}, {if_yes}, {cond})"),
            Self::While { expr, cond } => write!(f, "while({expr}, {cond})"),
            Self::For { expr,
                        end,
                        start,
                        i_var, } => {
                write!(f, "for({expr}, from {start} to {end}, var {i_var})")
            },
            Self::Alloc { var_name } => write!(f, "alloc({var_name})"),
            Self::Valloc { size_expr, var_name } => write!(f, "valloc({size_expr}, {var_name})"),
            Self::Setq { expr, var_name } => write!(f, "setq({expr}, {var_name})"),
            Self::Setv { expr,
                         index,
                         var_name, } => write!(f, "setv({expr}, {index}, {var_name})"),
            Self::DefSub { expr, function_name } => write!(f, "defsub({expr}, {function_name})"),
            Self::Call { function_name } => write!(f, "call({function_name})"),
            Self::Print { expr } => write!(f, "print({expr})"),
            Self::Nop => write!(f, "nop"),
        }
    }
}
