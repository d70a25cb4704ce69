use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, Expr, Operand, UnaryOperator},
    error::ParseError,
    interpreter::parser::ParseResult,
};

/// A node builder: turns a normalized operand list into a finished node.
///
/// Builders validate the shape of their operand list and answer
/// [`ParseError::InvalidArgument`] when it is malformed; the parser
/// guarantees only the *count*, never the kinds.
pub type Builder = fn(Vec<Operand>) -> ParseResult<Expr>;

/// One dispatch-table entry: how to build a node, and how many operands to
/// pop for it.
#[derive(Clone, Copy)]
pub struct DispatchEntry {
    /// Constructs the node from its normalized operands.
    pub builder: Builder,
    /// Number of operands the operator consumes from the stack.
    pub arity:   usize,
}

/// Maps operator tokens to their dispatch entries.
///
/// The table is caller-supplied configuration and the sole extension point
/// of the language: the parser treats any key in this map as an operator and
/// everything else as a variable name.
pub type Dispatch = HashMap<String, DispatchEntry>;

/// Builds the standard operator table of the language.
///
/// # Example
/// ```
/// use revpol::interpreter::dispatch::default_dispatch;
///
/// let dispatch = default_dispatch();
///
/// assert_eq!(dispatch["+"].arity, 2);
/// assert_eq!(dispatch["nop"].arity, 0);
/// assert!(!dispatch.contains_key("x"));
/// ```
#[must_use]
pub fn default_dispatch() -> Dispatch {
    let entries: &[(&str, Builder, usize)] = &[("+", addition, 2),
                                               ("-", subtraction, 2),
                                               ("/", division, 2),
                                               ("*", multiplication, 2),
                                               ("**", power, 2),
                                               ("%", modulus, 2),
                                               ("1/", reciprocal, 1),
                                               ("abs", absolute_value, 1),
                                               (">", major, 2),
                                               ("<", minor, 2),
                                               (">=", major_eq, 2),
                                               ("<=", minor_eq, 2),
                                               ("=", equal, 2),
                                               ("!=", not_equal, 2),
                                               ("alloc", alloc, 1),
                                               ("valloc", valloc, 2),
                                               ("setq", setq, 2),
                                               ("setv", setv, 3),
                                               ("prog2", prog, 2),
                                               ("prog3", prog, 3),
                                               ("prog4", prog, 4),
                                               ("if", if_construct, 3),
                                               ("while", while_construct, 2),
                                               ("for", for_construct, 4),
                                               ("defsub", defsub, 2),
                                               ("call", call, 1),
                                               ("print", print, 1),
                                               ("nop", nop, 0)];

    entries.iter()
           .map(|&(token, builder, arity)| (token.to_string(), DispatchEntry { builder, arity }))
           .collect()
}

/// Converts the operand list into a fixed-size array, or fails with
/// `InvalidArgument` on a count mismatch.
fn take<const N: usize>(args: Vec<Operand>) -> ParseResult<[Operand; N]> {
    let found = args.len();
    args.try_into().map_err(|_| ParseError::InvalidArgument { details: format!("expected {N} operands, found {found}"), })
}

/// Requires a bare-name operand, for slots that designate a binding target.
fn name_slot(operand: Operand) -> ParseResult<String> {
    match operand {
        Operand::Name(name) => Ok(name),
        other => Err(ParseError::InvalidArgument { details: format!("expected a variable name, found '{other}'"), }),
    }
}

/// Requires a sub-expression operand, for slots that are evaluated as code.
fn body_slot(operand: Operand) -> ParseResult<Expr> {
    match operand {
        Operand::Expr(expr) => Ok(*expr),
        other => Err(ParseError::InvalidArgument { details: format!("expected an expression, found '{other}'"), }),
    }
}

/// Requires a sub-expression or literal operand, for slots that produce a
/// value but never resolve a bare name.
fn value_slot(operand: Operand) -> ParseResult<Operand> {
    match operand {
        Operand::Name(name) => Err(ParseError::InvalidArgument { details: format!("expected an expression or constant, found bare name '{name}'"), }),
        other => Ok(other),
    }
}

fn binary(op: BinaryOperator, args: Vec<Operand>) -> ParseResult<Expr> {
    let [x, y] = take(args)?;
    Ok(Expr::Binary { op, x, y })
}

fn unary(op: UnaryOperator, args: Vec<Operand>) -> ParseResult<Expr> {
    let [x] = take(args)?;
    Ok(Expr::Unary { op, x })
}

fn addition(args: Vec<Operand>) -> ParseResult<Expr> {
    binary(BinaryOperator::Add, args)
}

fn subtraction(args: Vec<Operand>) -> ParseResult<Expr> {
    binary(BinaryOperator::Sub, args)
}

fn division(args: Vec<Operand>) -> ParseResult<Expr> {
    binary(BinaryOperator::Div, args)
}

fn multiplication(args: Vec<Operand>) -> ParseResult<Expr> {
    binary(BinaryOperator::Mul, args)
}

fn power(args: Vec<Operand>) -> ParseResult<Expr> {
    binary(BinaryOperator::Pow, args)
}

fn modulus(args: Vec<Operand>) -> ParseResult<Expr> {
    binary(BinaryOperator::Mod, args)
}

fn reciprocal(args: Vec<Operand>) -> ParseResult<Expr> {
    unary(UnaryOperator::Reciprocal, args)
}

fn absolute_value(args: Vec<Operand>) -> ParseResult<Expr> {
    unary(UnaryOperator::Abs, args)
}

fn major(args: Vec<Operand>) -> ParseResult<Expr> {
    binary(BinaryOperator::Greater, args)
}

fn minor(args: Vec<Operand>) -> ParseResult<Expr> {
    binary(BinaryOperator::Less, args)
}

fn major_eq(args: Vec<Operand>) -> ParseResult<Expr> {
    binary(BinaryOperator::GreaterEqual, args)
}

fn minor_eq(args: Vec<Operand>) -> ParseResult<Expr> {
    binary(BinaryOperator::LessEqual, args)
}

fn equal(args: Vec<Operand>) -> ParseResult<Expr> {
    binary(BinaryOperator::Equal, args)
}

fn not_equal(args: Vec<Operand>) -> ParseResult<Expr> {
    binary(BinaryOperator::NotEqual, args)
}

fn alloc(args: Vec<Operand>) -> ParseResult<Expr> {
    let [var] = take(args)?;
    Ok(Expr::Alloc { var_name: name_slot(var)?, })
}

fn valloc(args: Vec<Operand>) -> ParseResult<Expr> {
    let [size, var] = take(args)?;
    Ok(Expr::Valloc { size_expr: value_slot(size)?,
                      var_name:  name_slot(var)?, })
}

fn setq(args: Vec<Operand>) -> ParseResult<Expr> {
    let [expr, var] = take(args)?;
    Ok(Expr::Setq { expr:     value_slot(expr)?,
                    var_name: name_slot(var)?, })
}

fn setv(args: Vec<Operand>) -> ParseResult<Expr> {
    let [expr, index, var] = take(args)?;
    Ok(Expr::Setv { expr: value_slot(expr)?,
                    index,
                    var_name: name_slot(var)? })
}

/// Builds `prog2`, `prog3`, and `prog4`; the slot count is carried by the
/// operand list itself.
fn prog(args: Vec<Operand>) -> ParseResult<Expr> {
    let exprs = args.into_iter().map(body_slot).collect::<ParseResult<Vec<_>>>()?;
    Ok(Expr::Prog { exprs })
}

fn if_construct(args: Vec<Operand>) -> ParseResult<Expr> {
    let [if_no, if_yes, cond] = take(args)?;
    Ok(Expr::If { if_no, if_yes, cond })
}

fn while_construct(args: Vec<Operand>) -> ParseResult<Expr> {
    let [expr, cond] = take(args)?;
    Ok(Expr::While { expr: Box::new(body_slot(expr)?),
                     cond: Box::new(body_slot(cond)?), })
}

fn for_construct(args: Vec<Operand>) -> ParseResult<Expr> {
    let [expr, end, start, i_var] = take(args)?;
    Ok(Expr::For { expr:  Box::new(body_slot(expr)?),
                   end:   value_slot(end)?,
                   start: value_slot(start)?,
                   i_var: name_slot(i_var)?, })
}

fn defsub(args: Vec<Operand>) -> ParseResult<Expr> {
    let [expr, function] = take(args)?;
    Ok(Expr::DefSub { expr:          std::rc::Rc::new(body_slot(expr)?),
                      function_name: name_slot(function)?, })
}

fn call(args: Vec<Operand>) -> ParseResult<Expr> {
    let [function] = take(args)?;
    Ok(Expr::Call { function_name: name_slot(function)?, })
}

fn print(args: Vec<Operand>) -> ParseResult<Expr> {
    let [expr] = take(args)?;
    Ok(Expr::Print { expr })
}

fn nop(args: Vec<Operand>) -> ParseResult<Expr> {
    take::<0>(args)?;
    Ok(Expr::Nop)
}
