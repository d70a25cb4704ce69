//! # revpol
//!
//! revpol is a tree-walking interpreter for a small reverse-Polish-notation
//! expression language. Programs are whitespace-delimited token strings; a
//! stack-based parser turns them into a single-rooted expression tree, and a
//! recursive evaluator executes that tree against a mutable environment with
//! support for arithmetic, comparisons, scalar and array variables,
//! sequencing, branching, bounded loops, and zero-argument subroutines.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        dispatch::Dispatch, environment::Environment, lexer::Token, parser::parse, value::Value,
    },
};

/// Defines the structure of parsed programs.
///
/// This module declares the `Expr` enum and the `Operand` type that together
/// represent an RPN program as a tree. The tree is built once by the parser,
/// is immutable afterwards, and carries the canonical textual rendering of
/// every construct.
///
/// # Responsibilities
/// - Defines the closed set of expression node variants.
/// - Defines the three-way operand kind produced at parse time.
/// - Renders nodes canonically and re-serializes trees to RPN.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while building or
/// executing a tree. Every condition is fatal: it aborts the current
/// operation and propagates to the top-level caller, which alone decides how
/// to present it.
///
/// # Responsibilities
/// - Defines error enums for the parser and the evaluator.
/// - Attaches names and details for context.
/// - Integrates with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of program execution.
///
/// This module ties together lexing, parsing, dispatch, evaluation, values,
/// and the environment to provide a complete runtime for RPN programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides entry points for parsing and running programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// Reusable numeric routines shared by the evaluator: checked conversions
/// between integer and floating-point types, and floored-modulus helpers.
pub mod util;

/// Parses an RPN program into its expression tree.
///
/// The source is lexed into whitespace-delimited tokens and folded over an
/// operand stack against the supplied dispatch table. The returned tree is
/// the single root left on the stack.
///
/// # Errors
/// Returns a [`ParseError`] if the token sequence is malformed: an operator
/// short of operands, a final stack size other than one, or an operand list
/// a node builder rejects.
///
/// # Examples
/// ```
/// use revpol::{interpreter::dispatch::default_dispatch, parse_program};
///
/// let dispatch = default_dispatch();
///
/// let tree = parse_program("2 3 +", &dispatch).unwrap();
/// assert_eq!(tree.to_string(), "(+ 2 3)");
///
/// // Two roots remain: not a program.
/// assert!(parse_program("1 2", &dispatch).is_err());
/// ```
pub fn parse_program(source: &str, dispatch: &Dispatch) -> Result<Expr, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(ParseError::InvalidExpression { details: format!("cannot lex token '{}'", lexer.slice()), });
            },
        }
    }

    parse(tokens, dispatch)
}

/// Parses and evaluates an RPN program against a caller-owned environment.
///
/// The environment carries all variable, array, and subroutine bindings; it
/// is mutated in place and may be reused across programs to chain their
/// effects, exactly as a sequencing construct inside one program would.
///
/// # Errors
/// Returns the underlying [`ParseError`](error::ParseError) or
/// [`RuntimeError`](error::RuntimeError) if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use revpol::{
///     interpreter::{dispatch::default_dispatch, environment::Environment, value::Value},
///     run_program,
/// };
///
/// let dispatch = default_dispatch();
/// let mut env = Environment::new();
///
/// run_program("x alloc", &dispatch, &mut env).unwrap();
/// let result = run_program("5 x setq", &dispatch, &mut env).unwrap();
///
/// assert_eq!(result, Value::Integer(5));
/// assert_eq!(env.get("x"), Some(&Value::Integer(5)));
/// ```
pub fn run_program(source: &str,
                   dispatch: &Dispatch,
                   env: &mut Environment)
                   -> Result<Value, Box<dyn std::error::Error>> {
    let tree = parse_program(source, dispatch)?;
    let value = tree.evaluate(env)?;
    Ok(value)
}
