/// The dispatch module maps operator tokens to node builders.
///
/// The dispatch table is the sole extension point of the language: every
/// operator is an entry pairing a node-building function with a declared
/// arity, and the parser is generic over the table. This module also ships
/// the standard table covering all built-in constructs.
///
/// # Responsibilities
/// - Defines `DispatchEntry` and the `Dispatch` map type.
/// - Provides `default_dispatch()` with the standard operator set.
/// - Hosts the node builders that validate operand shapes.
pub mod dispatch;
/// The environment module holds the mutable program state.
///
/// A single name-to-value map is threaded by mutable reference through
/// every evaluation call. Allocation, assignment, loop-index, and
/// subroutine-definition constructs mutate it; nothing in the interpreter
/// ever clears it.
///
/// # Responsibilities
/// - Defines `Environment` with lookup, mutation, and binding operations.
/// - Enforces that a name maps to at most one value at a time.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator recursively descends the tree, resolving operands by
/// kind, performing arithmetic and comparisons, driving control flow, and
/// mutating the environment. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates every node variant against the shared environment.
/// - Resolves operands via the three-way sub-expression/name/literal rule.
/// - Reports runtime errors such as division by zero or missing variables.
pub mod evaluator;
/// The lexer module tokenizes RPN source text.
///
/// Programs are whitespace-delimited token strings; the lexer only
/// distinguishes integer literals from other words, leaving the
/// operator-versus-variable decision to the parser and its dispatch table.
///
/// # Responsibilities
/// - Converts the input character stream into `Integer` and `Word` tokens.
/// - Skips whitespace between tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser maintains an explicit operand stack: finished sub-trees are
/// pushed as tokens arrive, and operators pop operands per their declared
/// arity. Bare variable operands are normalized to name references at this
/// point and never re-classified later.
///
/// # Responsibilities
/// - Classifies tokens as literals, operators, or variable references.
/// - Builds nodes through the dispatch table's builders.
/// - Rejects token sequences that do not leave exactly one tree behind.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares every value a program can produce or bind:
/// integers, reals, booleans, in-place-mutable arrays, stored subroutine
/// bodies, and the unit value. It also provides conversion and truthiness
/// helpers used across the evaluator.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Implements numeric conversions and truthiness.
/// - Renders values in their output form.
pub mod value;
