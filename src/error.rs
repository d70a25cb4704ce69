/// Errors raised while building a tree from a token stream.
pub mod parse_error;
/// Errors raised while evaluating a tree.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
