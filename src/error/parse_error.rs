#[derive(Debug)]
/// Represents all errors that can occur while turning a token stream into a
/// tree.
pub enum ParseError {
    /// A pop was attempted on an empty operand stack.
    EmptyStack,
    /// The token sequence does not describe a single well-formed program.
    InvalidExpression {
        /// Details about what made the program malformed.
        details: String,
    },
    /// A malformed operand list was handed to a node builder.
    InvalidArgument {
        /// Details about the offending operand list.
        details: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStack => write!(f, "Parse error: Pop from an empty operand stack."),
            Self::InvalidExpression { details } => {
                write!(f, "Parse error: Invalid expression: {details}.")
            },
            Self::InvalidArgument { details } => {
                write!(f, "Parse error: Invalid argument: {details}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
