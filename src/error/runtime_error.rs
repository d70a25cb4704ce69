#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// No kind is recoverable internally: every one aborts the current
/// evaluation and propagates to the top-level caller unchanged.
pub enum RuntimeError {
    /// A bare-name operand was resolved but no binding exists.
    MissingVariable {
        /// The name of the variable.
        name: String,
    },
    /// An array-targeting operation addressed a name that is unbound or not
    /// bound to an array.
    VariableNotFound {
        /// The name of the variable.
        name: String,
    },
    /// An element access lies outside the bounds of the targeted array.
    ArrayIndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The length of the array.
        len:   usize,
    },
    /// A divisor or reciprocal operand resolved to zero.
    DivisionByZero,
    /// An arithmetic operation received an operand it cannot work with, such
    /// as a fractional array size, a negative index, or a non-numeric value.
    InvalidArithmeticOperation {
        /// Details about the invalid operation.
        details: String,
    },
    /// A subroutine call targeted a name with no stored body.
    FunctionNotFound {
        /// The name of the subroutine.
        name: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingVariable { name } => {
                write!(f, "Runtime error: Missing value for variable '{name}'.")
            },
            Self::VariableNotFound { name } => write!(f,
                                                      "Runtime error: Variable '{name}' does not exist or is not an array."),
            Self::ArrayIndexOutOfBounds { index, len } => write!(f,
                                                                 "Runtime error: Index {index} is out of bounds for an array of length {len}."),
            Self::DivisionByZero => write!(f, "Runtime error: Division by zero."),
            Self::InvalidArithmeticOperation { details } => {
                write!(f, "Runtime error: Invalid arithmetic operation: {details}.")
            },
            Self::FunctionNotFound { name } => {
                write!(f, "Runtime error: Subroutine '{name}' is not defined.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
