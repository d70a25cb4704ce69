use crate::{
    ast::{Expr, Operand},
    error::ParseError,
    interpreter::{dispatch::Dispatch, lexer::Token, value::Value},
};

/// Result type used by the parser and the node builders.
pub type ParseResult<T> = Result<T, ParseError>;

/// The explicit operand stack driving RPN tree construction.
///
/// Finished sub-trees are pushed as tokens arrive; operators pop their
/// operands from the top. A pop on an empty stack is a
/// [`ParseError::EmptyStack`].
#[derive(Debug, Default)]
pub struct OperandStack {
    items: Vec<Expr>,
}

impl OperandStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new(), }
    }

    /// Pushes a finished sub-tree.
    pub fn push(&mut self, expr: Expr) {
        self.items.push(expr);
    }

    /// Removes and returns the most recently pushed sub-tree.
    pub fn pop(&mut self) -> ParseResult<Expr> {
        self.items.pop().ok_or(ParseError::EmptyStack)
    }

    /// Returns the number of sub-trees currently on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no sub-trees.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl std::fmt::Display for OperandStack {
    /// Renders the stack bottom-to-top for debugging, one rendering per
    /// item, space-separated.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Builds a single-rooted tree from an RPN token sequence.
///
/// Tokens are classified in order: integer literals push [`Expr::Constant`]
/// nodes, words found in `dispatch` pop and consume operands per their
/// declared arity, and any other word pushes an [`Expr::Variable`] node.
/// Operands popped for an operator come off the stack in LIFO order and are
/// reversed to recover the original left-to-right order; each recovered
/// operand that is a bare variable node is normalized to its name, while
/// every other sub-tree passes through as a nested expression.
///
/// The function is purely functional over its inputs: it touches nothing
/// but its own stack.
///
/// # Errors
/// - [`ParseError::InvalidExpression`] when an operator finds fewer
///   operands than its arity, or the stack does not hold exactly one tree
///   after the last token.
/// - [`ParseError::InvalidArgument`] when a builder rejects its operand
///   list.
/// - [`ParseError::EmptyStack`] from a pop on an empty stack.
pub fn parse(tokens: impl IntoIterator<Item = Token>, dispatch: &Dispatch) -> ParseResult<Expr> {
    let mut stack = OperandStack::new();

    for token in tokens {
        match token {
            Token::Integer(n) => stack.push(Expr::Constant { value: Value::Integer(n), }),
            Token::Word(word) => {
                if let Some(entry) = dispatch.get(&word) {
                    let node = if entry.arity == 0 {
                        (entry.builder)(Vec::new())?
                    } else {
                        if stack.len() < entry.arity {
                            return Err(ParseError::InvalidExpression { details: format!("operator '{word}' needs {} operands but found {}",
                                                                                        entry.arity,
                                                                                        stack.len()), });
                        }

                        let mut operands = Vec::with_capacity(entry.arity);
                        for _ in 0..entry.arity {
                            operands.push(normalize(stack.pop()?));
                        }
                        // Popping is LIFO; restore left-to-right order.
                        operands.reverse();

                        (entry.builder)(operands)?
                    };
                    stack.push(node);
                } else {
                    stack.push(Expr::Variable { name: word, });
                }
            },
            Token::Ignored => {},
        }
    }

    if stack.len() != 1 {
        return Err(ParseError::InvalidExpression { details: format!("{} items left on the operand stack, expected exactly 1",
                                                                    stack.len()), });
    }

    stack.pop()
}

/// Normalizes a popped sub-tree into an operand: a bare variable node
/// becomes a bare-name reference, everything else stays a sub-expression.
fn normalize(expr: Expr) -> Operand {
    match expr {
        Expr::Variable { name } => Operand::Name(name),
        other => Operand::Expr(Box::new(other)),
    }
}
