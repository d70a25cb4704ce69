use logos::Logos;

/// Represents one whitespace-delimited token of an RPN program.
///
/// The grammar has exactly two lexical shapes: runs of digits, and
/// everything else. Which words are operators and which are variable names
/// is not a lexical question; the parser decides that against its dispatch
/// table.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// A non-negative integer literal such as `42`. A word must consist of
    /// digits only to lex as an integer; `12x` is a `Word`.
    #[regex(r"[0-9]+", parse_integer, priority = 3)]
    Integer(i64),
    /// Any other whitespace-delimited word: an operator key or a variable
    /// name.
    #[regex(r"[^ \t\n\r\f]+", |lex| lex.slice().to_string())]
    Word(String),
    /// Whitespace between tokens.
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Ignored,
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` if the digit run does not fit in an `i64`, which makes the
/// lexer report the token as an error instead of silently truncating.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
