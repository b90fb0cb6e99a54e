use thiserror::Error;

/// Errors that can occur while parsing a typed-in expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Expression cannot be empty")]
    EmptyExpression,
    #[error("Unexpected character '{character}' at offset {offset}")]
    UnexpectedCharacter { character: char, offset: usize },
    #[error("Unexpected '{token}' at offset {offset}")]
    UnexpectedToken { token: String, offset: usize },
    #[error("Expression ended unexpectedly")]
    UnexpectedEnd,
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("Expression is nested more than {limit} levels deep")]
    TooDeeplyNested { limit: usize },
    #[error("Expression has more than {limit} tokens")]
    TooLong { limit: usize },
}
