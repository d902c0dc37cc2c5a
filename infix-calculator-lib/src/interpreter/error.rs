use crate::interpreter::token::Token;
use thiserror::Error;

/// Everything that can go wrong while lexing, parsing or evaluating an expression.
///
/// None of these are recovered from: the first error aborts the whole pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpreterError {
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Integer literal '{literal}' is too large")]
    LiteralTooLarge { literal: String },
    #[error("Invalid syntax: expected {expected}, found '{found}'")]
    InvalidSyntax { expected: String, found: Token },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow")]
    Overflow,
    #[error("Malformed postfix expression: {0}")]
    MalformedPostfix(String),
}

impl InterpreterError {
    pub fn code(&self) -> &'static str {
        match self {
            InterpreterError::InvalidCharacter { .. } => "InvalidCharacter",
            InterpreterError::LiteralTooLarge { .. } => "LiteralTooLarge",
            InterpreterError::InvalidSyntax { .. } => "InvalidSyntax",
            InterpreterError::DivisionByZero => "DivisionByZero",
            InterpreterError::Overflow => "Overflow",
            InterpreterError::MalformedPostfix(_) => "MalformedPostfix",
        }
    }
}

pub type Result<T, E = InterpreterError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_syntax_message_names_expected_and_found() {
        let error = InterpreterError::InvalidSyntax {
            expected: "')'".into(),
            found: Token::End,
        };

        assert_eq!(
            error.to_string(),
            "Invalid syntax: expected ')', found 'EOF'"
        );
        assert_eq!(error.code(), "InvalidSyntax");
    }
}
