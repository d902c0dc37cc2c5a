use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    LiteralInteger(i64),
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    LeftParentheses,
    RightParentheses,
    /// Marks the end of the input. Never appears inside an expression.
    End,
}

/// The kind of a token, without any payload.
///
/// Used by the parser to check the lookahead against what a grammar rule expects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LiteralInteger,
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    LeftParentheses,
    RightParentheses,
    End,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::LiteralInteger(_) => TokenKind::LiteralInteger,
            Token::Plus => TokenKind::Plus,
            Token::Dash => TokenKind::Dash,
            Token::Asterisk => TokenKind::Asterisk,
            Token::ForwardSlash => TokenKind::ForwardSlash,
            Token::LeftParentheses => TokenKind::LeftParentheses,
            Token::RightParentheses => TokenKind::RightParentheses,
            Token::End => TokenKind::End,
        }
    }

    /// Maps one of the single-character symbols onto its token.
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Dash),
            '*' => Some(Token::Asterisk),
            '/' => Some(Token::ForwardSlash),
            '(' => Some(Token::LeftParentheses),
            ')' => Some(Token::RightParentheses),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::LiteralInteger(value) => write!(f, "{}", value),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::ForwardSlash => write!(f, "/"),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
            Token::End => write!(f, "EOF"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::LiteralInteger => "an integer",
            TokenKind::Plus => "'+'",
            TokenKind::Dash => "'-'",
            TokenKind::Asterisk => "'*'",
            TokenKind::ForwardSlash => "'/'",
            TokenKind::LeftParentheses => "'('",
            TokenKind::RightParentheses => "')'",
            TokenKind::End => "end of input",
        };
        f.write_str(name)
    }
}
