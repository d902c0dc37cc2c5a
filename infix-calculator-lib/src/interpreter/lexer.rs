use crate::interpreter::error::{InterpreterError, Result};
use crate::interpreter::token::Token;
use log::trace;

/// Turns expression text into tokens, one token per call.
///
/// The lexer owns a cursor into the text and is not restartable;
/// create a new one to scan the same text again.
pub struct Lexer {
    characters: Vec<char>,
    position: usize,
    finished: bool,
}

impl Lexer {
    pub fn new(expression: &str) -> Lexer {
        Lexer {
            characters: expression.chars().collect(),
            position: 0,
            finished: false,
        }
    }

    /// Reads the next token from the text, skipping leading whitespace.
    ///
    /// Once the end of the text is reached, every further call returns [`Token::End`].
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let token = match self.current_character() {
            None => Token::End,
            Some(character) if character.is_ascii_digit() => self.literal_integer()?,
            Some(character) => match Token::from_symbol(character) {
                Some(token) => {
                    self.position += 1;
                    token
                }
                None => {
                    return Err(InterpreterError::InvalidCharacter {
                        character,
                        position: self.position,
                    })
                }
            },
        };

        trace!("lexed {} at position {}", token, self.position);
        Ok(token)
    }

    fn current_character(&self) -> Option<char> {
        self.characters.get(self.position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_character(), Some(c) if c.is_whitespace()) {
            self.position += 1;
        }
    }

    fn literal_integer(&mut self) -> Result<Token> {
        let start = self.position;
        while matches!(self.current_character(), Some(c) if c.is_ascii_digit()) {
            self.position += 1;
        }

        let literal: String = self.characters[start..self.position].iter().collect();
        literal
            .parse::<i64>()
            .map(Token::LiteralInteger)
            .map_err(|_| InterpreterError::LiteralTooLarge { literal })
    }
}

/// Yields every token up to and including [`Token::End`], then stops.
/// Also stops after the first error.
impl Iterator for Lexer {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = !matches!(token, Ok(ref token) if *token != Token::End);
        Some(token)
    }
}

/// Converts the given expression text into a sequence of tokens, ending with [`Token::End`].
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::lexer::tokenize;
/// use infix_calculator::interpreter::token::Token;
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::LiteralInteger(1), Token::Plus, Token::LiteralInteger(2), Token::End]
/// );
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    Lexer::new(expression).collect()
}
