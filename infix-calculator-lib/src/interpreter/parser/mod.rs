mod expression_parser;
mod token_tree_parser;

use crate::interpreter::error::{InterpreterError, Result};
use crate::interpreter::lexer::Lexer;
use crate::interpreter::parser::expression_parser::ExpressionParser;
use crate::interpreter::parser::token_tree_parser::TokenTreeParser;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::syntax::token_tree::TokenNode;
use crate::interpreter::token::{Token, TokenKind};

/// Parses the given expression into an equivalent expression tree.
///
/// ```text
/// expr   := term ( (PLUS|MINUS) term )*
/// term   := factor ( (MUL|DIV) factor )*
/// factor := INTEGER | LPAREN expr RPAREN | (PLUS|MINUS) factor
/// ```
///
/// The whole input has to be a single expression, trailing tokens are an error.
///
/// # Arguments
///
/// * `lexer`: A fresh lexer over the text to parse.
///
/// returns: The root of the expression tree.
///
/// # Examples
///
/// ```
/// # use infix_calculator::interpreter::error::Result;
/// # fn main() -> Result<()> {
/// use infix_calculator::interpreter::lexer::Lexer;
/// use infix_calculator::interpreter::parser::parse;
/// use infix_calculator::interpreter::syntax::expression_tree::Node;
///
/// let tree = parse(Lexer::new("-2"))?;
/// assert_eq!(tree, Node::new_negation(Node::new_number(2)));
/// # Ok(()) }
/// ```
pub fn parse(lexer: Lexer) -> Result<Node> {
    let mut parser = ExpressionParser::new(TokenCursor::new(lexer)?);
    let tree = parser.expression()?;
    parser.cursor.eat(TokenKind::End)?;
    Ok(tree)
}

/// Parses the given expression into a tree of tokens, suited for conversion to postfix.
///
/// Uses the same grammar as [`parse`] except that a factor can not be signed:
///
/// ```text
/// factor := INTEGER | LPAREN expr RPAREN
/// ```
pub fn parse_token_tree(lexer: Lexer) -> Result<TokenNode> {
    let mut parser = TokenTreeParser::new(TokenCursor::new(lexer)?);
    let tree = parser.expression()?;
    parser.cursor.eat(TokenKind::End)?;
    Ok(tree)
}

/// The lexer together with a single token of lookahead.
struct TokenCursor {
    lexer: Lexer,
    current: Token,
}

impl TokenCursor {
    fn new(mut lexer: Lexer) -> Result<TokenCursor> {
        let current = lexer.next_token()?;
        Ok(TokenCursor { lexer, current })
    }

    fn current(&self) -> Token {
        self.current
    }

    /// Moves past the current token if it is of the expected kind.
    fn eat(&mut self, expected: TokenKind) -> Result<Token> {
        if self.current.kind() != expected {
            return Err(self.unexpected(expected.to_string()));
        }
        let eaten = self.current;
        self.current = self.lexer.next_token()?;
        Ok(eaten)
    }

    fn unexpected(&self, expected: String) -> InterpreterError {
        InterpreterError::InvalidSyntax {
            expected,
            found: self.current,
        }
    }
}
