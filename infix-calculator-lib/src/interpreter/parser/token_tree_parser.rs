use crate::interpreter::error::Result;
use crate::interpreter::parser::TokenCursor;
use crate::interpreter::syntax::token_tree::TokenNode;
use crate::interpreter::token::{Token, TokenKind};

/// Recursive descent over the unsigned grammar, building [`TokenNode`]s.
pub(super) struct TokenTreeParser {
    pub(super) cursor: TokenCursor,
}

impl TokenTreeParser {
    pub(super) fn new(cursor: TokenCursor) -> TokenTreeParser {
        TokenTreeParser { cursor }
    }

    pub(super) fn expression(&mut self) -> Result<TokenNode> {
        let mut node = self.term()?;
        while let Some(operator) = self.operator(&[TokenKind::Plus, TokenKind::Dash])? {
            node = TokenNode::new_operation(operator, node, self.term()?);
        }
        Ok(node)
    }

    fn term(&mut self) -> Result<TokenNode> {
        let mut node = self.factor()?;
        while let Some(operator) = self.operator(&[TokenKind::Asterisk, TokenKind::ForwardSlash])? {
            node = TokenNode::new_operation(operator, node, self.factor()?);
        }
        Ok(node)
    }

    fn factor(&mut self) -> Result<TokenNode> {
        match self.cursor.current() {
            Token::LiteralInteger(value) => {
                self.cursor.eat(TokenKind::LiteralInteger)?;
                Ok(TokenNode::new_leaf(value))
            }
            Token::LeftParentheses => {
                self.cursor.eat(TokenKind::LeftParentheses)?;
                let node = self.expression()?;
                self.cursor.eat(TokenKind::RightParentheses)?;
                Ok(node)
            }
            _ => Err(self.cursor.unexpected("an integer or '('".into())),
        }
    }

    fn operator(&mut self, kinds: &[TokenKind]) -> Result<Option<Token>> {
        let token = self.cursor.current();
        if !kinds.contains(&token.kind()) {
            return Ok(None);
        }
        self.cursor.eat(token.kind()).map(Some)
    }
}
