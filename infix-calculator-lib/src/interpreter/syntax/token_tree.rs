use crate::interpreter::token::Token;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A generic binary tree of tokens, as produced by
/// [`crate::interpreter::parser::parse_token_tree`].
///
/// A leaf holds a literal integer and no children. Any other node holds an
/// operator token and both children. There are no unary operations in this shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenNode {
    pub(crate) token: Token,
    pub(crate) left: Option<Box<TokenNode>>,
    pub(crate) right: Option<Box<TokenNode>>,
}

impl TokenNode {
    pub fn new_leaf(value: i64) -> TokenNode {
        TokenNode {
            token: Token::LiteralInteger(value),
            left: None,
            right: None,
        }
    }

    pub fn new_operation(operator: Token, left: TokenNode, right: TokenNode) -> TokenNode {
        TokenNode {
            token: operator,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn left(&self) -> Option<&TokenNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TokenNode> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Lists the tokens of the tree in post-order, which is reverse polish notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use infix_calculator::interpreter::syntax::token_tree::TokenNode;
    /// use infix_calculator::interpreter::token::Token;
    ///
    /// let tree = TokenNode::new_operation(
    ///     Token::Asterisk,
    ///     TokenNode::new_leaf(2),
    ///     TokenNode::new_leaf(3),
    /// );
    /// assert_eq!(
    ///     tree.to_postfix(),
    ///     vec![Token::LiteralInteger(2), Token::LiteralInteger(3), Token::Asterisk]
    /// );
    /// ```
    pub fn to_postfix(&self) -> Vec<Token> {
        let mut output = Vec::new();
        self.write_postfix(&mut output);
        output
    }

    fn write_postfix(&self, output: &mut Vec<Token>) {
        if let Some(left) = &self.left {
            left.write_postfix(output);
        }
        if let Some(right) = &self.right {
            right.write_postfix(output);
        }
        output.push(self.token);
    }

    fn build_tree(&self, builder: &mut TreeBuilder) {
        if self.is_leaf() {
            builder.add_empty_child(self.token.to_string());
            return;
        }
        builder.begin_child(self.token.to_string());
        self.left.iter().chain(self.right.iter()).for_each(|node| node.build_tree(builder));
        builder.end_child();
    }
}

impl Display for TokenNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut builder = TreeBuilder::new("expression".into());
        self.build_tree(&mut builder);

        let mut buffer: Vec<u8> = Vec::new();
        write_tree(&builder.build(), &mut buffer).map_err(|_| fmt::Error)?;
        let text = std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}
