use crate::interpreter::error::Result;
use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::parser::TokenCursor;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::{Token, TokenKind};

/// Recursive descent over the signed grammar; one method per rule.
pub(super) struct ExpressionParser {
    pub(super) cursor: TokenCursor,
}

impl ExpressionParser {
    pub(super) fn new(cursor: TokenCursor) -> ExpressionParser {
        ExpressionParser { cursor }
    }

    /// `expr := term ( (PLUS|MINUS) term )*`
    pub(super) fn expression(&mut self) -> Result<Node> {
        let mut node = self.term()?;
        while let Some(operator) = self.binary_operator(&[TokenKind::Plus, TokenKind::Dash])? {
            node = Node::new_binary(operator, node, self.term()?);
        }
        Ok(node)
    }

    /// `term := factor ( (MUL|DIV) factor )*`
    fn term(&mut self) -> Result<Node> {
        let mut node = self.factor()?;
        while let Some(operator) =
            self.binary_operator(&[TokenKind::Asterisk, TokenKind::ForwardSlash])?
        {
            node = Node::new_binary(operator, node, self.factor()?);
        }
        Ok(node)
    }

    /// `factor := INTEGER | LPAREN expr RPAREN | (PLUS|MINUS) factor`
    fn factor(&mut self) -> Result<Node> {
        let token = self.cursor.current();
        match token {
            Token::LiteralInteger(value) => {
                self.cursor.eat(TokenKind::LiteralInteger)?;
                Ok(Node::new_number(value))
            }
            Token::LeftParentheses => {
                self.cursor.eat(TokenKind::LeftParentheses)?;
                let node = self.expression()?;
                self.cursor.eat(TokenKind::RightParentheses)?;
                Ok(node)
            }
            _ => match UnaryOperator::from_token(&token) {
                Some(operator) => {
                    self.cursor.eat(token.kind())?;
                    Ok(Node::new_unary(operator, self.factor()?))
                }
                None => Err(self
                    .cursor
                    .unexpected("an integer, '(', '+' or '-'".into())),
            },
        }
    }

    /// Eats and returns the current token as an operator, if it is one of the given kinds.
    fn binary_operator(&mut self, kinds: &[TokenKind]) -> Result<Option<BinaryOperator>> {
        let token = self.cursor.current();
        let operator = match BinaryOperator::from_token(&token) {
            Some(operator) if kinds.contains(&token.kind()) => operator,
            _ => return Ok(None),
        };
        self.cursor.eat(token.kind())?;
        Ok(Some(operator))
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::error::InterpreterError;
    use crate::interpreter::lexer::Lexer;
    use crate::interpreter::parser::parse;
    use crate::interpreter::syntax::expression_tree::Node;
    use crate::interpreter::token::Token;
    use pretty_assertions::assert_eq;

    fn parse_text(expression: &str) -> Node {
        parse(Lexer::new(expression)).unwrap()
    }

    #[test]
    fn single_number_parses_to_leaf() {
        assert_eq!(parse_text("42"), Node::new_number(42));
    }

    #[test]
    fn subtraction_is_left_associative() {
        let expected = Node::new_binary_subtraction(
            Node::new_binary_subtraction(Node::new_number(8), Node::new_number(3)),
            Node::new_number(2),
        );

        assert_eq!(parse_text("8 - 3 - 2"), expected);
    }

    #[test]
    fn division_is_left_associative() {
        let expected = Node::new_binary_division(
            Node::new_binary_division(Node::new_number(8), Node::new_number(4)),
            Node::new_number(2),
        );

        assert_eq!(parse_text("8 / 4 / 2"), expected);
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expected = Node::new_binary_addition(
            Node::new_number(2),
            Node::new_binary_multiplication(Node::new_number(3), Node::new_number(4)),
        );

        assert_eq!(parse_text("2 + 3 * 4"), expected);
    }

    #[test]
    fn parentheses_override_precedence() {
        let expected = Node::new_binary_multiplication(
            Node::new_binary_addition(Node::new_number(2), Node::new_number(3)),
            Node::new_number(4),
        );

        assert_eq!(parse_text("(2 + 3) * 4"), expected);
    }

    #[test]
    fn redundant_parentheses_leave_no_trace() {
        assert_eq!(parse_text("((((7))))"), Node::new_number(7));
    }

    #[test]
    fn repeated_signs_nest_unary_operations() {
        let expected = Node::new_negation(Node::new_negation(Node::new_negation(
            Node::new_number(5),
        )));

        assert_eq!(parse_text("---5"), expected);
    }

    #[test]
    fn sign_applies_to_following_factor_only() {
        // -2 * 3 is (-2) * 3
        let expected = Node::new_binary_multiplication(
            Node::new_negation(Node::new_number(2)),
            Node::new_number(3),
        );

        assert_eq!(parse_text("-2 * 3"), expected);
    }

    #[test]
    fn sign_after_binary_operator_is_unary() {
        let expected = Node::new_binary_subtraction(
            Node::new_number(1),
            Node::new_identity(Node::new_number(1)),
        );

        assert_eq!(parse_text("1 - +1"), expected);
    }

    #[test]
    fn sign_between_operators_is_unary_operand_of_right_factor() {
        // 2 * -+3
        let expected = Node::new_binary_multiplication(
            Node::new_number(2),
            Node::new_negation(Node::new_identity(Node::new_number(3))),
        );

        assert_eq!(parse_text("2 * -+3"), expected);
    }

    #[test]
    fn missing_factor_after_operator_is_invalid_syntax() {
        let error = parse(Lexer::new("2 + ")).unwrap_err();

        assert_eq!(
            error,
            InterpreterError::InvalidSyntax {
                expected: "an integer, '(', '+' or '-'".into(),
                found: Token::End,
            }
        );
    }

    #[test]
    fn operator_in_factor_position_is_invalid_syntax() {
        let error = parse(Lexer::new("* 2")).unwrap_err();

        assert_eq!(error.code(), "InvalidSyntax");
    }

    #[test]
    fn missing_closing_parenthesis_is_invalid_syntax() {
        let error = parse(Lexer::new("(1 + 2")).unwrap_err();

        assert_eq!(
            error,
            InterpreterError::InvalidSyntax {
                expected: "')'".into(),
                found: Token::End,
            }
        );
    }

    #[test]
    fn empty_parentheses_are_invalid_syntax() {
        let error = parse(Lexer::new("()")).unwrap_err();

        assert_eq!(error.code(), "InvalidSyntax");
    }

    #[test]
    fn empty_input_is_invalid_syntax() {
        let error = parse(Lexer::new("")).unwrap_err();

        assert_eq!(error.code(), "InvalidSyntax");
    }

    #[test]
    fn invalid_character_is_reported_before_syntax() {
        let error = parse(Lexer::new("2 $ 3")).unwrap_err();

        assert_eq!(error.code(), "InvalidCharacter");
    }
}
