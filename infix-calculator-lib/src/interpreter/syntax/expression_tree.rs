use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_unary_operation, SyntaxVisitor,
};
use crate::interpreter::token::Token;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An expression, as produced by [`crate::interpreter::parser::parse`].
///
/// Each node exclusively owns its children, and nodes are never changed once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    // Terminal symbols (leaves)
    Number(i64),
    // Non-terminal symbols (non-leaves)
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<Node>,
    },
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
}

impl Node {
    pub fn new_number(value: i64) -> Node {
        Node::Number(value)
    }

    pub fn new_unary(operator: UnaryOperator, operand: Node) -> Node {
        Node::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn new_negation(operand: Node) -> Node {
        Self::new_unary(UnaryOperator::Minus, operand)
    }

    pub fn new_identity(operand: Node) -> Node {
        Self::new_unary(UnaryOperator::Plus, operand)
    }

    pub fn new_binary(operator: BinaryOperator, left_operand: Node, right_operand: Node) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_binary_addition(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary(BinaryOperator::Add, left_operand, right_operand)
    }

    pub fn new_binary_subtraction(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary(BinaryOperator::Subtract, left_operand, right_operand)
    }

    pub fn new_binary_multiplication(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary(BinaryOperator::Multiply, left_operand, right_operand)
    }

    pub fn new_binary_division(left_operand: Node, right_operand: Node) -> Node {
        Self::new_binary(BinaryOperator::Divide, left_operand, right_operand)
    }

    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Node::BinaryOperation { operator, .. } => Some(*operator),
            Node::Number(_) | Node::UnaryOperation { .. } => None,
        }
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept<V: SyntaxVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Number(value) => visitor.visit_number(*value),
            Node::UnaryOperation { operator, operand } => {
                visitor.visit_unary_operation(operator, operand)
            }
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
        }
    }

    /// Regenerates the infix tokens of this expression, with only the parentheses
    /// that are needed to keep its structure.
    ///
    /// # Examples
    ///
    /// ```
    /// use infix_calculator::interpreter::{convert, tokens_to_string};
    ///
    /// let tree = convert("((1 + 2)) * 3 * (4 * 5)").unwrap();
    /// let regenerated = tokens_to_string(tree.to_infix()).unwrap();
    /// assert_eq!(regenerated, "(1 + 2) * 3 * (4 * 5)");
    /// ```
    pub fn to_infix(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.build_expression(&mut tokens);
        tokens
    }

    fn build_expression(&self, tokens: &mut Vec<Token>) {
        match self {
            Node::Number(value) => tokens.push(Token::LiteralInteger(*value)),
            Node::UnaryOperation { operator, operand } => {
                tokens.push(operator.token());
                parenthesize_if(
                    tokens,
                    || operand.as_binary_operator().is_some(),
                    |tokens| operand.build_expression(tokens),
                );
            }
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => {
                parenthesize_if(
                    tokens,
                    || matches!(left_operand.as_binary_operator(), Some(child) if operator.precedence_gt(&child)),
                    |tokens| left_operand.build_expression(tokens),
                );
                tokens.push(operator.token());
                parenthesize_if(
                    tokens,
                    || matches!(right_operand.as_binary_operator(), Some(child) if operator.precedence_gt(&child) || operator.precedence_eq(&child)),
                    |tokens| right_operand.build_expression(tokens),
                );
            }
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    type Output = ();

    fn visit_number(&mut self, value: i64) {
        self.builder.add_empty_child(format!("{}", value));
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        self.builder.begin_child(format!("{} (unary)", operator));
        walk_unary_operation(self, operand);
        self.builder.end_child();
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
}

fn parenthesize_if(
    tokens: &mut Vec<Token>,
    predicate: impl Fn() -> bool,
    mut build_interior: impl FnMut(&mut Vec<Token>),
) {
    let mut close_parentheses = false;

    if predicate() {
        tokens.push(Token::LeftParentheses);
        close_parentheses = true;
    }

    build_interior(tokens);

    if close_parentheses {
        tokens.push(Token::RightParentheses);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn print_succeeds() {
        let tree = create_complex_tree();

        print!("{}", tree);
    }

    #[test]
    fn printed_tree_contains_every_node() {
        let printed = create_complex_tree().to_string();

        for label in ["expression", "+", "*", "- (unary)", "1", "2", "3", "4"] {
            assert!(printed.contains(label), "missing {} in\n{}", label, printed);
        }
    }

    #[test]
    fn complex_tree_converts_back_to_infix() {
        let tree = create_complex_tree();

        let actual_tokens = tree.to_infix();

        assert_eq!(
            actual_tokens,
            vec![
                Token::LiteralInteger(1),
                Token::Plus,
                Token::Dash,
                Token::LeftParentheses,
                Token::LiteralInteger(2),
                Token::Plus,
                Token::LiteralInteger(3),
                Token::RightParentheses,
                Token::Asterisk,
                Token::LiteralInteger(4),
            ]
        );
    }

    #[test]
    fn right_nested_subtraction_keeps_its_parentheses() {
        // 8 - (3 - 2)
        let tree = Node::new_binary_subtraction(
            Node::new_number(8),
            Node::new_binary_subtraction(Node::new_number(3), Node::new_number(2)),
        );

        let actual_tokens = tree.to_infix();

        assert_eq!(
            actual_tokens,
            vec![
                Token::LiteralInteger(8),
                Token::Dash,
                Token::LeftParentheses,
                Token::LiteralInteger(3),
                Token::Dash,
                Token::LiteralInteger(2),
                Token::RightParentheses,
            ]
        );
    }

    #[test]
    fn left_nested_subtraction_needs_no_parentheses() {
        // (8 - 3) - 2
        let tree = Node::new_binary_subtraction(
            Node::new_binary_subtraction(Node::new_number(8), Node::new_number(3)),
            Node::new_number(2),
        );

        let actual_tokens = tree.to_infix();

        assert_eq!(
            actual_tokens,
            vec![
                Token::LiteralInteger(8),
                Token::Dash,
                Token::LiteralInteger(3),
                Token::Dash,
                Token::LiteralInteger(2),
            ]
        );
    }

    #[test]
    fn right_nested_operation_of_same_precedence_keeps_its_parentheses() {
        // 2 * (3 / 2)
        let tree = Node::new_binary_multiplication(
            Node::new_number(2),
            Node::new_binary_division(Node::new_number(3), Node::new_number(2)),
        );

        let actual_tokens = tree.to_infix();

        assert_eq!(
            actual_tokens,
            vec![
                Token::LiteralInteger(2),
                Token::Asterisk,
                Token::LeftParentheses,
                Token::LiteralInteger(3),
                Token::ForwardSlash,
                Token::LiteralInteger(2),
                Token::RightParentheses,
            ]
        );
    }

    fn create_complex_tree() -> Node {
        // 1 + -(2 + 3) * 4
        let second_plus = Node::new_binary_addition(Node::new_number(2), Node::new_number(3));
        let negation = Node::new_negation(second_plus);
        let star = Node::new_binary_multiplication(negation, Node::new_number(4));
        Node::new_binary_addition(Node::new_number(1), star)
    }
}
