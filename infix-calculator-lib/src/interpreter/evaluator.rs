use crate::interpreter::error::Result;
use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_unary_operation, SyntaxVisitor,
};
use crate::interpreter::value::Value;

/// Evaluates the given expression tree.
///
/// # Arguments
///
/// * `tree`: The expression to evaluate, represented as an expression tree.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::evaluator::evaluate_tree;
/// use infix_calculator::interpreter::syntax::expression_tree::Node;
/// use infix_calculator::interpreter::value::Value;
///
/// let tree = Node::new_binary_subtraction(Node::new_number(1), Node::new_number(3));
/// assert_eq!(evaluate_tree(&tree).unwrap(), Value::Integer(-2));
/// ```
pub fn evaluate_tree(tree: &Node) -> Result<Value> {
    tree.accept(&mut Evaluator)
}

struct Evaluator;

impl SyntaxVisitor for Evaluator {
    type Output = Result<Value>;

    fn visit_number(&mut self, value: i64) -> Result<Value> {
        Ok(Value::Integer(value))
    }

    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) -> Result<Value> {
        let operand = walk_unary_operation(self, operand)?;
        operator.evaluate(operand)
    }

    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) -> Result<Value> {
        let (left, right) = walk_binary_operation(self, left_operand, right_operand);
        operator.evaluate(left?, right?)
    }
}
