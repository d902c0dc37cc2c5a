use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::expression_tree::Node;

/// One method per node variant; [`Node::accept`] dispatches to the right one with an
/// exhaustive match, so a new variant can not be forgotten by any visitor.
///
/// Visitors decide themselves whether and when to descend, usually through the
/// `walk_*` functions below.
pub(crate) trait SyntaxVisitor: Sized {
    type Output;

    fn visit_number(&mut self, value: i64) -> Self::Output;
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node)
        -> Self::Output;
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) -> Self::Output;
}

pub(crate) fn walk_binary_operation<V: SyntaxVisitor>(
    visitor: &mut V,
    left_operand: &Node,
    right_operand: &Node,
) -> (V::Output, V::Output) {
    let left = left_operand.accept(visitor);
    let right = right_operand.accept(visitor);
    (left, right)
}

pub(crate) fn walk_unary_operation<V: SyntaxVisitor>(visitor: &mut V, operand: &Node) -> V::Output {
    operand.accept(visitor)
}
