pub mod expression_tree;
pub(crate) mod syntax_visitor;
pub mod token_tree;
