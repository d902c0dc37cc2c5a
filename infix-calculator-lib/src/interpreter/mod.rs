pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod rpn;
pub mod syntax;
pub mod token;
pub mod value;

use crate::interpreter::error::Result;
use crate::interpreter::evaluator::evaluate_tree;
use crate::interpreter::lexer::{tokenize, Lexer};
use crate::interpreter::rpn::evaluate_postfix_tokens;
use crate::interpreter::token::Token;
use crate::interpreter::value::Value;
use anyhow::Context;
use log::debug;
use string_builder::Builder;
use syntax::expression_tree::Node;
use syntax::token_tree::TokenNode;

/// Evaluates the given infix expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::evaluate;
/// use infix_calculator::interpreter::value::Value;
///
/// let value = evaluate("(2 + 3) * 4").unwrap();
/// assert_eq!(value, Value::Integer(20));
/// ```
pub fn evaluate(expression: &str) -> Result<Value> {
    let expression_tree = convert(expression)?;
    let value = evaluate_tree(&expression_tree)?;
    debug!("{} = {}", expression, value);
    Ok(value)
}

/// Converts the given infix expression into postfix notation.
///
/// Signed factors such as `-1` are not supported here.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression in postfix order, as text.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::to_postfix;
///
/// let postfix = to_postfix("(5 + 3) * 12 / 3").unwrap();
/// assert_eq!(postfix, ["5", "3", "+", "12", "*", "3", "/"]);
/// ```
pub fn to_postfix(expression: &str) -> Result<Vec<String>> {
    let token_tree = convert_to_token_tree(expression)?;
    Ok(token_tree
        .to_postfix()
        .iter()
        .map(Token::to_string)
        .collect())
}

/// Evaluates a whitespace-separated expression in postfix notation, such as `"5 3 + 2 *"`.
pub fn evaluate_postfix(expression: &str) -> Result<Value> {
    let tokens = tokenize(expression)?;
    evaluate_postfix_tokens(&tokens)
}

/// Converts the given input string into an equivalent expression tree.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::convert;
/// # use infix_calculator::interpreter::error::Result;
///
/// # fn main() -> Result<()> {
/// let tree = convert("-(1 + 2)")?;
/// let regenerated_tokens = tree.to_infix();
/// # Ok(()) }
/// ```
pub fn convert(expression: &str) -> Result<Node> {
    let expression_tree = parser::parse(Lexer::new(expression))?;
    debug!("parsed {:?}", expression_tree);
    Ok(expression_tree)
}

/// Converts the given input string into a tree of tokens, for conversion to postfix.
pub fn convert_to_token_tree(expression: &str) -> Result<TokenNode> {
    let token_tree = parser::parse_token_tree(Lexer::new(expression))?;
    debug!("parsed {:?}", token_tree);
    Ok(token_tree)
}

/// Pretty-prints the given vector of tokens with added whitespace.
///
/// Binary operators are surrounded by spaces, signs are attached to their operand.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::tokens_to_string;
/// use infix_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Dash,
///     Token::LiteralInteger(2),
///     Token::Asterisk,
///     Token::LiteralInteger(3),
/// ];
/// let pretty_printed_tokens = tokens_to_string(tokens)?;
/// assert_eq!(pretty_printed_tokens, "-2 * 3");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> anyhow::Result<String> {
    let mut builder = Builder::new(tokens.len());
    let mut previous: Option<Token> = None;

    for token in tokens {
        let is_sign = matches!(
            previous,
            None | Some(Token::LeftParentheses)
                | Some(Token::Plus)
                | Some(Token::Dash)
                | Some(Token::Asterisk)
                | Some(Token::ForwardSlash)
        );
        match token {
            Token::LiteralInteger(value) => builder.append(format!("{}", value)),
            Token::End => {}
            Token::Plus | Token::Dash if is_sign => builder.append(token.to_string()),
            Token::Plus | Token::Dash | Token::Asterisk | Token::ForwardSlash => {
                builder.append(" ");
                builder.append(token.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
        previous = Some(token);
    }

    builder.string().context("Failed to build token string")
}
