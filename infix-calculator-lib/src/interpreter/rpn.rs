use crate::interpreter::error::{InterpreterError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use crate::interpreter::value::Value;
use itertools::Itertools;
use log::debug;

/// Evaluates tokens in postfix notation using a single stack of operands.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens in reverse polish notation. A trailing [`Token::End`] is ignored.
///
/// returns: The value left on the stack.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::rpn::evaluate_postfix_tokens;
/// use infix_calculator::interpreter::token::Token;
/// use infix_calculator::interpreter::value::Value;
///
/// let tokens = [Token::LiteralInteger(4), Token::LiteralInteger(6), Token::Dash];
/// assert_eq!(evaluate_postfix_tokens(&tokens).unwrap(), Value::Integer(-2));
/// ```
pub fn evaluate_postfix_tokens(postfix_tokens: &[Token]) -> Result<Value> {
    debug!("evaluating postfix {}", postfix_tokens.iter().join(" "));
    let mut operands: Vec<Value> = Vec::new();

    let tokens = match postfix_tokens.split_last() {
        Some((Token::End, rest)) => rest,
        _ => postfix_tokens,
    };

    for token in tokens {
        match token {
            Token::LiteralInteger(value) => operands.push(Value::Integer(*value)),
            Token::LeftParentheses | Token::RightParentheses | Token::End => {
                return Err(malformed(format!("unexpected '{}'", token)))
            }
            operator_token => {
                let operator = BinaryOperator::from_token(operator_token)
                    .ok_or_else(|| malformed(format!("unexpected '{}'", operator_token)))?;
                let operand_two = operands
                    .pop()
                    .ok_or_else(|| malformed(format!("'{}' is missing a second operand", operator)))?;
                let operand_one = operands
                    .pop()
                    .ok_or_else(|| malformed(format!("'{}' is missing a first operand", operator)))?;
                operands.push(operator.evaluate(operand_one, operand_two)?);
            }
        }
    }

    let result = operands.pop().ok_or_else(|| malformed("no value found".into()))?;
    if !operands.is_empty() {
        return Err(malformed(format!(
            "{} values left without an operator",
            operands.len() + 1
        )));
    }
    Ok(result)
}

fn malformed(reason: String) -> InterpreterError {
    InterpreterError::MalformedPostfix(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use parameterized_macro::parameterized;

    #[parameterized(
    postfix = {
    "5 3 + 12 * 3 /",
    "8 3 - 2 -",
    "2 3 4 * +",
    "7 2 /",
    "42",
    },
    expected = {
    Value::Integer(32),
    Value::Integer(3),
    Value::Integer(14),
    Value::Real(3.5),
    Value::Integer(42),
    }
    )]
    fn postfix_expression_evaluates_to_expected_value(postfix: &str, expected: Value) {
        let tokens = tokenize(postfix).unwrap();
        assert_eq!(evaluate_postfix_tokens(&tokens).unwrap(), expected);
    }

    #[parameterized(
    postfix = { "+", "1 +", "1 2", "", "( 1 )" }
    )]
    fn malformed_postfix_returns_error(postfix: &str) {
        let tokens = tokenize(postfix).unwrap();
        let error = evaluate_postfix_tokens(&tokens).unwrap_err();
        assert_eq!(error.code(), "MalformedPostfix");
    }

    #[test]
    fn arithmetic_errors_propagate() {
        let tokens = tokenize("1 0 /").unwrap();
        assert_eq!(
            evaluate_postfix_tokens(&tokens).unwrap_err(),
            InterpreterError::DivisionByZero
        );
    }
}
