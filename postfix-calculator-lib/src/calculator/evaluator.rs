use crate::calculator::error::Error;
use crate::calculator::token::Token;

/// Evaluates the given postfix token sequence to a single integer.
///
/// Digits push their value onto the operand stack; an operator pops its
/// right operand, then its left, and pushes the computed result back.
/// A well-formed sequence leaves exactly one value on the stack.
///
/// # Arguments
///
/// * `tokens`: The tokens to evaluate, in postfix format.
///
/// returns: The integer value of the expression.
pub fn evaluate_postfix(tokens: &[Token]) -> Result<i32, Error> {
    let mut operands: Vec<i32> = Vec::new();

    for token in tokens {
        match token {
            Token::Digit(value) => operands.push(*value),
            Token::Operator(operator) => {
                let right = operands.pop().ok_or(Error::StackUnderflow {
                    operator: *operator,
                })?;
                let left = operands.pop().ok_or(Error::StackUnderflow {
                    operator: *operator,
                })?;
                operands.push(operator.evaluate(left, right)?);
            }
            // The converter never emits parentheses.
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(Error::UnbalancedParenthesis);
            }
        }
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        [] => Err(Error::EmptyExpression),
        leftover => Err(Error::TrailingOperands {
            count: leftover.len(),
        }),
    }
}
