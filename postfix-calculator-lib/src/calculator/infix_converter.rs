use crate::calculator::error::Error;
use crate::calculator::operator::{Associativity, BinaryOperator};
use crate::calculator::token::Token;
use std::collections::VecDeque;

/// Reorders the given infix tokens into postfix (Reverse Polish) order
/// using the shunting-yard algorithm.
///
/// The output contains no parentheses, and every operator in it appears
/// after the two operands it applies to.
pub fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>, Error> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Digit(_) => output.push(token),
            Token::OpenParenthesis => operators.push_front(token),
            Token::Operator(operator) => parse_operator_token(&mut operators, &mut output, operator),
            Token::CloseParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), Error> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(Error::UnbalancedParenthesis);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), Error> {
    loop {
        match operators.pop_front() {
            None => {
                return Err(Error::UnbalancedParenthesis);
            }
            Some(Token::OpenParenthesis) => {
                // Discard the open parenthesis.
                return Ok(());
            }
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    while let Some(top_of_operator_stack) = operators.front() {
        let other_operator = match top_of_operator_stack {
            Token::Operator(other_operator) => *other_operator,
            // An open parenthesis is the only other token ever pushed.
            _ => break,
        };

        let should_pop = other_operator.precedence_gt(&operator)
            || (other_operator.precedence_eq(&operator)
                && operator.associativity() == Associativity::Left);
        if !should_pop {
            break;
        }

        operators.pop_front();
        output.push(Token::Operator(other_operator));
    }

    operators.push_front(Token::Operator(operator));
}
