use crate::calculator::error::Error;
use crate::calculator::operator::BinaryOperator;
use crate::calculator::token::Token;

/// Splits the given expression text into tokens, one per character.
///
/// Every character must be a digit, one of `+ - * /` or a parenthesis;
/// anything else (including whitespace) is rejected. Adjacent digits and
/// adjacent operators are rejected here as well, so the later passes only
/// ever see single-digit operands.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in source order.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, Error> {
    if expression.is_empty() {
        return Err(Error::EmptyExpression);
    }

    let mut tokens = Vec::with_capacity(expression.len());
    let mut previous_digit = false;
    let mut previous_operator = false;

    for (position, character) in expression.char_indices() {
        if let Some(value) = character.to_digit(10) {
            if previous_digit {
                return Err(Error::MultiDigitNumber { position });
            }
            tokens.push(Token::Digit(value as i32));
            previous_digit = true;
            previous_operator = false;
        } else if let Some(operator) = BinaryOperator::from_symbol(character) {
            if previous_operator {
                return Err(Error::ConsecutiveOperators { position });
            }
            tokens.push(Token::Operator(operator));
            previous_operator = true;
            previous_digit = false;
        } else if character == '(' {
            tokens.push(Token::OpenParenthesis);
            previous_digit = false;
            previous_operator = false;
        } else if character == ')' {
            tokens.push(Token::CloseParenthesis);
            previous_digit = false;
            previous_operator = false;
        } else {
            return Err(Error::InvalidToken {
                character,
                position,
            });
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_expression_tokenizes_in_source_order() {
        let tokens = tokenize("2+3*4").unwrap();

        let expected = vec![
            Token::Digit(2),
            Token::Operator(BinaryOperator::Add),
            Token::Digit(3),
            Token::Operator(BinaryOperator::Multiply),
            Token::Digit(4),
        ];
        assert_eq!(tokens, expected)
    }

    #[test]
    fn parenthesised_expression_tokenizes_in_source_order() {
        let tokens = tokenize("(2+3)").unwrap();

        let expected = vec![
            Token::OpenParenthesis,
            Token::Digit(2),
            Token::Operator(BinaryOperator::Add),
            Token::Digit(3),
            Token::CloseParenthesis,
        ];
        assert_eq!(tokens, expected)
    }

    #[test]
    fn empty_expression_returns_err() {
        let error = tokenize("").unwrap_err();
        assert_eq!(error, Error::EmptyExpression)
    }

    #[test]
    fn unknown_character_returns_err() {
        let error = tokenize("2+x").unwrap_err();
        assert_eq!(
            error,
            Error::InvalidToken {
                character: 'x',
                position: 2,
            }
        )
    }

    #[test]
    fn whitespace_returns_err() {
        let error = tokenize("2 + 3").unwrap_err();
        assert_eq!(
            error,
            Error::InvalidToken {
                character: ' ',
                position: 1,
            }
        )
    }

    #[test]
    fn multi_digit_number_returns_err() {
        let error = tokenize("12+3").unwrap_err();
        assert_eq!(error, Error::MultiDigitNumber { position: 1 })
    }

    #[test]
    fn consecutive_operators_return_err() {
        let error = tokenize("2+*3").unwrap_err();
        assert_eq!(error, Error::ConsecutiveOperators { position: 2 })
    }

    #[test]
    fn operator_after_parenthesis_is_not_consecutive() {
        // The ')' resets the operator adjacency tracking.
        tokenize("(2+3)*4").unwrap();
    }
}
