use crate::calculator::operator::BinaryOperator;
use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the postfix-calculator crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input contained no tokens at all
    EmptyExpression,
    /// A character that is not a digit, an operator or a parenthesis
    InvalidToken { character: char, position: usize },
    /// Two or more adjacent digits; only single-digit operands are supported
    MultiDigitNumber { position: usize },
    /// Two or more adjacent operators
    ConsecutiveOperators { position: usize },
    /// An unmatched '(' or ')'
    UnbalancedParenthesis,
    /// An operator was reached during evaluation without two operands available
    StackUnderflow { operator: BinaryOperator },
    /// Evaluation finished with extra values left on the operand stack
    TrailingOperands { count: usize },
    /// A division with a right operand of zero
    DivisionByZero,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyExpression => write!(f, "empty expression"),
            Error::InvalidToken {
                character,
                position,
            } => write!(f, "invalid token '{}' at position {}", character, position),
            Error::MultiDigitNumber { position } => write!(
                f,
                "multiple digits in a row at position {}, only single-digit numbers are supported",
                position
            ),
            Error::ConsecutiveOperators { position } => {
                write!(f, "multiple operators in a row at position {}", position)
            }
            Error::UnbalancedParenthesis => write!(f, "mismatched parenthesis"),
            Error::StackUnderflow { operator } => write!(
                f,
                "operator '{}' does not have two operands available",
                operator
            ),
            Error::TrailingOperands { count } => write!(
                f,
                "{} values left on the operand stack after evaluation",
                count
            ),
            Error::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_token_message_identifies_character_and_position() {
        let error = Error::InvalidToken {
            character: 'x',
            position: 2,
        };
        assert_eq!(error.to_string(), "invalid token 'x' at position 2")
    }

    #[test]
    fn stack_underflow_message_identifies_operator() {
        let error = Error::StackUnderflow {
            operator: BinaryOperator::Add,
        };
        assert_eq!(
            error.to_string(),
            "operator '+' does not have two operands available"
        )
    }
}
