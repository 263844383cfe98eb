use crate::calculator::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression, always one source character wide
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    Digit(i32),
    Operator(BinaryOperator),
    OpenParenthesis,
    CloseParenthesis,
}

impl Token {
    /// A 'value' is a token that represents a numerical value,
    /// i.e. a single-digit literal.
    pub fn is_value(&self) -> bool {
        matches!(self, Token::Digit(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}
