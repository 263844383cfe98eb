pub mod error;
pub mod evaluator;
mod infix_converter;
pub mod lexer;
pub mod operator;
pub mod token;

use crate::calculator::token::Token;
use crate::debug;
use anyhow::{Context, Result};
use string_builder::Builder;

/// The outcome of one conversion-then-evaluation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    /// The expression rewritten in postfix notation.
    pub postfix: String,
    /// The integer value of the expression.
    pub result: i32,
}

/// Converts the given infix expression to postfix notation and evaluates it.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, e.g. `"2+3*4"`.
///
/// returns: The postfix form of the expression together with its value.
///
/// # Examples
///
/// ```
/// use postfix_calculator::calculator::calculate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let calculation = calculate("2+3*4")?;
/// assert_eq!(calculation.postfix, "234*+");
/// assert_eq!(calculation.result, 14);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn calculate(expression: &str) -> Result<Calculation> {
    let tokens = lexer::tokenize(expression)?;
    let postfix_tokens = infix_converter::infix_to_postfix(tokens)?;
    debug!(&postfix_tokens);
    let result = evaluator::evaluate_postfix(&postfix_tokens)?;
    let postfix = tokens_to_string(&postfix_tokens)?;
    Ok(Calculation { postfix, result })
}

/// Converts the given infix expression to postfix notation without
/// evaluating it.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The postfix form of the expression, in text.
///
/// # Examples
///
/// ```
/// use postfix_calculator::calculator::convert;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix = convert("(2+3)*4")?;
/// assert_eq!(postfix, "23+4*");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<String> {
    let tokens = lexer::tokenize(expression)?;
    let postfix_tokens = infix_converter::infix_to_postfix(tokens)?;
    tokens_to_string(&postfix_tokens)
}

/// Prints the given tokens back as compact text.
///
/// Every token is a single character, so no separating whitespace is added.
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}
