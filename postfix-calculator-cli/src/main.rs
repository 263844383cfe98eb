use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use postfix_calculator::calculator::calculate;
use std::io::{self, BufRead, Write};

/// Converts the given infix expression to postfix notation and evaluates it
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate; read from standard input when omitted
    expression: Option<String>,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let expression = match args.expression {
        Some(expression) => expression,
        None => read_expression()?,
    };
    debug!("input expression: {}", expression);

    let calculation = calculate(&expression)
        .with_context(|| format!("could not evaluate expression '{}'", expression))?;

    println!("Postfix expression: {}", calculation.postfix);
    println!("Result: {}", calculation.result);
    Ok(())
}

fn read_expression() -> Result<String> {
    print!("Enter the infix expression: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("could not read expression from standard input")?;
    Ok(line.trim().to_string())
}
