//! Exact arithmetic on fractions and repeating decimals from the command line.
//!
//! Set `RUST_LOG=debug` to see how values were read.
use std::cmp::Ordering;
use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::info;

use refrac::{Fraction, ParseError, ParseResult};

#[derive(Parser)]
#[clap(name = "refrac", version)]
#[clap(about = "Exact arithmetic on fractions (3/5) and repeating decimals (1.2(3))")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a value, its lowest terms and its floating point approximation
    Show {
        #[clap(allow_hyphen_values = true)]
        value: String,
    },
    /// Add two values
    Add(Operands),
    /// Subtract the right value from the left value
    Sub(Operands),
    /// Multiply two values
    Mul(Operands),
    /// Divide the left value by the right value
    Div(Operands),
    /// Compare two values, printing <, =, or >
    Cmp(Operands),
}

#[derive(clap::Args)]
struct Operands {
    #[clap(allow_hyphen_values = true)]
    left: String,
    #[clap(allow_hyphen_values = true)]
    right: String,
}

impl Operands {
    fn read(&self) -> ParseResult<(Fraction, Fraction)> {
        let left = self.left.parse().map_err(|error: ParseError| error.wrap("Left operand"))?;
        let right = self.right.parse().map_err(|error: ParseError| error.wrap("Right operand"))?;

        Ok((left, right))
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let Cli { command } = Cli::parse();
    match run(&command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        },
        Err(error) => {
            report(&error);
            ExitCode::FAILURE
        },
    }
}

fn run(command: &Command) -> ParseResult<String> {
    match command {
        Command::Show { value } => {
            let fraction: Fraction = value.parse()?;
            let reduced = fraction.reduced();
            Ok(format!("{}\n{}\n{}", fraction, reduced, reduced.to_f64()))
        },
        Command::Add(operands) => operands.read().and_then(|(left, right)| number(left + right)),
        Command::Sub(operands) => operands.read().and_then(|(left, right)| number(left - right)),
        Command::Mul(operands) => operands.read().and_then(|(left, right)| number(left * right)),
        Command::Div(operands) => operands.read().and_then(|(left, right)| number(left / right)),
        Command::Cmp(operands) => operands.read().and_then(|(left, right)| compare(left, right)),
    }
}

/// Format a result, which might have become NaN by dividing by zero.
fn number(result: Fraction) -> ParseResult<String> {
    if result.is_nan() {
        Err(ParseError::new("The result is not a number; was there a division by zero?"))
    } else {
        info!("Result has value {}", result.to_f64());
        Ok(result.to_string())
    }
}

/// The symbol for how the left value relates to the right value.
fn compare(left: Fraction, right: Fraction) -> ParseResult<String> {
    let symbol = match left.value_cmp(&right) {
        Some(Ordering::Less) => "<",
        Some(Ordering::Equal) => "=",
        Some(Ordering::Greater) => ">",
        None => return Err(ParseError::new(format!("Can't compare {} with {}.", left, right))),
    };

    Ok(symbol.to_string())
}

fn report(error: &ParseError) {
    eprintln!("error: {}", error);

    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}
