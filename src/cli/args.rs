//! Clap argument types.

use clap::Parser;

use calculator::constants::MAX_PRECISION;
use calculator::models::{Operation, OutputFormat};

/// Small arithmetic calculator.
#[derive(Parser, Debug)]
#[command(name = "calculator", version = calculator::constants::VERSION)]
pub struct Cli {
    /// Output format (overrides config and CALCULATOR_FORMAT).
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Fixed number of decimals for results, 0-32 (overrides config and CALCULATOR_PRECISION).
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_PRECISION)),
    )]
    pub precision: Option<u8>,

    /// Enable debug logging on stderr.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    /// Runs the demo when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run every operation once against fixed operands.
    Demo,

    /// Evaluate a single operation.
    Eval(EvalArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `eval` subcommand.
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct EvalArgs {
    /// Operation name: add, subtract, multiply, divide, percentage (or an alias).
    pub operation: Operation,

    /// Left operand (the value, for percentage).
    pub lhs: f64,

    /// Right operand (the percentage, for percentage).
    pub rhs: f64,
}
