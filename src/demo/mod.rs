//! The built-in demo script.
//!
//! Runs each operation once against fixed operands so a fresh install
//! can show what the calculator does without any arguments.

use crate::arithmetic::ArithmeticError;
use crate::models::{Evaluation, Operation};

/// Title printed above the demo results.
pub const TITLE: &str = "Calculator Demo";

/// The demo script: `(operation, lhs, rhs)`.
pub const SCRIPT: [(Operation, f64, f64); 5] = [
    (Operation::Add, 10.0, 5.0),
    (Operation::Subtract, 10.0, 5.0),
    (Operation::Multiply, 10.0, 5.0),
    (Operation::Divide, 10.0, 5.0),
    (Operation::Percentage, 100.0, 20.0),
];

/// Evaluate the demo script in order.
pub fn run() -> Result<Vec<Evaluation>, ArithmeticError> {
    evaluate_all(&SCRIPT)
}

/// Evaluate a list of operations, stopping at the first failure.
pub fn evaluate_all(script: &[(Operation, f64, f64)]) -> Result<Vec<Evaluation>, ArithmeticError> {
    script
        .iter()
        .map(|&(op, lhs, rhs)| Evaluation::compute(op, lhs, rhs))
        .collect()
}

/// Header lines: the title and an `=` underline of the same width.
pub fn header() -> String {
    format!("{TITLE}\n{}\n", "=".repeat(TITLE.len()))
}
