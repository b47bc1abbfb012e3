//! Named binary operations over the arithmetic core.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::arithmetic::{self, ArithmeticError};

/// One of the five operations the calculator supports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `lhs` is the value, `rhs` the percentage to take of it.
    Percentage,
}

impl Operation {
    /// Canonical lowercase name (`add`, `subtract`, ...).
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Infix symbol used when printing an expression.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Percentage => "%",
        }
    }

    /// Apply the operation to two operands.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        match self {
            Operation::Add => Ok(arithmetic::add(lhs, rhs)),
            Operation::Subtract => Ok(arithmetic::subtract(lhs, rhs)),
            Operation::Multiply => Ok(arithmetic::multiply(lhs, rhs)),
            Operation::Divide => arithmetic::divide(lhs, rhs),
            Operation::Percentage => Ok(arithmetic::percentage(lhs, rhs)),
        }
    }

    /// Human-readable expression, e.g. `10 + 5` or `20% of 100`.
    pub fn describe(self, lhs: f64, rhs: f64) -> String {
        match self {
            Operation::Percentage => format!("{rhs}% of {lhs}"),
            _ => format!("{lhs} {} {rhs}", self.symbol()),
        }
    }

    /// Comma-separated list of canonical names, for error messages.
    pub fn supported() -> String {
        Operation::iter()
            .map(Operation::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" | "plus" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "minus" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "times" | "*" | "x" => Ok(Operation::Multiply),
            "divide" | "div" | "/" => Ok(Operation::Divide),
            "percentage" | "percent" | "pct" | "%" => Ok(Operation::Percentage),
            other => Err(format!(
                "unsupported operation: '{other}'. Supported: {}",
                Operation::supported()
            )),
        }
    }
}
