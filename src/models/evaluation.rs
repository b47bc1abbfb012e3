//! The record of one computed operation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arithmetic::ArithmeticError;
use crate::models::Operation;

/// An operation together with its operands and result.
///
/// Non-finite numbers serialize as the strings `"inf"`, `"-inf"` and
/// `"NaN"`, since JSON has no representation for them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub operation: Operation,
    #[serde(with = "ieee")]
    pub lhs: f64,
    #[serde(with = "ieee")]
    pub rhs: f64,
    #[serde(with = "ieee")]
    pub result: f64,
}

impl Evaluation {
    /// Apply `operation` to the operands and record the result.
    pub fn compute(operation: Operation, lhs: f64, rhs: f64) -> Result<Self, ArithmeticError> {
        debug!(%operation, lhs, rhs, "evaluating");
        let result = operation.apply(lhs, rhs)?;
        Ok(Self {
            operation,
            lhs,
            rhs,
            result,
        })
    }

    /// The expression that produced this result, e.g. `10 + 5`.
    pub fn expression(&self) -> String {
        self.operation.describe(self.lhs, self.rhs)
    }
}

/// Serde adapter keeping infinities and NaN intact in formats without them.
mod ieee {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(s) => s
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid number: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_records_operands() {
        let eval = Evaluation::compute(Operation::Multiply, 10.0, 5.0).unwrap();
        assert_eq!(eval.operation, Operation::Multiply);
        assert_eq!(eval.lhs, 10.0);
        assert_eq!(eval.rhs, 5.0);
        assert_eq!(eval.result, 50.0);
        assert_eq!(eval.expression(), "10 * 5");
    }

    #[test]
    fn compute_propagates_division_by_zero() {
        let err = Evaluation::compute(Operation::Divide, 1.0, 0.0).unwrap_err();
        assert_eq!(err, ArithmeticError::DivisionByZero);
    }

    #[test]
    fn serializes_operation_as_lowercase() {
        let eval = Evaluation::compute(Operation::Percentage, 100.0, 20.0).unwrap();
        let json = serde_json::to_value(eval).unwrap();
        assert_eq!(json["operation"], "percentage");
        assert_eq!(json["result"], 20.0);
    }

    #[test]
    fn serializes_non_finite_as_strings() {
        let eval = Evaluation::compute(Operation::Add, f64::INFINITY, 1.0).unwrap();
        let json = serde_json::to_value(eval).unwrap();
        assert_eq!(json["lhs"], "inf");
        assert_eq!(json["rhs"], 1.0);
        assert_eq!(json["result"], "inf");

        let eval = Evaluation::compute(Operation::Subtract, f64::NAN, 1.0).unwrap();
        let json = serde_json::to_value(eval).unwrap();
        assert_eq!(json["result"], "NaN");

        let eval = Evaluation::compute(Operation::Multiply, f64::NEG_INFINITY, 2.0).unwrap();
        let json = serde_json::to_value(eval).unwrap();
        assert_eq!(json["result"], "-inf");
    }

    #[test]
    fn deserializes_numbers_and_non_finite_strings() {
        let eval: Evaluation = serde_json::from_str(
            r#"{"operation": "add", "lhs": "inf", "rhs": 1, "result": "inf"}"#,
        )
        .unwrap();
        assert_eq!(eval.lhs, f64::INFINITY);
        assert_eq!(eval.rhs, 1.0);
        assert_eq!(eval.result, f64::INFINITY);

        let eval: Evaluation = serde_json::from_str(
            r#"{"operation": "subtract", "lhs": "NaN", "rhs": 1.5, "result": "NaN"}"#,
        )
        .unwrap();
        assert!(eval.result.is_nan());
    }
}
