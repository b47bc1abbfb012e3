//! Core arithmetic operations.
//!
//! Every operation is a pure function over `f64` with native IEEE-754
//! semantics. The only failure is division by an exact zero, which is
//! reported as [`ArithmeticError::DivisionByZero`] instead of producing
//! an infinity or NaN.

use thiserror::Error;

/// Errors produced by arithmetic operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

/// Sum of `a` and `b`.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Difference of `a` and `b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Product of `a` and `b`.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Quotient of `a` and `b`.
///
/// Fails when `b` compares equal to zero (this includes `-0.0`).
pub fn divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}

/// `percentage` percent of `value`, i.e. `(value * percentage) / 100`.
pub fn percentage(value: f64, percentage: f64) -> f64 {
    (value * percentage) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_positive() {
        assert_eq!(add(5.0, 3.0), 8.0);
    }

    #[test]
    fn add_negative() {
        assert_eq!(add(-5.0, -3.0), -8.0);
    }

    #[test]
    fn add_mixed_signs() {
        assert_eq!(add(5.0, -3.0), 2.0);
    }

    #[test]
    fn subtract_positive() {
        assert_eq!(subtract(10.0, 4.0), 6.0);
    }

    #[test]
    fn subtract_negative() {
        assert_eq!(subtract(-10.0, -4.0), -6.0);
    }

    #[test]
    fn multiply_positive() {
        assert_eq!(multiply(5.0, 4.0), 20.0);
    }

    #[test]
    fn multiply_by_zero() {
        assert_eq!(multiply(5.0, 0.0), 0.0);
    }

    #[test]
    fn multiply_negative() {
        assert_eq!(multiply(-5.0, -4.0), 20.0);
    }

    #[test]
    fn divide_positive() {
        assert_eq!(divide(20.0, 4.0), Ok(5.0));
    }

    #[test]
    fn divide_negative() {
        assert_eq!(divide(-20.0, -4.0), Ok(5.0));
    }

    #[test]
    fn divide_by_zero_fails() {
        let err = divide(10.0, 0.0).unwrap_err();
        assert_eq!(err, ArithmeticError::DivisionByZero);
        assert_eq!(err.to_string(), "Cannot divide by zero");
    }

    #[test]
    fn divide_by_negative_zero_fails() {
        assert_eq!(divide(10.0, -0.0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn divide_zero_numerator() {
        assert_eq!(divide(0.0, 7.0), Ok(0.0));
    }

    #[test]
    fn percentage_of_value() {
        assert_eq!(percentage(100.0, 20.0), 20.0);
    }

    #[test]
    fn percentage_of_zero() {
        assert_eq!(percentage(0.0, 50.0), 0.0);
    }

    #[test]
    fn percentage_over_hundred() {
        assert_eq!(percentage(40.0, 150.0), 60.0);
    }

    #[test]
    fn nan_passes_through() {
        assert!(add(f64::NAN, 1.0).is_nan());
        assert!(divide(f64::NAN, 2.0).unwrap().is_nan());
    }
}
