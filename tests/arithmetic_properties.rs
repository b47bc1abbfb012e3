//! Property tests for the arithmetic core.
//!
//! Operands are drawn from a bounded range so products and quotients
//! stay finite and the round-trip tolerance stays meaningful.

use calculator::{ArithmeticError, add, divide, multiply, percentage, subtract};
use proptest::prelude::*;

fn operand() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn non_zero_operand() -> impl Strategy<Value = f64> {
    operand().prop_filter("denominator must be non-zero", |b| b.abs() > 1.0e-3)
}

proptest! {
    #[test]
    fn prop_add_commutes(a in operand(), b in operand()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn prop_subtract_antisymmetric(a in operand(), b in operand()) {
        prop_assert_eq!(subtract(a, b), -subtract(b, a));
    }

    #[test]
    fn prop_multiply_commutes(a in operand(), b in operand()) {
        prop_assert_eq!(multiply(a, b), multiply(b, a));
    }

    #[test]
    fn prop_divide_then_multiply_round_trips(a in operand(), b in non_zero_operand()) {
        let quotient = divide(a, b).unwrap();
        let back = multiply(quotient, b);
        let tolerance = 1.0e-9 * a.abs().max(1.0);
        prop_assert!(
            (back - a).abs() <= tolerance,
            "{} / {} * {} = {}, expected {}", a, b, b, back, a
        );
    }

    #[test]
    fn prop_divide_by_zero_fails(a in operand()) {
        prop_assert_eq!(divide(a, 0.0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn prop_percentage_identities(v in operand()) {
        prop_assert_eq!(percentage(v, 0.0), 0.0);
        // (v * 100) / 100 can be off by an ulp after two roundings
        let whole = percentage(v, 100.0);
        prop_assert!(
            (whole - v).abs() <= 2.0 * f64::EPSILON * v.abs(),
            "100% of {} = {}", v, whole
        );
    }
}
