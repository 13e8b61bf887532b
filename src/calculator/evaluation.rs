//! Left-to-right expression evaluation.
//!
//! Reduces a tokenized expression strictly in encounter order: each
//! operator applies immediately to the running accumulator, with no
//! operator precedence. `2+3*4` is 20, not 14.

use thiserror::Error;
use tracing::debug;

use super::tokenizer::{Token, normalize, tokenize};

/// Failure to evaluate a keypad expression.
///
/// There is a single kind on purpose: the keypad permits arbitrary
/// buffers at keystroke time, and every malformed buffer (empty
/// input, dangling operators, `1.2.3`, foreign characters) collapses
/// to the same displayed `Error`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// The expression could not be tokenized or reduced.
    #[error("invalid expression")]
    InvalidExpression,
}

/// Evaluate a flat keypad expression.
///
/// The input is normalized (locale glyphs, leading minus), tokenized,
/// and reduced left to right. Division by zero follows native f64
/// semantics and yields an infinite or NaN value rather than an error;
/// [`format_value`] decides how such values display.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let normalized = normalize(expression);
    let tokens = tokenize(&normalized)?;
    debug!(expression, token_count = tokens.len(), "evaluating");

    // A well-formed expression has an odd token count: an operand
    // followed by (operator, operand) pairs.
    if tokens.len() % 2 == 0 {
        return Err(EvalError::InvalidExpression);
    }

    let mut acc = match tokens[0] {
        Token::Operand(value) => value,
        Token::Operator(_) => return Err(EvalError::InvalidExpression),
    };

    for pair in tokens[1..].chunks(2) {
        match pair {
            [Token::Operator(op), Token::Operand(operand)] => {
                acc = op.apply(acc, *operand);
            }
            _ => return Err(EvalError::InvalidExpression),
        }
    }

    Ok(acc)
}

/// Format an evaluation result for display.
///
/// Integral-valued doubles render without a fractional part, other
/// values render with up to 10 decimal places and no trailing zeros.
/// Non-finite values render by name.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let name = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return name.to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.10}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_only_strings() {
        assert_eq!(evaluate("7"), Ok(7.0));
        assert_eq!(evaluate("42"), Ok(42.0));
        assert_eq!(evaluate("3.25"), Ok(3.25));
    }

    #[test]
    fn test_left_to_right_no_precedence() {
        assert_eq!(evaluate("2+3*4"), Ok(20.0));
        assert_eq!(evaluate("10-4/2"), Ok(3.0));
    }

    #[test]
    fn test_leading_minus_fixup() {
        assert_eq!(evaluate("-5+3"), Ok(-2.0));
        assert_eq!(evaluate("-2*3"), Ok(-6.0));
    }

    #[test]
    fn test_locale_glyphs() {
        assert_eq!(evaluate("6÷2"), Ok(3.0));
        assert_eq!(evaluate("6×2"), Ok(12.0));
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(evaluate(""), Err(EvalError::InvalidExpression));
    }

    #[test]
    fn test_dangling_operator_fails() {
        assert_eq!(evaluate("5+"), Err(EvalError::InvalidExpression));
        assert_eq!(evaluate("5+3-"), Err(EvalError::InvalidExpression));
    }

    #[test]
    fn test_adjacent_operators_fail() {
        assert_eq!(evaluate("5+-3"), Err(EvalError::InvalidExpression));
        assert_eq!(evaluate("2**2"), Err(EvalError::InvalidExpression));
    }

    #[test]
    fn test_malformed_number_fails() {
        assert_eq!(evaluate("1.2.3"), Err(EvalError::InvalidExpression));
    }

    #[test]
    fn test_dot_next_to_operator_fails() {
        assert_eq!(evaluate("5.+3"), Err(EvalError::InvalidExpression));
        assert_eq!(evaluate("5+.3"), Err(EvalError::InvalidExpression));
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        assert_eq!(evaluate("5/0"), Ok(f64::INFINITY));
        assert_eq!(evaluate("-5/0"), Ok(f64::NEG_INFINITY));
        assert!(evaluate("0/0").unwrap().is_nan());
    }

    #[test]
    fn test_evaluate_is_pure() {
        assert_eq!(evaluate("12+3*4"), evaluate("12+3*4"));
    }

    #[test]
    fn test_format_integral_values() {
        assert_eq!(format_value(7.0), "7");
        assert_eq!(format_value(-3.0), "-3");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn test_format_fractional_values() {
        assert_eq!(format_value(7.5), "7.5");
        assert_eq!(format_value(1.0 / 3.0), "0.3333333333");
    }

    #[test]
    fn test_format_non_finite_values() {
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_value(f64::NAN), "NaN");
    }
}
