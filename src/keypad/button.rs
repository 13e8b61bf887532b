//! Keypad buttons and the button grid.
//!
//! Raw labels from the host UI are decided into a closed [`Button`]
//! variant exactly once, at the boundary; everything downstream
//! pattern-matches over the finite set instead of re-parsing strings.

use crate::calculator::Op;

/// The button grid of the host screen, top row first.
pub const KEYPAD_LAYOUT: &[&[&str]] = &[
    &["7", "8", "9", "/"],
    &["4", "5", "6", "*"],
    &["1", "2", "3", "-"],
    &["0", ".", "=", "+"],
    &["C"],
];

/// A single keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    /// A digit `0`-`9`.
    Digit(char),
    /// The decimal point.
    Decimal,
    /// One of the four arithmetic operators.
    Operator(Op),
    /// Evaluate the current input.
    Equals,
    /// Clear input and result.
    Clear,
}

impl Button {
    /// Decide a raw UI label into a button. Returns `None` for labels
    /// outside the keypad's closed set.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "=" => Some(Self::Equals),
            "C" => Some(Self::Clear),
            "." => Some(Self::Decimal),
            "+" => Some(Self::Operator(Op::Add)),
            "-" => Some(Self::Operator(Op::Sub)),
            "*" | "×" => Some(Self::Operator(Op::Mul)),
            "/" | "÷" => Some(Self::Operator(Op::Div)),
            _ => {
                let c = label.chars().next()?;
                (label.len() == 1 && c.is_ascii_digit()).then_some(Self::Digit(c))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_decided() {
        assert_eq!(Button::from_label("0"), Some(Button::Digit('0')));
        assert_eq!(Button::from_label("9"), Some(Button::Digit('9')));
    }

    #[test]
    fn test_operators_decided() {
        assert_eq!(Button::from_label("+"), Some(Button::Operator(Op::Add)));
        assert_eq!(Button::from_label("÷"), Some(Button::Operator(Op::Div)));
        assert_eq!(Button::from_label("×"), Some(Button::Operator(Op::Mul)));
    }

    #[test]
    fn test_controls_decided() {
        assert_eq!(Button::from_label("="), Some(Button::Equals));
        assert_eq!(Button::from_label("C"), Some(Button::Clear));
        assert_eq!(Button::from_label("."), Some(Button::Decimal));
    }

    #[test]
    fn test_unknown_labels_rejected() {
        assert_eq!(Button::from_label(""), None);
        assert_eq!(Button::from_label("x"), None);
        assert_eq!(Button::from_label("12"), None);
        assert_eq!(Button::from_label("("), None);
    }

    #[test]
    fn test_every_layout_label_is_a_button() {
        for row in KEYPAD_LAYOUT {
            for label in *row {
                assert!(Button::from_label(label).is_some(), "label {label}");
            }
        }
    }
}
