//! Tokenization of flat keypad expressions.
//!
//! Turns a string like `12+3*4` into an alternating sequence of
//! operands and operators. The split happens exactly at every boundary
//! between a digit and an operator character, so multi-digit numbers
//! (including decimal points) stay whole and runs of adjacent operator
//! characters stay whole too; a run like `+-` surfaces later as an
//! unrecognized operator.

use lazy_static::lazy_static;
use regex::Regex;

use super::EvalError;

lazy_static! {
    /// Matches expressions containing only digits, dots, and the four
    /// operator symbols. Anything else is rejected before splitting.
    static ref EXPRESSION_CHARS: Regex = Regex::new(r"^[0-9.+\-*/]+$").unwrap();
}

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Parse a raw operator token. Only the four single-character
    /// symbols are recognized; runs like `+-` are rejected.
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// The keypad label for this operator.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Apply the operator to an accumulator and the next operand.
    pub fn apply(&self, acc: f64, operand: f64) -> f64 {
        match self {
            Self::Add => acc + operand,
            Self::Sub => acc - operand,
            Self::Mul => acc * operand,
            Self::Div => acc / operand,
        }
    }
}

/// A single token extracted from a raw expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    /// A numeric operand.
    Operand(f64),
    /// One of the four operator symbols.
    Operator(Op),
}

/// Replace locale glyphs with their ASCII operator equivalents and fix
/// up a leading minus so a negative first operand splits correctly
/// (`-5+3` becomes `0-5+3`).
pub fn normalize(expression: &str) -> String {
    let normalized = expression.replace('÷', "/").replace('×', "*");

    if normalized.starts_with('-') {
        format!("0{}", normalized)
    } else {
        normalized
    }
}

/// Tokenize a normalized expression.
///
/// The expression is split exactly at digit/operator adjacency. A dot
/// is never part of a boundary, so it extends whichever token it sits
/// in: `5.+3` keeps `5.+` as one token, which then fails to parse.
/// Tokens at even positions must parse as `f64` operands, tokens at
/// odd positions must be exactly one operator symbol. Any violation
/// (empty input, foreign characters, malformed numbers like `1.2.3`,
/// operator runs like `+-`) is an invalid expression.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, EvalError> {
    if !EXPRESSION_CHARS.is_match(expression) {
        return Err(EvalError::InvalidExpression);
    }

    let mut tokens = Vec::new();
    for (index, run) in split_runs(expression).iter().enumerate() {
        let token = if index % 2 == 0 {
            let value: f64 = run.parse().map_err(|_| EvalError::InvalidExpression)?;
            Token::Operand(value)
        } else {
            let op = Op::from_token(run).ok_or(EvalError::InvalidExpression)?;
            Token::Operator(op)
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Split at every digit/operator adjacency without consuming either
/// side. Only a digit directly next to an operator symbol is a
/// boundary; a dot next to an operator is not, so the dot stays glued
/// to the adjacent token.
fn split_runs(expression: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (pos, c) in expression.char_indices() {
        if let Some(p) = prev
            && is_boundary(p, c)
        {
            runs.push(&expression[start..pos]);
            start = pos;
        }
        prev = Some(c);
    }

    if start < expression.len() {
        runs.push(&expression[start..]);
    }

    runs
}

fn is_boundary(prev: char, next: char) -> bool {
    (prev.is_ascii_digit() && is_operator_char(next))
        || (is_operator_char(prev) && next.is_ascii_digit())
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}
