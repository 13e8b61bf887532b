//! Calculator module for evaluating flat keypad expressions.
//!
//! This module provides functionality to:
//! - Tokenize an expression string at digit/operator boundaries
//! - Reduce the tokens strictly left to right, with no precedence
//! - Format the numeric result for display

mod evaluation;
mod tokenizer;

pub use evaluation::{EvalError, evaluate, format_value};
pub use tokenizer::{Op, Token, normalize, tokenize};
