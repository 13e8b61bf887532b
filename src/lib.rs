//! Core of a single-screen keypad calculator: an immediate-mode input
//! buffer bound to a strictly left-to-right arithmetic evaluator.
//!
//! The two components are independent of any UI toolkit. A host binds
//! its button grid to [`keypad::Session::press`] and re-renders
//! [`keypad::Session::display`] after every press;
//! [`calculator::evaluate`] is also usable standalone.

pub mod calculator;
pub mod keypad;

pub use calculator::{EvalError, evaluate, format_value};
pub use keypad::{Button, KEYPAD_LAYOUT, Session};
