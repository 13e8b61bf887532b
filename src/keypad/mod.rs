//! Keypad module binding button presses to calculator state.
//!
//! This module provides functionality to:
//! - Decide raw UI labels into a closed set of buttons
//! - Step the session state machine one press at a time
//! - Describe the button grid of the host screen

mod button;
mod session;

pub use button::{Button, KEYPAD_LAYOUT};
pub use session::Session;
