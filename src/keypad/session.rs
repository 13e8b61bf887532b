//! The calculator screen's state machine.
//!
//! All calculator state is the pair of display strings in [`Session`].
//! Transitions are pure: a press maps the prior session to the next
//! one, and the host re-renders [`Session::display`] afterwards.

use tracing::warn;

use crate::calculator::{evaluate, format_value};

use super::Button;

/// The state of one calculator screen: the input buffer being typed
/// and the last computed result. At most one of the two is active for
/// display at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// The expression typed so far.
    pub current_input: String,
    /// The formatted result of the last evaluation, or `Error`.
    pub result: String,
}

impl Session {
    /// A fresh session with both strings empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// The string the host should render: the result when one is
    /// present, otherwise the input buffer.
    pub fn display(&self) -> &str {
        if self.result.is_empty() {
            &self.current_input
        } else {
            &self.result
        }
    }

    /// Apply one button press and return the next session.
    ///
    /// Clear and Equals take priority; every other button appends its
    /// label to the input buffer with no validation (malformed buffers
    /// only surface as `Error` at evaluation). When a result is
    /// showing, the next appending press chains from it: the buffer
    /// restarts as the result plus the new label.
    pub fn press(&self, button: Button) -> Self {
        match button {
            Button::Clear => Self::new(),
            Button::Equals => {
                let result = match evaluate(&self.current_input) {
                    Ok(value) => format_value(value),
                    Err(_) => "Error".to_string(),
                };
                Self {
                    current_input: String::new(),
                    result,
                }
            }
            Button::Digit(c) => self.append(&c.to_string()),
            Button::Decimal => self.append("."),
            Button::Operator(op) => self.append(op.label()),
        }
    }

    /// Append a button label to the input buffer. When a result is
    /// showing, the buffer restarts from it.
    fn append(&self, label: &str) -> Self {
        let base = if self.result.is_empty() {
            &self.current_input
        } else {
            &self.result
        };
        Self {
            current_input: format!("{}{}", base, label),
            result: String::new(),
        }
    }

    /// Apply a raw UI label. Labels outside the keypad's set leave the
    /// session unchanged.
    pub fn press_label(&self, label: &str) -> Self {
        match Button::from_label(label) {
            Some(button) => self.press(button),
            None => {
                warn!(label, "ignoring unknown keypad label");
                self.clone()
            }
        }
    }
}
