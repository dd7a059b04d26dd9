//! Input bindings - the two triggers that start a send flow

/// Both bindings invoke the identical send flow with no parameters; the
/// variant only shows up in logs. No debouncing: every trigger starts its
/// own flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Activation of the send control
    SendButton,
    /// Enter keypress while the input has focus
    EnterKey,
}

impl Trigger {
    pub fn as_str(&self) -> &str {
        match self {
            Trigger::SendButton => "send-button",
            Trigger::EnterKey => "enter-key",
        }
    }
}
