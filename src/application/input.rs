//! Pending input field

/// The single text field the user types into. The send flow reads and clears
/// it in one synchronous step before any request is issued.
#[derive(Debug, Default)]
pub struct InputField {
    value: String,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.value = text.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Atomic read-then-clear: returns the trimmed pending text and empties
    /// the field. Whitespace-only content counts as empty and is left in
    /// place untouched.
    pub fn take_trimmed(&mut self) -> Option<String> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            return None;
        }
        let text = trimmed.to_string();
        self.value.clear();
        Some(text)
    }
}
