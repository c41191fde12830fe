//! Digit-filtered free-text input.

use super::{InputEdit, InputMode, TtlInput};

/// Free-text field that only ever holds ASCII digits.
///
/// Range is not enforced while typing and leading zeros are kept as typed;
/// both are settled when the value is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl TtlInput for TextInput {
    fn apply(&mut self, edit: InputEdit) -> bool {
        match edit {
            InputEdit::Text(text) => {
                if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
                    return false;
                }
                self.buffer.push_str(&text);
                true
            }
            InputEdit::Backspace => self.buffer.pop().is_some(),
            InputEdit::Increment
            | InputEdit::Decrement
            | InputEdit::PageUp
            | InputEdit::PageDown
            | InputEdit::First
            | InputEdit::Last => false,
        }
    }

    fn candidate(&self) -> Option<i64> {
        self.buffer.parse().ok()
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }

    fn is_unset(&self) -> bool {
        self.buffer.is_empty()
    }

    fn display(&self) -> String {
        self.buffer.clone()
    }

    fn mode(&self) -> InputMode {
        InputMode::Text
    }
}
