//! Bounded stepper input.

use super::{InputEdit, InputMode, TtlInput, PAGE_STEP};
use crate::types::Ttl;

/// Slider constrained to `[Ttl::MIN, Ttl::MAX]`.
///
/// Starts unset; the first upward move lands on the minimum and the first
/// downward move on the maximum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliderInput {
    value: Option<u8>,
}

impl SliderInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<u8> {
        self.value
    }

    fn step_up(&self, step: u8) -> u8 {
        self.value
            .map_or(Ttl::MIN, |v| v.saturating_add(step))
            .clamp(Ttl::MIN, Ttl::MAX)
    }

    fn step_down(&self, step: u8) -> u8 {
        self.value
            .map_or(Ttl::MAX, |v| v.saturating_sub(step))
            .clamp(Ttl::MIN, Ttl::MAX)
    }
}

impl TtlInput for SliderInput {
    fn apply(&mut self, edit: InputEdit) -> bool {
        let next = match edit {
            InputEdit::Increment => self.step_up(1),
            InputEdit::Decrement => self.step_down(1),
            InputEdit::PageUp => self.step_up(PAGE_STEP),
            InputEdit::PageDown => self.step_down(PAGE_STEP),
            InputEdit::First => Ttl::MIN,
            InputEdit::Last => Ttl::MAX,
            InputEdit::Text(_) | InputEdit::Backspace => return false,
        };
        let changed = self.value != Some(next);
        self.value = Some(next);
        changed
    }

    fn candidate(&self) -> Option<i64> {
        self.value.map(i64::from)
    }

    fn reset(&mut self) {
        self.value = None;
    }

    fn is_unset(&self) -> bool {
        self.value.is_none()
    }

    fn display(&self) -> String {
        self.value.map_or_else(|| "-".to_string(), |v| format!("{v} TTL"))
    }

    fn mode(&self) -> InputMode {
        InputMode::Slider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_from_unset() {
        let mut up = SliderInput::new();
        assert!(up.apply(InputEdit::Increment));
        assert_eq!(up.value(), Some(1));

        let mut down = SliderInput::new();
        assert!(down.apply(InputEdit::Decrement));
        assert_eq!(down.value(), Some(255));
    }

    #[test]
    fn stays_within_bounds() {
        let mut slider = SliderInput::new();
        slider.apply(InputEdit::Last);
        assert!(!slider.apply(InputEdit::Increment));
        assert!(!slider.apply(InputEdit::PageUp));
        assert_eq!(slider.candidate(), Some(255));

        slider.apply(InputEdit::First);
        assert!(!slider.apply(InputEdit::Decrement));
        assert!(!slider.apply(InputEdit::PageDown));
        assert_eq!(slider.candidate(), Some(1));
    }

    #[test]
    fn page_steps_by_ten() {
        let mut slider = SliderInput::new();
        slider.apply(InputEdit::First);
        slider.apply(InputEdit::PageUp);
        assert_eq!(slider.value(), Some(11));
        slider.apply(InputEdit::PageDown);
        slider.apply(InputEdit::PageDown);
        assert_eq!(slider.value(), Some(1));
    }

    #[test]
    fn ignores_text_edits() {
        let mut slider = SliderInput::new();
        assert!(!slider.apply(InputEdit::Text("64".to_string())));
        assert!(!slider.apply(InputEdit::Backspace));
        assert!(slider.is_unset());
    }

    #[test]
    fn reset_returns_to_sentinel() {
        let mut slider = SliderInput::new();
        slider.apply(InputEdit::Last);
        slider.reset();
        assert!(slider.is_unset());
        assert_eq!(slider.display(), "-");
    }
}
