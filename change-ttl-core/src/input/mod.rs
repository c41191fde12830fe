//! Candidate value acquisition.
//!
//! The panel reads its pending value through [`TtlInput`]. Two
//! implementations exist and one is picked at configuration time:
//! - [`SliderInput`]: bounded stepper, always inside `[1, 255]` once touched
//! - [`TextInput`]: free text restricted to ASCII digits

mod slider;
mod text;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use slider::SliderInput;
pub use text::TextInput;

/// A single edit coming from the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    /// Typed or pasted text
    Text(String),
    /// Remove the last character
    Backspace,
    /// Step up by one
    Increment,
    /// Step down by one
    Decrement,
    /// Step up by [`PAGE_STEP`]
    PageUp,
    /// Step down by [`PAGE_STEP`]
    PageDown,
    /// Jump to the lower bound
    First,
    /// Jump to the upper bound
    Last,
}

/// Slider page step.
pub const PAGE_STEP: u8 = 10;

/// Input control abstraction.
pub trait TtlInput: Send + fmt::Debug {
    /// Apply an edit. Returns `false` when the edit was rejected or had no effect.
    fn apply(&mut self, edit: InputEdit) -> bool;

    /// Current candidate; `None` when the input does not read as a number.
    fn candidate(&self) -> Option<i64>;

    /// Reset to the empty/unset sentinel.
    fn reset(&mut self);

    /// Whether the input holds the empty/unset sentinel.
    fn is_unset(&self) -> bool;

    /// Text shown inside the control.
    fn display(&self) -> String;

    /// Which strategy this is.
    fn mode(&self) -> InputMode;
}

/// Input strategy selected by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Slider,
    Text,
}

impl InputMode {
    /// Create a fresh input control for this mode.
    pub fn build(self) -> Box<dyn TtlInput> {
        match self {
            Self::Slider => Box::new(SliderInput::new()),
            Self::Text => Box::new(TextInput::new()),
        }
    }

    /// Parse a mode name (`slider` / `text`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "slider" => Some(Self::Slider),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Slider => "slider",
            Self::Text => "text",
        }
    }
}
