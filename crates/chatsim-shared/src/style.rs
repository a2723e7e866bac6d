//! ANSI styling that can be switched off as a whole.
//!
//! Styling is presentation only: it is applied when text is printed (or when
//! a legacy styled log line is requested) and never becomes part of a stored
//! value.

use crate::constants::{BLUE, CYAN, GREEN, MAGENTA, RED, RESET, YELLOW};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    pub fn code(self) -> &'static str {
        match self {
            Self::Red => RED,
            Self::Green => GREEN,
            Self::Yellow => YELLOW,
            Self::Blue => BLUE,
            Self::Magenta => MAGENTA,
            Self::Cyan => CYAN,
        }
    }
}

/// Wrap `text` in `color` followed by a reset.
pub fn paint(color: Color, text: &str) -> String {
    format!("{}{text}{RESET}", color.code())
}

/// A painter that is either active or a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            paint(color, text)
        } else {
            text.to_string()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}
