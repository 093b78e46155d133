//! Console color palette.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::TermError;

/// The 16-entry color palette of a classic text console.
///
/// The `Dark*` variants are the low-intensity colors; the bare names are
/// their high-intensity counterparts. `Gray` is low-intensity white and
/// `DarkGray` high-intensity black, matching the usual console ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl Color {
    /// All palette entries, in console order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::DarkBlue,
        Color::DarkGreen,
        Color::DarkCyan,
        Color::DarkRed,
        Color::DarkMagenta,
        Color::DarkYellow,
        Color::Gray,
        Color::DarkGray,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Yellow,
        Color::White,
    ];

    /// Lowercase name of this color, as accepted by [`Color::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::DarkBlue => "darkblue",
            Color::DarkGreen => "darkgreen",
            Color::DarkCyan => "darkcyan",
            Color::DarkRed => "darkred",
            Color::DarkMagenta => "darkmagenta",
            Color::DarkYellow => "darkyellow",
            Color::Gray => "gray",
            Color::DarkGray => "darkgray",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Red => "red",
            Color::Magenta => "magenta",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }
}

impl FromStr for Color {
    type Err = TermError;

    /// Parse a color name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Color::ALL
            .iter()
            .copied()
            .find(|c| c.name() == lower)
            .ok_or_else(|| TermError::Config(format!("unknown color: {s}")))
    }
}

/// Foreground/background color pairs for the interpreter's output roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Regular command output.
    pub text_fore: Color,
    pub text_back: Color,
    /// Error feedback written back to the console.
    pub error_fore: Color,
    pub error_back: Color,
    /// The input prompt.
    pub prompt_fore: Color,
    pub prompt_back: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text_fore: Color::Gray,
            text_back: Color::Black,
            error_fore: Color::Red,
            error_back: Color::Black,
            prompt_fore: Color::Yellow,
            prompt_back: Color::Black,
        }
    }
}
