//! Console configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use kterm_exec::Syntax;
use kterm_types::{Palette, Result};

/// Configuration for the console frontend.
///
/// Every field has a usable default, so a missing config file means
/// default behavior rather than an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Prompt written before each input line ("" disables it).
    pub prompt: String,
    /// Emit ANSI color sequences.
    pub color: bool,
    /// Bracket and splitter characters.
    pub syntax: Syntax,
    /// Output colors for text, errors, and the prompt.
    pub palette: Palette,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            color: true,
            syntax: Syntax::default(),
            palette: Palette::default(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}
