//! Error types for kterm.

use std::io;

/// Errors produced by the kterm interpreter and its frontends.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("registry error: {0}")]
    Registry(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermError>;
