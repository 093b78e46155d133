//! Raw argument text and the bracket-aware top-level splitter.

use serde::Deserialize;

use kterm_types::{Result, TermError};

/// Bracket and splitter characters recognized by the parser.
///
/// The defaults give the `keyword(a,b,c)` grammar; a host may swap in
/// different characters through its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Syntax {
    pub open: char,
    pub close: char,
    pub splitter: char,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            open: '(',
            close: ')',
            splitter: ',',
        }
    }
}

/// Immutable raw argument text attached to a command invocation.
///
/// Created once per parse and consumed by exactly one command. The text
/// is kept verbatim; nested brackets stay intact inside an argument so
/// `async` and `batch` can re-parse them as full command lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    raw: String,
}

impl Instruction {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// An instruction with no argument text.
    pub fn empty() -> Self {
        Self { raw: String::new() }
    }

    /// The unparsed argument text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Split the text into top-level arguments.
    ///
    /// Splitter characters only separate arguments at bracket-nesting
    /// depth zero; everything inside a balanced bracket pair is kept
    /// verbatim. Empty text yields no arguments, not a single empty one.
    /// A close bracket below depth zero or an open bracket left unclosed
    /// at the end of the text is a syntax error.
    pub fn split(&self, syntax: &Syntax) -> Result<Vec<&str>> {
        let mut args = Vec::new();
        if self.raw.is_empty() {
            return Ok(args);
        }

        let mut depth = 0usize;
        let mut start = 0usize;

        for (i, c) in self.raw.char_indices() {
            if c == syntax.open {
                depth += 1;
            } else if c == syntax.close {
                if depth == 0 {
                    return Err(TermError::Syntax(format!(
                        "unbalanced '{}' in {:?}",
                        syntax.close, self.raw
                    )));
                }
                depth -= 1;
            } else if c == syntax.splitter && depth == 0 {
                args.push(&self.raw[start..i]);
                start = i + c.len_utf8();
            }
        }

        if depth > 0 {
            return Err(TermError::Syntax(format!(
                "unclosed '{}' in {:?}",
                syntax.open, self.raw
            )));
        }

        args.push(&self.raw[start..]);
        Ok(args)
    }
}
