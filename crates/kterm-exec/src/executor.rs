//! Line parsing and command dispatch.

use std::sync::Arc;

use kterm_types::{OutputSink, Palette, Result, SessionControl, TermError};

use crate::instruction::{Instruction, Syntax};
use crate::registry::CommandRegistry;

/// A one-shot executable command.
///
/// Commands are constructed by a registry factory from the parsed
/// argument text and discarded after `execute` returns. The executor is
/// passed in so compound commands (`async`, `batch`) can re-enter the
/// parser on sub-strings of their own instruction.
pub trait Command {
    fn execute(&self, exec: &Executor) -> Result<()>;
}

/// Out-of-band error callback for detached execution.
pub type ErrorHook = Arc<dyn Fn(&TermError) + Send + Sync>;

/// Split a raw input line into keyword and argument text.
///
/// The line is trimmed; empty input produces no parse result. The
/// keyword is the text before the first open bracket (trimmed), the
/// argument text is everything strictly between the first open and the
/// last close bracket, kept verbatim. A bracket present without its
/// counterpart, a close preceding the open, or unbalanced brackets
/// inside the argument text are syntax errors, never partial results.
pub fn parse_line<'a>(line: &'a str, syntax: &Syntax) -> Result<Option<(&'a str, Instruction)>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let open = trimmed.find(syntax.open);
    let close = trimmed.rfind(syntax.close);

    let (keyword, instruction) = match (open, close) {
        (None, None) => (trimmed, Instruction::empty()),
        (Some(o), Some(c)) => {
            // c == o only under a syntax whose open and close characters
            // coincide; a lone occurrence cannot delimit argument text.
            if c <= o {
                return Err(TermError::Syntax(format!(
                    "'{}' precedes '{}' in {trimmed:?}",
                    syntax.close, syntax.open
                )));
            }
            let inner = &trimmed[o + syntax.open.len_utf8()..c];
            (trimmed[..o].trim(), Instruction::new(inner))
        },
        _ => {
            return Err(TermError::Syntax(format!(
                "unmatched '{}' or '{}' in {trimmed:?}",
                syntax.open, syntax.close
            )));
        },
    };

    // The argument text must itself be bracket-balanced; this rejects
    // lines like `write(a))` whose stray close would otherwise hide
    // inside the argument.
    instruction.split(syntax)?;

    Ok(Some((keyword, instruction)))
}

/// Parse and dispatch entry point.
///
/// Holds the injected collaborators every command may touch: the shared
/// registry, the output sink, the session control, the active syntax,
/// and the output palette. Cloning is cheap; `async` clones the executor
/// into its detached thread.
#[derive(Clone)]
pub struct Executor {
    registry: Arc<CommandRegistry>,
    sink: Arc<dyn OutputSink>,
    session: Arc<dyn SessionControl>,
    syntax: Syntax,
    palette: Palette,
    on_error: Option<ErrorHook>,
}

impl Executor {
    pub fn new(
        registry: Arc<CommandRegistry>,
        sink: Arc<dyn OutputSink>,
        session: Arc<dyn SessionControl>,
    ) -> Self {
        Self {
            registry,
            sink,
            session,
            syntax: Syntax::default(),
            palette: Palette::default(),
            on_error: None,
        }
    }

    /// Use non-default bracket/splitter characters.
    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Use a non-default output palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the default error feedback (sink write in the error color)
    /// with a custom hook.
    pub fn with_error_hook(mut self, hook: ErrorHook) -> Self {
        self.on_error = Some(hook);
        self
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn sink(&self) -> &dyn OutputSink {
        self.sink.as_ref()
    }

    pub fn session(&self) -> &dyn SessionControl {
        self.session.as_ref()
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Parse a line and construct its command.
    ///
    /// Blank input and unknown keywords produce `Ok(None)`: a registry
    /// may deliberately cover only part of the command set, so unknown
    /// keywords are ignored rather than failed. Malformed brackets are
    /// hard errors.
    pub fn create(&self, line: &str) -> Result<Option<Box<dyn Command>>> {
        let parsed = parse_line(line, &self.syntax)?;
        let Some((keyword, instruction)) = parsed else {
            return Ok(None);
        };
        match self.registry.create(keyword, instruction) {
            Some(command) => Ok(Some(command)),
            None => {
                log::debug!("ignoring unknown command: {keyword}");
                Ok(None)
            },
        }
    }

    /// Parse a line and execute its command, if any.
    pub fn dispatch(&self, line: &str) -> Result<()> {
        match self.create(line)? {
            Some(command) => command.execute(self),
            None => Ok(()),
        }
    }

    /// Deliver an error that has no caller to return to.
    ///
    /// Detached `async` execution and the session loop both land here:
    /// the error goes to the custom hook when one is installed, otherwise
    /// it is written through the sink in the palette's error color.
    pub fn report(&self, err: &TermError) {
        log::error!("command failed: {err}");
        if let Some(hook) = &self.on_error {
            hook(err);
            return;
        }
        let feedback = self.sink.write(
            &err.to_string(),
            self.palette.error_fore,
            self.palette.error_back,
            true,
        );
        if feedback.is_err() {
            log::warn!("error feedback dropped: output sink unavailable");
        }
    }
}
