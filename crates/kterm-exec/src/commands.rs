//! Built-in commands for the kterm interpreter.

use std::thread;
use std::time::Duration;

use kterm_types::{Result, TermError};

use crate::executor::{Command, Executor};
use crate::instruction::Instruction;
use crate::registry::CommandRegistry;

/// Register the built-in commands into a registry.
pub fn register_builtins(reg: &CommandRegistry) -> Result<()> {
    reg.register("write", |i| {
        Box::new(WriteCmd::new(i, false)) as Box<dyn Command>
    })?;
    reg.register("writel", |i| {
        Box::new(WriteCmd::new(i, true)) as Box<dyn Command>
    })?;
    reg.register("async", |i| Box::new(AsyncCmd::new(i)) as Box<dyn Command>)?;
    reg.register("batch", |i| Box::new(BatchCmd::new(i)) as Box<dyn Command>)?;
    reg.register("wait", |i| Box::new(WaitCmd::new(i)) as Box<dyn Command>)?;
    reg.register("exit", |_| Box::new(ExitCmd) as Box<dyn Command>)?;
    reg.register("help", |_| Box::new(HelpCmd) as Box<dyn Command>)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// write / writel
// ---------------------------------------------------------------------------

/// Write the raw argument text to the output sink.
pub struct WriteCmd {
    text: Instruction,
    newline: bool,
}

impl WriteCmd {
    pub fn new(text: Instruction, newline: bool) -> Self {
        Self { text, newline }
    }
}

impl Command for WriteCmd {
    fn execute(&self, exec: &Executor) -> Result<()> {
        let palette = exec.palette();
        let written = exec.sink().write(
            self.text.raw(),
            palette.text_fore,
            palette.text_back,
            self.newline,
        );
        // A lost sink is not the command's failure.
        if let Err(e) = written {
            log::warn!("write: output sink unavailable: {e}");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// async
// ---------------------------------------------------------------------------

/// Execute the argument text as a fresh command line on a detached thread.
///
/// Returns as soon as the thread is spawned. Errors raised inside the
/// thread have no caller to return to and go through
/// [`Executor::report`] instead.
pub struct AsyncCmd {
    line: Instruction,
}

impl AsyncCmd {
    pub fn new(line: Instruction) -> Self {
        Self { line }
    }
}

impl Command for AsyncCmd {
    fn execute(&self, exec: &Executor) -> Result<()> {
        let exec = exec.clone();
        let line = self.line.raw().to_string();
        thread::Builder::new()
            .name("kterm-async".to_string())
            .spawn(move || {
                if let Err(e) = exec.dispatch(&line) {
                    exec.report(&e);
                }
            })?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// batch
// ---------------------------------------------------------------------------

/// Execute each top-level argument as a command line, sequentially on
/// the calling thread. The first failure aborts the remainder.
pub struct BatchCmd {
    list: Instruction,
}

impl BatchCmd {
    pub fn new(list: Instruction) -> Self {
        Self { list }
    }
}

impl Command for BatchCmd {
    fn execute(&self, exec: &Executor) -> Result<()> {
        for part in self.list.split(exec.syntax())? {
            exec.dispatch(part)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// wait
// ---------------------------------------------------------------------------

/// Block the calling thread for the given number of milliseconds.
pub struct WaitCmd {
    millis: Instruction,
}

impl WaitCmd {
    pub fn new(millis: Instruction) -> Self {
        Self { millis }
    }
}

impl Command for WaitCmd {
    fn execute(&self, _exec: &Executor) -> Result<()> {
        let raw = self.millis.raw().trim();
        let ms: u64 = raw.parse().map_err(|_| {
            TermError::Syntax(format!("wait: expected milliseconds, got {raw:?}"))
        })?;
        thread::sleep(Duration::from_millis(ms));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

/// Signal session termination.
pub struct ExitCmd;

impl Command for ExitCmd {
    fn execute(&self, exec: &Executor) -> Result<()> {
        exec.session().terminate();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

/// Write the sorted list of registered keywords.
pub struct HelpCmd;

impl Command for HelpCmd {
    fn execute(&self, exec: &Executor) -> Result<()> {
        let keywords = exec.registry().keywords().join(", ");
        let palette = exec.palette();
        exec.sink()
            .write(&keywords, palette.text_fore, palette.text_back, true)
    }
}
