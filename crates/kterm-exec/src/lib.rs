//! Command interpreter core for kterm.
//!
//! Input lines of the form `keyword(arg1,arg2,...)` are parsed with
//! bracket-aware scanning, resolved against a registry of command
//! factories, and executed against a synchronized output sink. Commands
//! implement the `Command` trait and are constructed per input line;
//! `async` and `batch` re-enter the parser on their own argument text.

pub mod commands;
pub mod executor;
pub mod instruction;
pub mod registry;

/// Register the built-in commands (write, async, batch, wait, exit, help).
pub use commands::register_builtins;
/// A one-shot executable command.
pub use executor::Command;
/// Parse and dispatch entry point, holding the injected collaborators.
pub use executor::Executor;
/// Out-of-band error callback for detached execution.
pub use executor::ErrorHook;
/// Split a raw line into keyword and argument text.
pub use executor::parse_line;
/// Immutable raw argument text with the nested splitter.
pub use instruction::Instruction;
/// Bracket and splitter characters used by the parser.
pub use instruction::Syntax;
/// Keyword-to-factory mapping with dispatch.
pub use registry::CommandRegistry;
