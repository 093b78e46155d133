//! Reference console frontend for kterm.
//!
//! Realizes the interpreter's collaborator capabilities over plain
//! stdio: an ANSI-colored output sink, a TOML configuration layer, and
//! the blocking line-reading session loop. No native console window is
//! created or styled; any `Write + Send` target will do.

pub mod config;
pub mod session;
pub mod sink;

pub use config::ConsoleConfig;
pub use session::Session;
pub use sink::AnsiSink;
