//! kterm console entry point.
//!
//! Reads command lines from stdin and feeds them to the interpreter:
//! `write(hi)`, `batch(writel(a),wait(100),writel(b))`,
//! `async(batch(wait(500),writel(late)))`, `exit`.

use std::io;
use std::sync::Arc;

use anyhow::Result;

use kterm_console::{AnsiSink, ConsoleConfig, Session};
use kterm_exec::{CommandRegistry, Executor, register_builtins};
use kterm_types::{OutputSink, SessionControl, SessionFlag};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Config from CLI arg, KTERM_CONFIG env var, or built-in defaults.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("KTERM_CONFIG").ok());
    let config = match &config_path {
        Some(path) => ConsoleConfig::load(path)?,
        None => ConsoleConfig::default(),
    };

    let registry = Arc::new(CommandRegistry::new());
    register_builtins(&registry)?;

    let sink: Arc<dyn OutputSink> = Arc::new(AnsiSink::stdout().with_color(config.color));
    let session: Arc<dyn SessionControl> = Arc::new(SessionFlag::new());

    let executor = Executor::new(Arc::clone(&registry), sink, session)
        .with_syntax(config.syntax)
        .with_palette(config.palette);

    log::info!(
        "console ready ({} commands registered)",
        registry.keywords().len()
    );

    let stdin = io::stdin();
    Session::new(executor)
        .with_prompt(config.prompt)
        .run(stdin.lock())?;

    log::info!("session closed");
    Ok(())
}
