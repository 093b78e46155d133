//! The read/dispatch session loop.

use std::io::BufRead;

use kterm_exec::Executor;
use kterm_types::Result;

/// Line-reading session loop around an [`Executor`].
///
/// Reads one line at a time, dispatches it synchronously, and reports
/// dispatch errors through the executor; no error ends the session. The
/// loop stops at end of input or once the session control has been
/// terminated (the `exit` command, or the host directly).
pub struct Session {
    executor: Executor,
    prompt: String,
}

impl Session {
    pub fn new(executor: Executor) -> Self {
        Self {
            executor,
            prompt: String::new(),
        }
    }

    /// Write `prompt` before each input line.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Run the loop until end of input or termination.
    pub fn run(&self, mut input: impl BufRead) -> Result<()> {
        let mut line = String::new();
        loop {
            if self.executor.session().is_terminated() {
                break;
            }

            if !self.prompt.is_empty() {
                let palette = self.executor.palette();
                let shown = self.executor.sink().write(
                    &self.prompt,
                    palette.prompt_fore,
                    palette.prompt_back,
                    false,
                );
                if let Err(e) = shown {
                    log::warn!("prompt dropped: {e}");
                }
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            if let Err(e) = self.executor.dispatch(&line) {
                self.executor.report(&e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    use kterm_exec::{CommandRegistry, register_builtins};
    use kterm_types::{Color, OutputSink, SessionControl, SessionFlag};

    #[derive(Default)]
    struct RecordingSink {
        writes: Mutex<Vec<(String, Color)>>,
    }

    impl RecordingSink {
        fn texts(&self) -> Vec<String> {
            self.writes
                .lock()
                .unwrap()
                .iter()
                .map(|(text, _)| text.clone())
                .collect()
        }

        fn colors(&self) -> Vec<Color> {
            self.writes
                .lock()
                .unwrap()
                .iter()
                .map(|(_, fore)| *fore)
                .collect()
        }
    }

    impl OutputSink for RecordingSink {
        fn write(&self, text: &str, fore: Color, _back: Color, _newline: bool) -> Result<()> {
            self.writes.lock().unwrap().push((text.to_string(), fore));
            Ok(())
        }
    }

    fn make_session() -> (Session, Arc<RecordingSink>, Arc<SessionFlag>) {
        let registry = Arc::new(CommandRegistry::new());
        register_builtins(&registry).unwrap();
        let sink = Arc::new(RecordingSink::default());
        let session = Arc::new(SessionFlag::new());
        let executor = Executor::new(
            registry,
            Arc::clone(&sink) as Arc<dyn OutputSink>,
            Arc::clone(&session) as Arc<dyn SessionControl>,
        );
        (Session::new(executor), sink, session)
    }

    #[test]
    fn dispatches_lines_until_eof() {
        let (session, sink, _) = make_session();
        session
            .run(Cursor::new("write(a)\nwrite(b)\n"))
            .unwrap();
        assert_eq!(sink.texts(), ["a", "b"]);
    }

    #[test]
    fn exit_stops_further_dispatch() {
        let (session, sink, flag) = make_session();
        session
            .run(Cursor::new("write(before)\nexit\nwrite(after)\n"))
            .unwrap();
        assert_eq!(sink.texts(), ["before"]);
        assert!(flag.is_terminated());
    }

    #[test]
    fn errors_are_reported_and_the_loop_continues() {
        let (session, sink, _) = make_session();
        session
            .run(Cursor::new("write(broken\nwritel(ok)\n"))
            .unwrap();
        let texts = sink.texts();
        assert_eq!(texts.len(), 2);
        assert!(texts[0].contains("syntax error"));
        assert_eq!(sink.colors()[0], Color::Red);
        assert_eq!(texts[1], "ok");
    }

    #[test]
    fn prompt_precedes_each_line() {
        let (session, sink, _) = make_session();
        let session = session.with_prompt("> ");
        session.run(Cursor::new("write(x)\n")).unwrap();
        // Prompt, output, prompt again before EOF is noticed.
        assert_eq!(sink.texts(), ["> ", "x", "> "]);
        assert_eq!(sink.colors()[0], Color::Yellow);
    }
}
