//! Keyword-to-factory mapping with dispatch.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use kterm_types::{Result, TermError};

use crate::executor::Command;
use crate::instruction::Instruction;

type Factory = Arc<dyn Fn(Instruction) -> Box<dyn Command> + Send + Sync>;

/// Registry of command factories, keyed by keyword.
///
/// The registry is the extension point for host-defined commands: a
/// factory turns the parsed argument text into a one-shot [`Command`].
/// All operations serialize on an internal mutex, so a registry shared
/// behind an `Arc` may be mutated and queried from concurrent threads.
/// Factories run after the lock is released and may themselves use the
/// registry.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Mutex<HashMap<String, Factory>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, HashMap<String, Factory>> {
        // Factories never run under the lock, so a poisoning panic cannot
        // leave the map half-updated; recover it.
        self.commands.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a factory for `name`.
    ///
    /// Fails if `name` is already registered; the existing factory is
    /// left intact.
    pub fn register<F>(&self, name: &str, factory: F) -> Result<()>
    where
        F: Fn(Instruction) -> Box<dyn Command> + Send + Sync + 'static,
    {
        let mut commands = self.table();
        if commands.contains_key(name) {
            return Err(TermError::Registry(format!(
                "{name} is already registered"
            )));
        }
        commands.insert(name.to_string(), Arc::new(factory));
        Ok(())
    }

    /// Remove the factory for `name`. Fails if `name` is not registered.
    pub fn unregister(&self, name: &str) -> Result<()> {
        if self.table().remove(name).is_none() {
            return Err(TermError::Registry(format!("{name} is not registered")));
        }
        Ok(())
    }

    /// Move the factory registered under `from` to the keyword `to`.
    ///
    /// Fails if `from` is not registered or `to` already is.
    pub fn rename(&self, from: &str, to: &str) -> Result<()> {
        let mut commands = self.table();
        if commands.contains_key(to) {
            return Err(TermError::Registry(format!("{to} is already registered")));
        }
        match commands.remove(from) {
            Some(factory) => {
                commands.insert(to.to_string(), factory);
                Ok(())
            },
            None => Err(TermError::Registry(format!("{from} is not registered"))),
        }
    }

    /// Construct the command registered under `name`.
    ///
    /// Returns `None` when `name` is not registered; unknown keywords are
    /// the caller's policy decision, not an error here.
    pub fn create(&self, name: &str, instruction: Instruction) -> Option<Box<dyn Command>> {
        let factory = self.table().get(name).map(Arc::clone)?;
        Some(factory(instruction))
    }

    /// Whether `name` is currently registered.
    pub fn contains(&self, name: &str) -> bool {
        self.table().contains_key(name)
    }

    /// Sorted list of registered keywords.
    pub fn keywords(&self) -> Vec<String> {
        let mut names: Vec<String> = self.table().keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::executor::Executor;

    struct NoopCmd;
    impl Command for NoopCmd {
        fn execute(&self, _exec: &Executor) -> Result<()> {
            Ok(())
        }
    }

    /// Factory that counts how many commands it has constructed.
    fn counting_factory(
        counter: &Arc<AtomicUsize>,
    ) -> impl Fn(Instruction) -> Box<dyn Command> + Send + Sync + 'static {
        let counter = Arc::clone(counter);
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Box::new(NoopCmd) as Box<dyn Command>
        }
    }

    #[test]
    fn register_then_create_invokes_factory() {
        let reg = CommandRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));
        reg.register("x", counting_factory(&hits)).unwrap();

        assert!(reg.create("x", Instruction::empty()).is_some());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn create_unregistered_returns_none() {
        let reg = CommandRegistry::new();
        assert!(reg.create("missing", Instruction::empty()).is_none());
    }

    #[test]
    fn duplicate_registration_fails_and_keeps_original() {
        let reg = CommandRegistry::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        reg.register("x", counting_factory(&first)).unwrap();
        assert!(reg.register("x", counting_factory(&second)).is_err());

        reg.create("x", Instruction::empty());
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unregister_then_create_returns_none() {
        let reg = CommandRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));
        reg.register("x", counting_factory(&hits)).unwrap();
        reg.unregister("x").unwrap();

        assert!(reg.create("x", Instruction::empty()).is_none());
    }

    #[test]
    fn unregister_absent_fails() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.unregister("ghost"),
            Err(TermError::Registry(_))
        ));
    }

    #[test]
    fn rename_moves_factory() {
        let reg = CommandRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));
        reg.register("old", counting_factory(&hits)).unwrap();
        reg.rename("old", "new").unwrap();

        assert!(reg.create("old", Instruction::empty()).is_none());
        assert!(reg.create("new", Instruction::empty()).is_some());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rename_absent_fails() {
        let reg = CommandRegistry::new();
        assert!(matches!(
            reg.rename("ghost", "new"),
            Err(TermError::Registry(_))
        ));
    }

    #[test]
    fn rename_onto_existing_fails() {
        let reg = CommandRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));
        reg.register("a", counting_factory(&hits)).unwrap();
        reg.register("b", counting_factory(&hits)).unwrap();

        assert!(reg.rename("a", "b").is_err());
        assert!(reg.contains("a"));
        assert!(reg.contains("b"));
    }

    #[test]
    fn keywords_are_sorted() {
        let reg = CommandRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));
        reg.register("zeta", counting_factory(&hits)).unwrap();
        reg.register("alpha", counting_factory(&hits)).unwrap();
        reg.register("mid", counting_factory(&hits)).unwrap();

        assert_eq!(reg.keywords(), ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn concurrent_registration_is_serialized() {
        let reg = Arc::new(CommandRegistry::new());
        let hits = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let reg = Arc::clone(&reg);
                let hits = Arc::clone(&hits);
                std::thread::spawn(move || {
                    reg.register(&format!("cmd{n}"), counting_factory(&hits))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(reg.keywords().len(), 8);
    }
}
