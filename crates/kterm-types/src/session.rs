//! Session lifecycle capability.

use std::sync::atomic::{AtomicBool, Ordering};

/// Session lifecycle capability consumed by commands.
///
/// The `exit` command signals termination through this trait; the session
/// loop polls it between dispatches. Termination is a one-way latch.
pub trait SessionControl: Send + Sync {
    /// Signal that the session should terminate.
    fn terminate(&self);

    /// Whether termination has been signaled.
    fn is_terminated(&self) -> bool;
}

/// Atomic-flag implementation of [`SessionControl`].
#[derive(Debug, Default)]
pub struct SessionFlag(AtomicBool);

impl SessionFlag {
    /// Create a flag in the running (not terminated) state.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionControl for SessionFlag {
    fn terminate(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    fn is_terminated(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_starts_running() {
        let flag = SessionFlag::new();
        assert!(!flag.is_terminated());
    }

    #[test]
    fn terminate_latches() {
        let flag = SessionFlag::new();
        flag.terminate();
        assert!(flag.is_terminated());
        flag.terminate();
        assert!(flag.is_terminated());
    }

    #[test]
    fn flag_is_visible_across_threads() {
        use std::sync::Arc;

        let flag = Arc::new(SessionFlag::new());
        let remote = Arc::clone(&flag);
        std::thread::spawn(move || remote.terminate())
            .join()
            .unwrap();
        assert!(flag.is_terminated());
    }
}
