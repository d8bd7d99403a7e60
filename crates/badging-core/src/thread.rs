//! UI thread affinity
//!
//! The badge service, its endpoints and every forwarding call are confined to
//! the thread that owns the host's UI state. Entering from any other thread
//! is a marshalling bug in the embedder and aborts via panic.

use std::thread::{self, ThreadId};

/// Records which thread owns badge state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiThread {
    owner: ThreadId,
}

impl UiThread {
    /// Bind to the calling thread.
    pub fn current() -> Self {
        Self {
            owner: thread::current().id(),
        }
    }

    /// Whether the caller is on the owning thread.
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.owner
    }

    /// Panic unless the caller is on the owning thread.
    #[track_caller]
    pub fn assert_current(&self) {
        let current = thread::current().id();
        assert!(
            current == self.owner,
            "badge service entered off the UI thread (owner {:?}, caller {:?})",
            self.owner,
            current
        );
    }
}
