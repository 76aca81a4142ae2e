//! Host capabilities the quote screen needs from its environment.
//!
//! Every long-lived registration (timer, listener, scroll lock) hands back a
//! [`TaskHandle`]. Cancelling a handle undoes exactly that registration, which
//! keeps teardown testable without a real event loop.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::time::Duration;

use crate::error::PreloadError;
use crate::state::Viewport;

/// Undo action for one registration.
///
/// Only [`TaskHandle::cancel`] is guaranteed to undo the registration. What a
/// plain drop does is up to the host.
#[must_use = "call TaskHandle::cancel to undo the registration"]
pub struct TaskHandle {
    undo: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(undo: impl FnOnce() + 'static) -> Self {
        Self { undo: Some(Box::new(undo)) }
    }

    /// A handle with nothing to undo.
    pub fn noop() -> Self {
        Self { undo: None }
    }

    pub fn cancel(mut self) {
        if let Some(undo) = self.undo.take() {
            undo();
        }
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle").field("armed", &self.undo.is_some()).finish()
    }
}

/// Single-threaded event-loop services.
pub trait Host {
    /// Run `callback` once after `delay`.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TaskHandle;

    /// Current inner window size.
    fn viewport(&self) -> Viewport;

    /// Call `callback` with the new size on every window resize.
    fn on_resize(&self, callback: Box<dyn Fn(Viewport)>) -> TaskHandle;

    /// Hide body overflow. The handle restores the previous value.
    fn lock_scroll(&self) -> TaskHandle;

    /// Load every path; call `done` once all have either loaded or failed.
    ///
    /// Loads cannot be cancelled once started.
    fn preload_images(&self, paths: Vec<String>, done: Box<dyn FnOnce(Vec<PreloadError>)>);
}
