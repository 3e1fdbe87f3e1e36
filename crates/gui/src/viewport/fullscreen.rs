//! Fullscreen capability.
//!
//! The canvas never caches whether it is fullscreen: every toggle and every
//! label asks the host. On runtimes that apply the change asynchronously the
//! label may show the previous state until the next read.

use crate::error::{EditorError, EditorResult};

/// Runtime that can put the canvas root element into fullscreen
pub trait FullscreenHost {
    /// Live fullscreen status as reported by the runtime
    fn is_fullscreen(&self) -> bool;

    fn request_fullscreen(&mut self) -> EditorResult<()>;

    fn exit_fullscreen(&mut self) -> EditorResult<()>;
}

/// In-memory host for tests and headless use.
///
/// `deferred` mimics runtimes that apply requests only after the current
/// event has been handled: the status changes on the next `settle()`.
#[derive(Debug, Default)]
pub struct HeadlessFullscreen {
    active: bool,
    pending: Option<bool>,
    pub deferred: bool,
    pub refuse_requests: bool,
}

impl HeadlessFullscreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a deferred request, as the runtime would between events
    pub fn settle(&mut self) {
        if let Some(state) = self.pending.take() {
            self.active = state;
        }
    }

    fn apply(&mut self, state: bool) {
        if self.deferred {
            self.pending = Some(state);
        } else {
            self.active = state;
        }
    }
}

impl FullscreenHost for HeadlessFullscreen {
    fn is_fullscreen(&self) -> bool {
        self.active
    }

    fn request_fullscreen(&mut self) -> EditorResult<()> {
        if self.refuse_requests {
            return Err(EditorError::Fullscreen(
                "request denied by runtime".to_string(),
            ));
        }
        self.apply(true);
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> EditorResult<()> {
        self.apply(false);
        Ok(())
    }
}
