//! Timer-based call coalescing.
//!
//! A [`Debouncer`] keeps one scheduled-call slot. Each [`Debouncer::call`]
//! cancels whatever is scheduled and reschedules, so a burst of calls
//! closer together than the window runs only the last one, once the burst
//! has been quiet for a full window.

use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

pub struct Debouncer {
    window: Duration,
    slot: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            slot: Mutex::new(None),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule `f` to run after the window, replacing any pending call.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let window = self.window;
        let mut slot = self.slot.lock();
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            f();
        }));
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        if let Some(previous) = self.slot.lock().take() {
            previous.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}
