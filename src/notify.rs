use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
struct Slot {
    message: Option<String>,
    generation: u64,
}

/// Transient status message that clears itself after a fixed duration.
///
/// Each `show` cancels the pending dismissal of the previous message, so an
/// old timer never hides a newer message early.
pub struct Banner {
    slot: Arc<Mutex<Slot>>,
    duration: Duration,
    dismissal: Option<JoinHandle<()>>,
}

impl Banner {
    pub fn new(duration: Duration) -> Self {
        Banner {
            slot: Arc::default(),
            duration,
            dismissal: None,
        }
    }

    /// Display `message` and schedule its dismissal. Must be called from
    /// within a tokio runtime.
    pub fn show(&mut self, message: impl Into<String>) {
        if let Some(pending) = self.dismissal.take() {
            pending.abort();
        }

        let generation = {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            slot.generation += 1;
            slot.message = Some(message.into());
            slot.generation
        };
        trace!(generation, "banner shown");

        let slot = Arc::clone(&self.slot);
        let deadline = Instant::now() + self.duration;
        self.dismissal = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let mut slot = slot.lock().unwrap_or_else(PoisonError::into_inner);
            if slot.generation == generation {
                slot.message = None;
                trace!(generation, "banner dismissed");
            }
        }));
    }

    /// The visible message, if any
    pub fn current(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .message
            .clone()
    }

    /// Hide the message now and cancel its timer
    pub fn dismiss(&mut self) {
        if let Some(pending) = self.dismissal.take() {
            pending.abort();
        }
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .message = None;
    }
}

impl Default for Banner {
    fn default() -> Self {
        Banner::new(DEFAULT_BANNER_DURATION)
    }
}

impl Drop for Banner {
    fn drop(&mut self) {
        if let Some(pending) = self.dismissal.take() {
            pending.abort();
        }
    }
}
