//! Single-slot debounce timer
//!
//! Holds at most one pending timer. Scheduling again aborts the previous
//! timer, so only the last call within the delay window fires. The fired
//! message carries the generation it was scheduled for; the update loop also
//! checks that generation, so a timer that races its own abort is harmless.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `message` after `delay`, replacing any pending timer
    pub fn schedule(&mut self, delay: Duration, message: Message, tx: mpsc::Sender<Message>) {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(message).await;
        }));
    }

    /// Drop the pending timer, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
