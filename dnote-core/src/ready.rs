//! A one-shot "host is ready" signal.
//!
//! The host keeps the [`ReadyTrigger`] and fires it once its own start-up is done;
//! whoever holds the [`ReadySignal`] waits for that single event.

use std::sync::mpsc::{Receiver, SyncSender, sync_channel};

pub struct ReadyTrigger(SyncSender<()>);

pub struct ReadySignal(Receiver<()>);

/// A connected trigger/signal pair.
pub fn ready_signal() -> (ReadyTrigger, ReadySignal) {
    let (tx, rx) = sync_channel(1);
    (ReadyTrigger(tx), ReadySignal(rx))
}

impl ReadyTrigger {
    /// Fires the signal. Consumes the trigger, so it can only fire once.
    pub fn fire(self) {
        // The waiting side may already be gone; nothing to notify then.
        let _ = self.0.send(());
    }
}

impl ReadySignal {
    /// Blocks until the trigger fires. `false` when it was dropped without firing.
    pub fn wait(self) -> bool {
        self.0.recv().is_ok()
    }
}
