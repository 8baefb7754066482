//! Dispatcher lets operations and middleware queue actions for the store

use crate::actions::Action;
use tokio::sync::mpsc;

/// Cloneable handle that queues actions for the store
///
/// Queued actions are applied when the owner of the receiving end drains
/// them with [`Store::process_pending`](crate::Store::process_pending).
#[derive(Clone, Debug)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { tx }
    }

    /// Create a dispatcher together with the receiver it feeds
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Queue an action
    ///
    /// A closed receiver is logged, not treated as fatal: the store may have
    /// shut down while a request was still in flight.
    pub fn dispatch(&self, action: impl Into<Action>) {
        if let Err(e) = self.tx.send(action.into()) {
            log::error!("Failed to dispatch action: {}", e);
        }
    }
}
