//! Shutdown coordination.

use tokio::sync::broadcast;

/// Broadcast-based shutdown signal.
///
/// The poll loop subscribes before startup completes; the signal listener
/// (or an embedding system, such as the integration tests) triggers it. The
/// loop finishes its current pass and exits at the sleep boundary.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Signal shutdown to every subscriber.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
