use tokio::sync::broadcast;

use crate::page::controller::PageSnapshot;

/// Broadcasts page snapshots to every subscribed renderer.
///
/// Wraps a `tokio::sync::broadcast::Sender`; a subscriber that falls behind
/// by more than the capacity skips the oldest snapshots instead of stalling
/// the page.
#[derive(Clone)]
pub struct RenderBroadcaster {
    sender: broadcast::Sender<PageSnapshot>,
}

impl RenderBroadcaster {
    /// Creates a broadcaster buffering up to `capacity` snapshots.
    ///
    /// A capacity of 0 is clamped to 1, since `broadcast::channel(0)` panics.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        RenderBroadcaster { sender }
    }

    /// Sends a snapshot to all current subscribers. Having none is not an error.
    pub fn send(&self, snapshot: PageSnapshot) {
        let _ = self.sender.send(snapshot);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PageSnapshot> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
