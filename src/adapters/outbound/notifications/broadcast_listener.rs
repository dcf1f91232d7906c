use crate::dependencies::domain::ScopeId;
use crate::ports::outbound::SnapshotListener;
use tokio::sync::broadcast;

/// Notification sent when a scope publishes a new snapshot version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotChanged {
    pub scope: ScopeId,
    pub version: u64,
}

/// Fans publish notifications out to any number of async subscribers.
///
/// Subscribers that fall more than `capacity` notifications behind observe
/// `RecvError::Lagged` and should re-read the snapshot through the engine.
#[derive(Debug, Clone)]
pub struct BroadcastSnapshotListener {
    sender: broadcast::Sender<SnapshotChanged>,
}

impl BroadcastSnapshotListener {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SnapshotChanged> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastSnapshotListener {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl SnapshotListener for BroadcastSnapshotListener {
    fn snapshot_published(&self, scope: &ScopeId, version: u64) {
        let change = SnapshotChanged {
            scope: scope.clone(),
            version,
        };
        // No subscribers is not an error.
        if self.sender.send(change).is_err() {
            tracing::trace!(target: "depsnap::publish", %scope, version, "No subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_notifications_in_order() {
        let listener = BroadcastSnapshotListener::default();
        let mut receiver = listener.subscribe();
        let scope = ScopeId::new("net8.0");

        listener.snapshot_published(&scope, 1);
        listener.snapshot_published(&scope, 2);

        assert_eq!(receiver.recv().await.unwrap().version, 1);
        let second = receiver.recv().await.unwrap();
        assert_eq!(second, SnapshotChanged { scope, version: 2 });
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let listener = BroadcastSnapshotListener::new(0);
        assert_eq!(listener.receiver_count(), 0);
        listener.snapshot_published(&ScopeId::new("net8.0"), 1);
    }
}
