/// Publish notifications for in-process subscribers
mod broadcast_listener;

pub use broadcast_listener::{BroadcastSnapshotListener, SnapshotChanged};
