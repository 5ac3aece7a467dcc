pub mod snapshot_queue;

pub use snapshot_queue::{SnapshotEvent, SnapshotProducer, SnapshotQueue, SnapshotQueueError, SnapshotQueueStats};
