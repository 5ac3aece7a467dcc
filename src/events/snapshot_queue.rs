use crossbeam_queue::ArrayQueue;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

use crate::orderbook::Snapshot;

/// 快照事件 - 行情源推送的一次完整快照
#[derive(Debug, Clone)]
pub struct SnapshotEvent {
    pub snapshot: Snapshot,
    pub source: String,
    pub received_at: Instant,
}

impl SnapshotEvent {
    pub fn new(snapshot: Snapshot, source: impl Into<String>) -> Self {
        Self {
            snapshot,
            source: source.into(),
            received_at: Instant::now(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SnapshotQueueError {
    /// 队列已满，快照被拒绝
    #[error("snapshot queue is full (capacity {capacity})")]
    Full { capacity: usize, rejected: Box<SnapshotEvent> },
}

/// 快照队列统计信息
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SnapshotQueueStats {
    pub total_published: u64,
    pub total_consumed: u64,
    pub dropped: u64,
}

#[derive(Default)]
struct QueueCounters {
    published: AtomicU64,
    consumed: AtomicU64,
    dropped: AtomicU64,
}

/// 快照队列 - 多生产者单消费者的有界环形队列
///
/// 生产者句柄可以克隆并跨线程发送；只有持有渲染器的一方出队，
/// 因此同一档位的读后写永远不会被另一次更新打断
pub struct SnapshotQueue {
    queue: Arc<ArrayQueue<SnapshotEvent>>,
    counters: Arc<QueueCounters>,
}

impl SnapshotQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Arc::new(ArrayQueue::new(capacity.max(1))),
            counters: Arc::new(QueueCounters::default()),
        }
    }

    /// 创建生产者句柄
    pub fn producer(&self) -> SnapshotProducer {
        SnapshotProducer {
            queue: Arc::clone(&self.queue),
            counters: Arc::clone(&self.counters),
        }
    }

    pub fn pop(&self) -> Option<SnapshotEvent> {
        let event = self.queue.pop()?;
        self.counters.consumed.fetch_add(1, Ordering::Relaxed);
        Some(event)
    }

    /// 取出所有待处理的快照，保持到达顺序
    pub fn drain(&self) -> Vec<SnapshotEvent> {
        let mut events = Vec::with_capacity(self.queue.len());
        while let Some(event) = self.pop() {
            events.push(event);
        }
        events
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    pub fn stats(&self) -> SnapshotQueueStats {
        SnapshotQueueStats {
            total_published: self.counters.published.load(Ordering::Relaxed),
            total_consumed: self.counters.consumed.load(Ordering::Relaxed),
            dropped: self.counters.dropped.load(Ordering::Relaxed),
        }
    }
}

/// 快照生产者句柄
#[derive(Clone)]
pub struct SnapshotProducer {
    queue: Arc<ArrayQueue<SnapshotEvent>>,
    counters: Arc<QueueCounters>,
}

impl SnapshotProducer {
    /// 发布快照，队列满时拒绝并计入丢弃数
    pub fn publish(&self, event: SnapshotEvent) -> Result<(), SnapshotQueueError> {
        match self.queue.push(event) {
            Ok(()) => {
                self.counters.published.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            Err(rejected) => {
                self.counters.dropped.fetch_add(1, Ordering::Relaxed);
                log::warn!("快照队列已满，丢弃来自 {} 的快照", rejected.source);
                Err(SnapshotQueueError::Full {
                    capacity: self.queue.capacity(),
                    rejected: Box::new(rejected),
                })
            }
        }
    }

    pub fn publish_snapshot(&self, snapshot: Snapshot, source: &str) -> Result<(), SnapshotQueueError> {
        self.publish(SnapshotEvent::new(snapshot, source))
    }

    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }
}
