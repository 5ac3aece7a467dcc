use thiserror::Error;

use crate::config::{ConfigError, DepthConfig};
use crate::events::{SnapshotEvent, SnapshotProducer, SnapshotQueue, SnapshotQueueError, SnapshotQueueStats};
use crate::ladder::{DepthDisplayRow, DepthTableRenderer, RenderStats};
use crate::orderbook::display_formatter::format_ladder;
use crate::orderbook::{Snapshot, SnapshotParseError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] SnapshotParseError),

    #[error(transparent)]
    Queue(#[from] SnapshotQueueError),
}

/// 深度阶梯应用 - 快照队列的唯一消费者
///
/// 行情源通过生产者句柄推送快照，应用按到达顺序逐个完整渲染，
/// 保证同一时间只有一次渲染在修改方向跟踪器
pub struct DepthApp {
    config: DepthConfig,
    queue: SnapshotQueue,
    renderer: DepthTableRenderer,
    latest_rows: Vec<DepthDisplayRow>,
}

impl DepthApp {
    pub fn new(config: DepthConfig) -> Result<Self, AppError> {
        config.validate()?;

        let queue = SnapshotQueue::new(config.feed.queue_capacity);
        let renderer = DepthTableRenderer::with_config(&config.ladder);

        log::info!(
            "深度阶梯应用已创建: 队列容量 {}, 消失档位清除 {}",
            queue.capacity(),
            renderer.evicts_absent_levels()
        );

        Ok(Self {
            config,
            queue,
            renderer,
            latest_rows: Vec::new(),
        })
    }

    /// 获取快照生产者句柄
    pub fn producer(&self) -> SnapshotProducer {
        self.queue.producer()
    }

    /// 推送一个快照到队列
    pub fn submit(&self, snapshot: Snapshot, source: &str) -> Result<(), AppError> {
        self.queue.producer().publish(SnapshotEvent::new(snapshot, source))?;
        Ok(())
    }

    /// 解析JSON快照并推送到队列
    pub fn submit_json(&self, data: &str, source: &str) -> Result<(), AppError> {
        let snapshot = Snapshot::from_json(data)?;
        self.submit(snapshot, source)
    }

    /// 处理下一个待处理的快照，返回是否处理了快照
    pub fn process_next(&mut self) -> bool {
        match self.queue.pop() {
            Some(event) => {
                log::debug!("处理来自 {} 的快照, 排队 {:?}", event.source, event.received_at.elapsed());
                self.latest_rows = self.renderer.render(&event.snapshot);
                true
            }
            None => false,
        }
    }

    /// 按到达顺序处理所有待处理的快照，返回处理数量
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while self.process_next() {
            processed += 1;
        }
        processed
    }

    /// 直接渲染一个快照，绕过队列
    pub fn render_now(&mut self, snapshot: &Snapshot) -> &[DepthDisplayRow] {
        self.latest_rows = self.renderer.render(snapshot);
        &self.latest_rows
    }

    /// 最近一次渲染的结果
    pub fn latest_rows(&self) -> &[DepthDisplayRow] {
        &self.latest_rows
    }

    /// 最近一次渲染结果的文本表格
    pub fn render_text(&self) -> String {
        format_ladder(&self.latest_rows, self.config.ladder.bar_width)
    }

    /// 重置跟踪状态与显示结果，丢弃队列中尚未处理的快照
    pub fn reset(&mut self) {
        let discarded = self.queue.drain().len();
        if discarded > 0 {
            log::warn!("重置时丢弃 {} 个未处理的快照", discarded);
        }
        self.renderer.reset();
        self.latest_rows.clear();
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn config(&self) -> &DepthConfig {
        &self.config
    }

    pub fn renderer(&self) -> &DepthTableRenderer {
        &self.renderer
    }

    pub fn render_stats(&self) -> &RenderStats {
        self.renderer.stats()
    }

    pub fn queue_stats(&self) -> SnapshotQueueStats {
        self.queue.stats()
    }
}
