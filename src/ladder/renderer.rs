use std::collections::HashSet;

use crate::config::LadderConfig;
use crate::orderbook::Snapshot;

use super::direction_tracker::DirectionTracker;
use super::quantity_normalizer::NormalizationContext;
use super::types::{DepthDisplayRow, Side};

/// 渲染统计
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderStats {
    pub snapshots_rendered: u64,
    pub rows_rendered: u64,
    pub levels_evicted: u64,
    pub empty_snapshots: u64,
}

/// 深度表渲染器
///
/// 持有买卖两侧各自的方向跟踪器，每个快照重新计算方向与宽度比例。
/// 给定相同的快照与跟踪器状态，输出是确定的。
pub struct DepthTableRenderer {
    bid_tracker: DirectionTracker,
    offer_tracker: DirectionTracker,
    evict_absent_levels: bool,
    stats: RenderStats,
}

impl DepthTableRenderer {
    pub fn new() -> Self {
        Self::with_config(&LadderConfig::default())
    }

    pub fn with_config(config: &LadderConfig) -> Self {
        Self {
            bid_tracker: DirectionTracker::new(Side::Bid),
            offer_tracker: DirectionTracker::new(Side::Offer),
            evict_absent_levels: config.evict_absent_levels,
            stats: RenderStats::default(),
        }
    }

    /// 渲染一个快照，输出顺序与快照的档位升序一致
    pub fn render(&mut self, snapshot: &Snapshot) -> Vec<DepthDisplayRow> {
        self.stats.snapshots_rendered += 1;

        // 空快照不产生行，也不影响跟踪器状态
        if snapshot.is_empty() {
            self.stats.empty_snapshots += 1;
            return Vec::new();
        }

        let context = NormalizationContext::from_rows(snapshot.rows());

        let rows: Vec<DepthDisplayRow> = snapshot
            .rows()
            .iter()
            .map(|row| DepthDisplayRow {
                symbol_level: row.symbol_level.clone(),
                level: row.level,
                bid_quantity: row.bid_quantity,
                bid_width_fraction: context.width_fraction(row.bid_quantity),
                bid_price: row.bid_price,
                bid_direction: self.bid_tracker.update(row.level, row.bid_price),
                offer_price: row.offer_price,
                offer_direction: self.offer_tracker.update(row.level, row.offer_price),
                offer_quantity: row.offer_quantity,
                offer_width_fraction: context.width_fraction(row.offer_quantity),
            })
            .collect();

        if self.evict_absent_levels {
            let present: HashSet<u32> = snapshot.levels().collect();
            let evicted = self.bid_tracker.retain_levels(&present) + self.offer_tracker.retain_levels(&present);
            self.stats.levels_evicted += evicted as u64;
        }

        self.stats.rows_rendered += rows.len() as u64;

        log::debug!(
            "渲染快照: {} 行, 最大挂单量 {:.3}, 跟踪档位 {}",
            rows.len(),
            context.max_quantity,
            self.bid_tracker.len()
        );

        rows
    }

    /// 重置所有跟踪状态，等同于组件重新挂载
    pub fn reset(&mut self) {
        self.bid_tracker.clear();
        self.offer_tracker.clear();
        log::info!("深度表渲染器已重置");
    }

    /// 当前仍在跟踪的档位（两侧的并集，升序）
    pub fn tracked_levels(&self) -> Vec<u32> {
        let mut levels = self.bid_tracker.tracked_levels();
        levels.extend(self.offer_tracker.tracked_levels());
        levels.sort_unstable();
        levels.dedup();
        levels
    }

    pub fn tracker(&self, side: Side) -> &DirectionTracker {
        match side {
            Side::Bid => &self.bid_tracker,
            Side::Offer => &self.offer_tracker,
        }
    }

    pub fn evicts_absent_levels(&self) -> bool {
        self.evict_absent_levels
    }

    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = RenderStats::default();
    }
}

impl Default for DepthTableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::Direction;
    use crate::orderbook::DepthRow;

    fn single_row(bid: f64, offer: f64) -> Snapshot {
        Snapshot::new(vec![DepthRow::new(0, bid, 50.0, offer, 30.0)])
    }

    #[test]
    fn test_first_render() {
        let mut renderer = DepthTableRenderer::new();
        let rows = renderer.render(&single_row(100.0, 101.0));

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.bid_direction, Direction::Unknown);
        assert_eq!(row.offer_direction, Direction::Unknown);

        // 两侧共用最大值50
        assert_eq!(row.bid_width_fraction, 1.0);
        assert_eq!(row.offer_width_fraction, 0.6);
    }

    #[test]
    fn test_second_render_directions() {
        let mut renderer = DepthTableRenderer::new();
        renderer.render(&single_row(100.0, 101.0));

        let rows = renderer.render(&single_row(99.0, 101.0));
        assert_eq!(rows[0].bid_direction, Direction::Down);
        assert_eq!(rows[0].offer_direction, Direction::Unchanged);
    }

    #[test]
    fn test_sides_tracked_independently() {
        let mut renderer = DepthTableRenderer::new();
        renderer.render(&single_row(100.0, 101.0));

        // 买价上涨，卖价下跌
        let rows = renderer.render(&single_row(100.5, 100.8));
        assert_eq!(rows[0].bid_direction, Direction::Up);
        assert_eq!(rows[0].offer_direction, Direction::Down);
    }

    #[test]
    fn test_empty_snapshot_keeps_state() {
        let mut renderer = DepthTableRenderer::new();
        renderer.render(&single_row(100.0, 101.0));

        let rows = renderer.render(&Snapshot::empty());
        assert!(rows.is_empty());
        assert_eq!(renderer.tracked_levels(), vec![0]);

        let rows = renderer.render(&single_row(101.0, 101.0));
        assert_eq!(rows[0].bid_direction, Direction::Up);
        assert_eq!(renderer.stats().empty_snapshots, 1);
    }

    #[test]
    fn test_eviction_on_absence() {
        let mut renderer = DepthTableRenderer::new();
        renderer.render(&Snapshot::new(vec![
            DepthRow::new(0, 100.0, 10.0, 101.0, 10.0),
            DepthRow::new(1, 99.0, 10.0, 102.0, 10.0),
        ]));

        renderer.render(&Snapshot::new(vec![DepthRow::new(0, 100.0, 10.0, 101.0, 10.0)]));
        assert_eq!(renderer.tracked_levels(), vec![0]);
        assert_eq!(renderer.stats().levels_evicted, 2);

        let rows = renderer.render(&Snapshot::new(vec![
            DepthRow::new(0, 100.0, 10.0, 101.0, 10.0),
            DepthRow::new(1, 98.0, 10.0, 103.0, 10.0),
        ]));
        assert_eq!(rows[1].bid_direction, Direction::Unknown);
        assert_eq!(rows[1].offer_direction, Direction::Unknown);
    }

    #[test]
    fn test_eviction_disabled_resumes_stale_price() {
        let config = LadderConfig {
            evict_absent_levels: false,
            ..LadderConfig::default()
        };
        let mut renderer = DepthTableRenderer::with_config(&config);
        assert!(!renderer.evicts_absent_levels());

        renderer.render(&Snapshot::new(vec![DepthRow::new(1, 99.0, 10.0, 102.0, 10.0)]));
        renderer.render(&Snapshot::new(vec![DepthRow::new(0, 100.0, 10.0, 101.0, 10.0)]));

        let rows = renderer.render(&Snapshot::new(vec![DepthRow::new(1, 98.0, 10.0, 102.0, 10.0)]));
        assert_eq!(rows[0].bid_direction, Direction::Down);
        assert_eq!(rows[0].offer_direction, Direction::Unchanged);
    }

    #[test]
    fn test_reset_forgets_everything() {
        let mut renderer = DepthTableRenderer::new();
        renderer.render(&single_row(100.0, 101.0));
        renderer.reset();

        assert!(renderer.tracked_levels().is_empty());
        assert!(renderer.tracker(Side::Bid).is_empty());

        let rows = renderer.render(&single_row(99.0, 101.0));
        assert_eq!(rows[0].bid_direction, Direction::Unknown);
    }

    #[test]
    fn test_stats() {
        let mut renderer = DepthTableRenderer::new();
        renderer.render(&single_row(100.0, 101.0));
        renderer.render(&single_row(100.0, 101.0));

        let stats = renderer.stats().clone();
        assert_eq!(stats.snapshots_rendered, 2);
        assert_eq!(stats.rows_rendered, 2);
        assert_eq!(stats.levels_evicted, 0);

        renderer.reset_stats();
        assert_eq!(renderer.stats(), &RenderStats::default());
    }
}
