use std::collections::{HashMap, HashSet};

use super::types::{Direction, Side};

/// 方向跟踪器 - 按档位记录上一次价格并推导涨跌方向
///
/// 状态以档位为键，而不是以行在快照中的位置为键，档位重排时状态跟随档位
pub struct DirectionTracker {
    side: Side,
    last_prices: HashMap<u32, f64>,
}

impl DirectionTracker {
    /// 创建新的方向跟踪器
    pub fn new(side: Side) -> Self {
        Self {
            side,
            last_prices: HashMap::new(),
        }
    }

    /// 创建预分配容量的方向跟踪器
    pub fn with_capacity(side: Side, capacity: usize) -> Self {
        Self {
            side,
            last_prices: HashMap::with_capacity(capacity),
        }
    }

    /// 用新价格更新档位并返回方向
    ///
    /// 读取上一次价格与写入新价格在同一次调用内完成，无论方向如何都会提交新价格
    pub fn update(&mut self, level: u32, new_price: f64) -> Direction {
        match self.last_prices.insert(level, new_price) {
            Some(last_price) => Direction::from_delta(new_price - last_price),
            None => Direction::Unknown, // 首次出现
        }
    }

    /// 只保留指定集合中的档位，返回被清除的数量
    pub fn retain_levels(&mut self, levels: &HashSet<u32>) -> usize {
        let before = self.last_prices.len();
        self.last_prices.retain(|level, _| levels.contains(level));
        let evicted = before - self.last_prices.len();

        if evicted > 0 {
            log::debug!("{} 侧清除 {} 个已消失的档位", self.side.as_str(), evicted);
        }

        evicted
    }

    /// 忘记单个档位，下一次出现时视为新行
    pub fn forget(&mut self, level: u32) -> Option<f64> {
        self.last_prices.remove(&level)
    }

    /// 获取档位上一次记录的价格
    pub fn last_price(&self, level: u32) -> Option<f64> {
        self.last_prices.get(&level).copied()
    }

    pub fn contains(&self, level: u32) -> bool {
        self.last_prices.contains_key(&level)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn len(&self) -> usize {
        self.last_prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_prices.is_empty()
    }

    /// 已跟踪的档位，升序
    pub fn tracked_levels(&self) -> Vec<u32> {
        let mut levels: Vec<u32> = self.last_prices.keys().copied().collect();
        levels.sort_unstable();
        levels
    }

    /// 清空所有状态（组件重启）
    pub fn clear(&mut self) {
        self.last_prices.clear();
    }
}
