//! 深度阶梯渲染输出的数据类型

use serde::{Deserialize, Serialize};

/// 价格变动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Unchanged,
    /// 首次观察到该档位，没有可比较的上一次价格
    Unknown,
}

impl Direction {
    /// 根据价格差推导方向
    ///
    /// 精确比较，不使用容差；NaN差值的比较全部为false，因此落到Unchanged
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Direction::Up
        } else if delta < 0.0 {
            Direction::Down
        } else {
            Direction::Unchanged
        }
    }

    /// 是否需要显示箭头
    pub fn has_arrow(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Unchanged => "unchanged",
            Direction::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 买卖方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Bid,
    Offer,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Bid => "bid",
            Side::Offer => "offer",
        }
    }
}

/// 渲染完成的一行，交给展示层使用
///
/// 只携带语义信息（方向与宽度比例），不含任何样式
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthDisplayRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_level: Option<String>,
    pub level: u32,
    pub bid_quantity: f64,
    pub bid_width_fraction: f64,
    pub bid_price: f64,
    pub bid_direction: Direction,
    pub offer_price: f64,
    pub offer_direction: Direction,
    pub offer_quantity: f64,
    pub offer_width_fraction: f64,
}

impl DepthDisplayRow {
    pub fn price(&self, side: Side) -> f64 {
        match side {
            Side::Bid => self.bid_price,
            Side::Offer => self.offer_price,
        }
    }

    pub fn quantity(&self, side: Side) -> f64 {
        match side {
            Side::Bid => self.bid_quantity,
            Side::Offer => self.offer_quantity,
        }
    }

    pub fn direction(&self, side: Side) -> Direction {
        match side {
            Side::Bid => self.bid_direction,
            Side::Offer => self.offer_direction,
        }
    }

    pub fn width_fraction(&self, side: Side) -> f64 {
        match side {
            Side::Bid => self.bid_width_fraction,
            Side::Offer => self.offer_width_fraction,
        }
    }
}
