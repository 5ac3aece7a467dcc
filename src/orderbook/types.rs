//! 深度阶梯行数据结构定义

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 深度阶梯的一行（一个档位）
///
/// 字段名兼容行情源的JSON格式：`bid` / `offer` 为价格，`bidQuantity` / `offerQuantity` 为挂单量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthRow {
    /// 行情源的组合行键（品种代码+档位），原样透传
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_level: Option<String>,
    pub level: u32,
    #[serde(rename = "bid", alias = "bidPrice")]
    pub bid_price: f64,
    pub bid_quantity: f64,
    #[serde(rename = "offer", alias = "offerPrice")]
    pub offer_price: f64,
    pub offer_quantity: f64,
}

impl DepthRow {
    pub fn new(level: u32, bid_price: f64, bid_quantity: f64, offer_price: f64, offer_quantity: f64) -> Self {
        Self {
            symbol_level: None,
            level,
            bid_price,
            bid_quantity,
            offer_price,
            offer_quantity,
        }
    }

    pub fn with_symbol_level(mut self, symbol_level: impl Into<String>) -> Self {
        self.symbol_level = Some(symbol_level.into());
        self
    }

    /// 本档位两侧挂单量中的较大值
    pub fn max_quantity(&self) -> f64 {
        self.bid_quantity.max(self.offer_quantity)
    }

    /// 买卖价差
    pub fn spread(&self) -> f64 {
        self.offer_price - self.bid_price
    }
}

/// 快照解析错误
#[derive(Debug, Error)]
pub enum SnapshotParseError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 一次完整的深度快照，按档位升序排列
///
/// 每个快照整体替换当前可见的阶梯，不做增量合并
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    rows: Vec<DepthRow>,
}

impl Snapshot {
    /// 创建快照，按档位稳定排序
    pub fn new(mut rows: Vec<DepthRow>) -> Self {
        rows.sort_by_key(|row| row.level);
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// 从行情源的JSON数组解析快照
    pub fn from_json(data: &str) -> Result<Self, SnapshotParseError> {
        let rows: Vec<DepthRow> = serde_json::from_str(data)?;
        Ok(Self::new(rows))
    }

    /// 从已解析的JSON值构建快照
    pub fn from_value(value: serde_json::Value) -> Result<Self, SnapshotParseError> {
        let rows: Vec<DepthRow> = serde_json::from_value(value)?;
        Ok(Self::new(rows))
    }

    pub fn rows(&self) -> &[DepthRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().map(|row| row.level)
    }
}

impl From<Vec<DepthRow>> for Snapshot {
    fn from(rows: Vec<DepthRow>) -> Self {
        Self::new(rows)
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a DepthRow;
    type IntoIter = std::slice::Iter<'a, DepthRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
