use crate::orderbook::DepthRow;

/// 计算宽度比例，结果始终在 [0, 1] 区间内
///
/// 最大量非正（空阶梯或全部为0）时返回0，不做除零
pub fn width_fraction(quantity: f64, max_quantity: f64) -> f64 {
    if !(max_quantity > 0.0) || !(quantity > 0.0) {
        return 0.0;
    }

    (quantity / max_quantity).clamp(0.0, 1.0)
}

/// 宽度比例转换为百分比
pub fn width_percent(fraction: f64) -> f64 {
    fraction * 100.0
}

/// 计算条形图长度（字符格数）
pub fn bar_length(fraction: f64, max_width: u16) -> u16 {
    if !(fraction > 0.0) || max_width == 0 {
        return 0;
    }

    let calculated_length = (fraction * max_width as f64) as u16;

    // 确保至少有1个字符的长度（如果比例大于0）
    if calculated_length == 0 {
        1
    } else {
        calculated_length.min(max_width)
    }
}

/// 单个快照的归一化上下文，每个快照重新计算，不持久化
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationContext {
    pub max_quantity: f64,
}

impl NormalizationContext {
    /// 买卖两侧共用一个最大值，使两侧条形图可以直接比较
    pub fn from_rows(rows: &[DepthRow]) -> Self {
        let max_quantity = rows
            .iter()
            .fold(0.0_f64, |max, row| max.max(row.max_quantity()));

        Self { max_quantity }
    }

    pub fn width_fraction(&self, quantity: f64) -> f64 {
        width_fraction(quantity, self.max_quantity)
    }

    /// 是否所有条形图都为空
    pub fn is_blank(&self) -> bool {
        !(self.max_quantity > 0.0)
    }
}
