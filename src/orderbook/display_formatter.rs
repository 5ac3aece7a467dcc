use crate::ladder::{bar_length, DepthDisplayRow, Direction, Side};

const BAR_CHAR: char = '█';

/// 方向箭头字符，无变化或首次出现时不显示
pub fn direction_arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "↑",
        Direction::Down => "↓",
        Direction::Unchanged | Direction::Unknown => "",
    }
}

/// 格式化价格单元格，例如 `100.00 ↑`
pub fn format_price_cell(price: f64, direction: Direction) -> String {
    let arrow = direction_arrow(direction);
    if arrow.is_empty() {
        format!("{:.2}", price)
    } else {
        format!("{:.2} {}", price, arrow)
    }
}

/// 格式化挂单量单元格：数量加按比例缩放的色块
pub fn format_quantity_cell(quantity: f64, width_fraction: f64, max_bar_width: u16) -> String {
    let length = bar_length(width_fraction, max_bar_width) as usize;
    let quantity_text = format!("{:.3}", quantity);

    if length == 0 {
        quantity_text
    } else {
        format!("{} {}", quantity_text, BAR_CHAR.to_string().repeat(length))
    }
}

/// 一行的全部文本单元格，列顺序：档位 | 买量 | 买价 | 卖价 | 卖量
pub fn format_row_cells(row: &DepthDisplayRow, max_bar_width: u16) -> [String; 5] {
    [
        row.level.to_string(),
        format_quantity_cell(row.quantity(Side::Bid), row.width_fraction(Side::Bid), max_bar_width),
        format_price_cell(row.price(Side::Bid), row.direction(Side::Bid)),
        format_price_cell(row.price(Side::Offer), row.direction(Side::Offer)),
        format_quantity_cell(row.quantity(Side::Offer), row.width_fraction(Side::Offer), max_bar_width),
    ]
}

/// 把整个阶梯格式化为纯文本表格
pub fn format_ladder(rows: &[DepthDisplayRow], max_bar_width: u16) -> String {
    let quantity_width = max_bar_width as usize + 12;
    let mut output = format!(
        "{:>5} | {:<qw$} | {:>10} | {:>10} | {:<qw$}\n",
        "Level",
        "Bid Qty",
        "Bid",
        "Offer",
        "Offer Qty",
        qw = quantity_width
    );

    for row in rows {
        let [level, bid_qty, bid, offer, offer_qty] = format_row_cells(row, max_bar_width);
        output.push_str(&format!(
            "{:>5} | {:<qw$} | {:>10} | {:>10} | {:<qw$}\n",
            level,
            bid_qty,
            bid,
            offer,
            offer_qty,
            qw = quantity_width
        ));
    }

    output
}
