use std::env;
use std::process;

use rand::Rng;

use market_depth::{init_logging, DepthApp, DepthConfig, DepthRow, Snapshot};

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const DEFAULT_TICKS: usize = 5;

/// 十档示例盘口：(档位, 买价, 买量, 卖价, 卖量)
const SAMPLE_BOOK: [(u32, f64, f64, f64, f64); 10] = [
    (0, 1000.0, 500.0, 1010.0, 700.0),
    (1, 990.0, 700.0, 1012.0, 400.0),
    (2, 985.0, 1200.0, 1013.0, 800.0),
    (3, 984.0, 1300.0, 1018.0, 750.0),
    (4, 970.0, 800.0, 1021.0, 900.0),
    (5, 969.0, 700.0, 1026.0, 1500.0),
    (6, 950.0, 750.0, 1027.0, 1500.0),
    (7, 945.0, 900.0, 1029.0, 2000.0),
    (8, 943.0, 500.0, 1031.0, 500.0),
    (9, 940.0, 200.0, 1024.0, 800.0),
];

fn sample_rows() -> Vec<DepthRow> {
    SAMPLE_BOOK
        .iter()
        .map(|&(level, bid, bid_qty, offer, offer_qty)| {
            DepthRow::new(level, bid, bid_qty, offer, offer_qty).with_symbol_level(format!("123{}", level))
        })
        .collect()
}

/// 模拟一次行情跳动：价格按整数步长随机上下浮动，挂单量随机增减
fn next_tick<R: Rng>(rng: &mut R, rows: &[DepthRow]) -> Vec<DepthRow> {
    rows.iter()
        .map(|row| {
            let mut next = row.clone();
            next.bid_price = (row.bid_price + rng.gen_range(-2..=2) as f64).max(1.0);
            next.offer_price = (row.offer_price + rng.gen_range(-2..=2) as f64).max(next.bid_price);
            next.bid_quantity = (row.bid_quantity + rng.gen_range(-100.0..=100.0_f64)).max(0.0).round();
            next.offer_quantity = (row.offer_quantity + rng.gen_range(-100.0..=100.0_f64)).max(0.0).round();
            next
        })
        .collect()
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_CONFIG_PATH);
    let ticks = args
        .get(2)
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(DEFAULT_TICKS);

    let config = match DepthConfig::load_or_default(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("配置加载失败: {}", e);
            process::exit(1);
        }
    };

    init_logging(&config.logging);

    let mut app = match DepthApp::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("应用初始化失败: {}", e);
            process::exit(1);
        }
    };

    let producer = app.producer();
    let mut rng = rand::thread_rng();
    let mut rows = sample_rows();

    for tick in 0..=ticks {
        if tick > 0 {
            rows = next_tick(&mut rng, &rows);
        }

        if let Err(e) = producer.publish_snapshot(Snapshot::from(rows.clone()), "simulator") {
            log::warn!("第 {} 次跳动的快照被丢弃: {}", tick, e);
            continue;
        }

        app.process_pending();
        println!("Market Depth - tick {}", tick);
        println!("{}", app.render_text());
    }

    let stats = app.render_stats();
    log::info!(
        "共渲染 {} 个快照, {} 行, 清除档位 {}",
        stats.snapshots_rendered,
        stats.rows_rendered,
        stats.levels_evicted
    );
}
