// 核心模块
pub mod app;
pub mod config;
pub mod events;
pub mod ladder;
pub mod orderbook;

// 重新导出主要类型
pub use app::{AppError, DepthApp};
pub use config::{ConfigError, DepthConfig, LadderConfig, LoggingConfig};
pub use events::{SnapshotProducer, SnapshotQueue};
pub use ladder::{DepthDisplayRow, DepthTableRenderer, Direction, DirectionTracker, NormalizationContext, Side};
pub use orderbook::{DepthRow, Snapshot};

/// 库的版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 初始化日志系统
///
/// 配置了日志文件时写入文件，无法创建文件时回退到标准错误输出。
/// `RUST_LOG` 环境变量中的过滤规则优先于配置的日志级别。
pub fn init_logging(config: &LoggingConfig) {
    use std::fs::OpenOptions;

    let level = config.level.parse().unwrap_or(log::LevelFilter::Info);

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if let Some(path) = &config.file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(log_file) => {
                builder.target(env_logger::Target::Pipe(Box::new(log_file)));
            }
            Err(e) => {
                eprintln!("无法打开日志文件 {}: {}，日志输出到标准错误", path, e);
            }
        }
    }

    // 重复初始化时忽略错误（测试中多次调用）
    let _ = builder.try_init();
}
