//! 日志基础设施

use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// 初始化全局日志，`RUST_LOG` 存在时优先生效
    pub fn init(level: Level) {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .from_env_lossy();

        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
