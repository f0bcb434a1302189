//! CLI 日志系统初始化
//!
//! 日志写到 stderr，stdout 留给报告输出。

use std::sync::Arc;

use lextally_log::{Level, LogConfig, Logger};

/// 初始化日志系统
///
/// 未指定级别时默认 Warn。
pub fn init(level: Option<Level>) -> Arc<Logger> {
    let level = level.unwrap_or(Level::Warn);
    let (logger, _ring) = LogConfig::new(level).with_stderr().init();
    logger
}

/// Parse log level string
pub fn parse_log_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "silent" => Some(Level::Error), // silent = only errors
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}
