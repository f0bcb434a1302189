//! lextally-log - 结构化日志系统
//!
//! 为 lextally 扫描器和驱动设计的结构化日志系统，特点：
//! - **显式传递**：无全局 logger，每个组件通过参数接收自己的 logger
//! - **非阻塞**：日志不卡主流程，环形缓冲区满了覆盖旧数据
//! - **可断言**：测试通过环形缓冲区检查实际产生的日志
//!
//! # 快速开始
//!
//! ```
//! use lextally_log::{LogConfig, Level, debug};
//!
//! let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(100).init();
//! debug!(logger, "scan started");
//!
//! let records = ring.unwrap().dump_records();
//! assert_eq!(records.len(), 1);
//! ```

mod config;
mod logger;
mod macros;
mod record;
mod ring_buffer;
mod span;

pub use config::{LogConfig, OutputConfig};
pub use logger::{FileSink, LogSink, Logger, SpanGuard, StderrSink, StdoutSink};
pub use record::{Level, Record};
pub use ring_buffer::{LogRingBuffer, RingBufferStats};
pub use span::{Span, SpanId};

// 宏通过 #[macro_export] 自动导出到 crate 根：
// trace!, debug!, info!, warn!, error!, log!
