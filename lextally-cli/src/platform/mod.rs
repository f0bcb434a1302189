//! 平台相关输出
//!
//! 目前只有命令行实现。

pub mod cli;

pub use cli::print_error_with_source;
