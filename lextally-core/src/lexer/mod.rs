//! 标识符频次扫描器
//!
//! 单遍词法扫描，设计目标：
//! - O(n) 复杂度：每个字符最多消费一次，单字符预读，无回溯
//! - 状态显式：有限状态机的每个状态和转移都可独立审查
//! - 无副产物：不产出 token 流，唯一产物是标识符频次表

pub mod core;
pub mod error;
pub mod scanner;

pub use self::core::{CharStream, SourcePosition};
pub use error::ScanError;
pub use scanner::Scanner;
