//! 扫描器基础设施：字符流与位置追踪

pub mod position;
pub mod stream;

pub use position::SourcePosition;
pub use stream::CharStream;
