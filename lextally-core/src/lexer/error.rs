//! 扫描错误
//!
//! 只有两种致命错误：未闭合的字符串与未闭合的注释。
//! 其余不规则输入一律静默丢弃，不产生错误。

use thiserror::Error;

use crate::lexer::core::position::SourcePosition;

/// 扫描错误，携带构造的起始位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Unterminated string literal starting at {start}")]
    UnterminatedString { start: SourcePosition },

    #[error("Unterminated comment starting at {start}")]
    UnterminatedComment { start: SourcePosition },
}

impl ScanError {
    /// 错误对应构造的起始位置
    pub fn position(&self) -> SourcePosition {
        match self {
            Self::UnterminatedString { start } => *start,
            Self::UnterminatedComment { start } => *start,
        }
    }

    /// 起始行号
    pub fn line(&self) -> usize {
        self.position().line
    }

    /// 起始列号
    pub fn column(&self) -> usize {
        self.position().column
    }

    /// 错误种类名，用于结构化报告
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::UnterminatedString { .. } => "UnterminatedString",
            Self::UnterminatedComment { .. } => "UnterminatedComment",
        }
    }
}
