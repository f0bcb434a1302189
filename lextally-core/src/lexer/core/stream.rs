//! 字符流
//!
//! 扫描器的唯一输入。整个源文本一次性载入，
//! 提供单字符前瞻（peek）与消费（advance），不支持回退。

use lextally_log::{warn, Logger};

use crate::lexer::core::position::SourcePosition;

/// 字符流，带单字符前瞻
#[derive(Debug)]
pub struct CharStream {
    source: String,
    /// 字节偏移，始终落在字符边界上
    cursor: usize,
    position: SourcePosition,
}

impl CharStream {
    /// 从字符串创建字符流
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            cursor: 0,
            position: SourcePosition::start(),
        }
    }

    /// 从字节序列创建字符流
    ///
    /// 非法 UTF-8 序列替换为 U+FFFD 并记录警告，不中断扫描。
    pub fn from_bytes(bytes: &[u8], logger: &Logger) -> Self {
        let mut source = String::with_capacity(bytes.len());
        let mut offset = 0;
        let mut rest = bytes;

        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    source.push_str(valid);
                    break;
                }
                Err(e) => {
                    let valid_len = e.valid_up_to();
                    source.push_str(&String::from_utf8_lossy(&rest[..valid_len]));
                    let bad_len = e.error_len().unwrap_or(rest.len() - valid_len);
                    warn!(
                        logger,
                        "Invalid UTF-8 sequence at byte offset {}, replaced with U+FFFD",
                        offset + valid_len
                    );
                    source.push(char::REPLACEMENT_CHARACTER);
                    offset += valid_len + bad_len;
                    rest = &rest[valid_len + bad_len..];
                }
            }
        }

        Self::new(source)
    }

    /// 前瞻当前字符，不消费
    pub fn peek(&self) -> Option<char> {
        self.source[self.cursor..].chars().next()
    }

    /// 消费当前字符并返回
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        self.position.advance(c);
        Some(c)
    }

    /// 当前字符是否为 expected
    pub fn check(&self, expected: char) -> bool {
        self.peek() == Some(expected)
    }

    /// 当前位置
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 流是否已耗尽
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lextally_log::{LogConfig, Level};

    #[test]
    fn test_stream_ascii() {
        let mut stream = CharStream::new("ab");

        assert_eq!(stream.peek(), Some('a'));
        assert_eq!(stream.advance(), Some('a'));
        assert_eq!(stream.peek(), Some('b'));
        assert_eq!(stream.advance(), Some('b'));
        assert_eq!(stream.peek(), None);
        assert_eq!(stream.advance(), None);
    }

    #[test]
    fn test_stream_cjk() {
        let mut stream = CharStream::new("中文");

        assert_eq!(stream.advance(), Some('中'));
        assert_eq!(stream.advance(), Some('文'));
        assert!(stream.is_exhausted());
    }

    #[test]
    fn test_stream_position_tracking() {
        let mut stream = CharStream::new("a\nb");

        assert_eq!(stream.position(), SourcePosition::new(1, 1));
        stream.advance();
        assert_eq!(stream.position(), SourcePosition::new(1, 2));
        stream.advance();
        assert_eq!(stream.position(), SourcePosition::new(2, 1));
        stream.advance();
        assert_eq!(stream.position(), SourcePosition::new(2, 2));
    }

    #[test]
    fn test_stream_check() {
        let stream = CharStream::new("x");

        assert!(stream.check('x'));
        assert!(!stream.check('y'));
    }

    #[test]
    fn test_stream_empty() {
        let stream = CharStream::new("");

        assert_eq!(stream.peek(), None);
        assert!(stream.is_exhausted());
    }

    #[test]
    fn test_stream_exhausted_after_consume() {
        let mut stream = CharStream::new("a");

        assert!(!stream.is_exhausted());
        stream.advance();
        assert!(stream.is_exhausted());
    }

    #[test]
    fn test_from_bytes_valid() {
        let logger = Logger::noop();
        let mut stream = CharStream::from_bytes(b"ok", &logger);

        assert_eq!(stream.advance(), Some('o'));
        assert_eq!(stream.advance(), Some('k'));
        assert!(stream.is_exhausted());
    }

    #[test]
    fn test_from_bytes_invalid_sequence_replaced() {
        let config = LogConfig::new(Level::Warn).with_ring_buffer(100);
        let (logger, ring) = config.init();
        let ring = ring.unwrap();

        ring.clear();
        let mut stream = CharStream::from_bytes(b"a\xFFb", &logger);

        assert_eq!(stream.advance(), Some('a'));
        assert_eq!(stream.advance(), Some(char::REPLACEMENT_CHARACTER));
        assert_eq!(stream.advance(), Some('b'));
        assert!(stream.is_exhausted());

        let dump = ring.dump();
        assert!(dump.contains("Invalid UTF-8"));
        assert!(dump.contains("byte offset 1"));
    }

    #[test]
    fn test_from_bytes_truncated_tail() {
        let logger = Logger::noop();
        // 截断的多字节序列落在末尾
        let mut stream = CharStream::from_bytes(b"x\xE4\xB8", &logger);

        assert_eq!(stream.advance(), Some('x'));
        assert_eq!(stream.advance(), Some(char::REPLACEMENT_CHARACTER));
        assert!(stream.is_exhausted());
    }
}
