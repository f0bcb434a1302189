//! 标识符频次扫描器
//!
//! 对字符流做单遍扫描，统计标识符出现次数（忽略大小写）。
//! 字符串字面量、数字字面量、块注释被整体消费后丢弃，
//! 其余不规则字符静默跳过。只有未闭合的字符串和未闭合的注释是致命错误。

use std::sync::Arc;

use lextally_log::{debug, trace, Logger};

use crate::lexer::core::position::SourcePosition;
use crate::lexer::core::stream::CharStream;
use crate::lexer::error::ScanError;
use crate::table::FrequencyTable;

/// 扫描器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// 分发状态，检视下一个字符决定去向
    Start,
    /// 标识符：字母或下划线的连续串
    Identifier,
    /// 字符串字面量，'...' 之间整体丢弃
    StringLiteral,
    /// 数字的整数部分
    Number,
    /// 小数点之后的部分
    NumberFraction,
    /// 块注释，{...} 之间整体丢弃
    Comment,
    /// 刚消费了一个 '-'，等待判断是否为带符号数字
    Dash,
}

/// 标识符频次扫描器
///
/// 构造时即完成整个输入的扫描。扫描失败时不产生任何部分结果。
#[derive(Debug)]
pub struct Scanner {
    table: FrequencyTable,
}

impl Scanner {
    /// 扫描整个字符流
    pub fn new(stream: &mut CharStream) -> Result<Self, ScanError> {
        Self::with_logger(stream, Logger::noop())
    }

    /// 扫描整个字符流，使用指定的 logger
    pub fn with_logger(stream: &mut CharStream, logger: Arc<Logger>) -> Result<Self, ScanError> {
        trace!(logger, "Starting scan");
        let mut table = FrequencyTable::new();
        let mut machine = ScanMachine {
            stream,
            table: &mut table,
            construct_start: SourcePosition::start(),
            logger: &logger,
        };
        machine.run()?;
        debug!(
            logger,
            "Scan finished: {} distinct identifiers",
            table.len()
        );
        Ok(Self { table })
    }

    /// 频次表
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// 消费扫描器，取出频次表
    pub fn into_table(self) -> FrequencyTable {
        self.table
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ':' | ';')
}

/// 扫描状态机
///
/// 每个状态一个方法，返回下一个状态。
struct ScanMachine<'a> {
    stream: &'a mut CharStream,
    table: &'a mut FrequencyTable,
    /// 当前字符串或注释的起始位置，用于错误报告
    construct_start: SourcePosition,
    logger: &'a Logger,
}

impl ScanMachine<'_> {
    fn run(&mut self) -> Result<(), ScanError> {
        let mut state = ScanState::Start;
        loop {
            state = match state {
                ScanState::Start => match self.stream.peek() {
                    Some(c) => self.classify(c),
                    None => return Ok(()),
                },
                ScanState::Identifier => self.identifier(),
                ScanState::StringLiteral => self.string_literal()?,
                ScanState::Number => self.number(),
                ScanState::NumberFraction => self.number_fraction(),
                ScanState::Comment => self.comment()?,
                ScanState::Dash => self.dash(),
            };
        }
    }

    fn classify(&mut self, c: char) -> ScanState {
        if is_separator(c) {
            self.stream.advance();
            return ScanState::Start;
        }
        if is_identifier_char(c) {
            return ScanState::Identifier;
        }
        if c.is_ascii_digit() {
            return ScanState::Number;
        }
        match c {
            '\'' => {
                self.construct_start = self.stream.position();
                self.stream.advance();
                ScanState::StringLiteral
            }
            '{' => {
                self.construct_start = self.stream.position();
                self.stream.advance();
                ScanState::Comment
            }
            '-' => {
                self.stream.advance();
                ScanState::Dash
            }
            _ => {
                trace!(self.logger, "Discarding character {:?}", c);
                self.stream.advance();
                ScanState::Start
            }
        }
    }

    fn identifier(&mut self) -> ScanState {
        let mut lexeme = String::new();
        while let Some(c) = self.stream.peek() {
            if !is_identifier_char(c) {
                break;
            }
            lexeme.push(c);
            self.stream.advance();
        }
        debug!(self.logger, "Recording identifier {:?}", lexeme);
        self.table.record(&lexeme);
        ScanState::Start
    }

    fn string_literal(&mut self) -> Result<ScanState, ScanError> {
        loop {
            match self.stream.advance() {
                Some('\'') => return Ok(ScanState::Start),
                Some(_) => {}
                None => {
                    return Err(ScanError::UnterminatedString {
                        start: self.construct_start,
                    })
                }
            }
        }
    }

    fn number(&mut self) -> ScanState {
        self.digit_run();
        // 紧跟数字串的 '.' 无条件消费
        if self.stream.check('.') {
            self.stream.advance();
            ScanState::NumberFraction
        } else {
            ScanState::Start
        }
    }

    fn number_fraction(&mut self) -> ScanState {
        if let Some(c) = self.stream.peek() {
            // 'e'/'E' 触发小数位扫描但本身不被消费
            if c.is_ascii_digit() || c == 'e' || c == 'E' {
                self.digit_run();
            }
        }
        ScanState::Start
    }

    fn comment(&mut self) -> Result<ScanState, ScanError> {
        loop {
            match self.stream.advance() {
                Some('}') => break,
                Some(_) => {}
                None => {
                    return Err(ScanError::UnterminatedComment {
                        start: self.construct_start,
                    })
                }
            }
        }
        // 闭合 '}' 之后还要前进一次，流已尽时为 no-op
        self.stream.advance();
        Ok(ScanState::Start)
    }

    fn dash(&mut self) -> ScanState {
        match self.stream.peek() {
            Some(c) if c.is_ascii_digit() => ScanState::Number,
            _ => ScanState::Start,
        }
    }

    fn digit_run(&mut self) {
        while let Some(c) = self.stream.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.stream.advance();
        }
    }
}
