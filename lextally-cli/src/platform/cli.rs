//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use lextally_api::TallyError;

/// 打印错误并显示源代码上下文
pub fn print_error_with_source(e: &TallyError, source: &str) {
    eprintln!("❌ {}", e);

    print_source_context(source, e.line(), e.column());
}

/// 打印源代码上下文（显示错误行前后几行）
pub fn print_source_context(source: &str, error_line: usize, error_col: usize) {
    const CONTEXT_LINES: usize = 5; // 错误行前后显示的上下文行数

    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return;
    }

    // 计算要显示的行范围
    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);

    // 计算行号的最大宽度用于对齐
    let max_line_num_width = end_line.to_string().len();

    let separator = "-".repeat(max_line_num_width + 1);
    eprintln!("{}|--", separator);

    for line_idx in start_line..=end_line {
        let line_content = lines[line_idx - 1];
        let line_str = line_idx.to_string();
        let padding = " ".repeat(max_line_num_width.saturating_sub(line_str.len()));

        eprintln!("{}{} | {}", padding, line_str, line_content);

        if line_idx == error_line {
            // 指向错误列的标记
            let marker = " ".repeat(error_col.saturating_sub(1));
            let gutter = " ".repeat(max_line_num_width);
            eprintln!("{} | {}^", gutter, marker);
        }
    }

    eprintln!("{}|--", separator);
}
