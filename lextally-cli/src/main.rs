//! lextally CLI - Command line interface
//!
//! Project-based scanning - all configuration from lextally.json

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

mod logging;
mod platform;
mod report;

use crate::platform::print_error_with_source;
use lextally_api::{init_config, scan_bytes, RunConfig};

/// 默认输入文件名
const DEFAULT_INPUT: &str = "prog.txt";

/// lextally.json 结构
#[derive(Debug, serde::Deserialize)]
struct ProjectConfig {
    /// 输入文件路径（相对于配置文件所在目录）
    input: Option<String>,
    /// 报告配置
    report: Option<ReportConfig>,
}

/// 报告配置
#[derive(Debug, serde::Deserialize)]
struct ReportConfig {
    /// 是否回显源码
    show_source: Option<bool>,
    /// 是否在报告后输出 JSON 频次表
    dump_json: Option<bool>,
    /// 报告输出后是否等待回车
    pause: Option<bool>,
    /// 日志级别: "silent", "error", "warn", "info", "debug", "trace"
    log_level: Option<String>,
}

#[derive(Parser)]
#[command(
    name = "lextally",
    about = "Identifier frequency tally - project-based scanning",
    version = "0.1.0"
)]
struct Cli {
    /// Configuration file path (default: ./lextally.json)
    #[arg(value_name = "CONFIG", default_value = "lextally.json")]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Read lextally.json (a missing file falls back to defaults)
    let project = match read_project_config(&cli.config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Resolve input file path (relative to config directory)
    let input = project.input.as_deref().unwrap_or(DEFAULT_INPUT);
    let input_path = resolve_input_path(&cli.config, input);

    // Read input as raw bytes; decoding is lenient further down
    let bytes = match std::fs::read(&input_path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!(
                "Error: Cannot read input file '{}': {}",
                input_path.display(),
                e
            );
            process::exit(1);
        }
    };

    // Build run configuration from lextally.json
    let run_config = build_run_config(&project);

    // Initialize API config (global singleton for convenience)
    init_config(run_config.clone());

    let source = String::from_utf8_lossy(&bytes).into_owned();

    // Show source
    if run_config.show_source {
        println!("[Source]");
        for (i, line) in source.lines().enumerate() {
            println!("{:3} | {}", i + 1, line);
        }
        println!("[Report]");
    }

    // Scan and report
    match scan_bytes(&bytes, &run_config) {
        Ok(table) => {
            print!("{}", report::render_report(&table));

            if run_config.dump_json {
                report::print_table_json(&table);
            }

            if should_pause(&project) {
                wait_for_enter();
            }
        }
        Err(e) => {
            print_error_with_source(&e, &source);
            process::exit(1);
        }
    }
}

/// Read and parse lextally.json
fn read_project_config(path: &Path) -> Result<ProjectConfig, String> {
    if !path.exists() {
        // 没有配置文件时全部取默认值
        return Ok(ProjectConfig {
            input: None,
            report: None,
        });
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("无法读取 '{}': {}", path.display(), e))?;

    let project: ProjectConfig = serde_json::from_str(&content)
        .map_err(|e| format!("解析 '{}' 失败: {}", path.display(), e))?;

    if let Some(input) = &project.input {
        if input.is_empty() {
            return Err(format!("'{}' 中的 'input' 字段不能为空", path.display()));
        }
    }

    Ok(project)
}

/// Resolve input file path relative to config directory
fn resolve_input_path(config_path: &Path, input: &str) -> PathBuf {
    let base_dir = config_path.parent().unwrap_or(Path::new("."));
    base_dir.join(input)
}

/// Build run configuration from lextally.json
fn build_run_config(project: &ProjectConfig) -> RunConfig {
    let report = project.report.as_ref();

    let show_source = report.and_then(|r| r.show_source).unwrap_or(false);
    let dump_json = report.and_then(|r| r.dump_json).unwrap_or(false);

    let level = report
        .and_then(|r| r.log_level.as_deref())
        .and_then(logging::parse_log_level);

    // Logger writes to stderr; stdout is reserved for the report
    let logger = logging::init(level);

    RunConfig {
        show_source,
        dump_json,
        logger,
    }
}

/// 报告输出后是否等待回车（默认等待）
fn should_pause(project: &ProjectConfig) -> bool {
    project
        .report
        .as_ref()
        .and_then(|r| r.pause)
        .unwrap_or(true)
}

/// 等待用户按回车
fn wait_for_enter() {
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
}
