//! 集成测试 - 端到端扫描测试

use lextally_api::{scan_bytes, scan_source, RunConfig, TallyError};
use lextally_core::FrequencyTable;
use lextally_log::{Level, LogConfig};

/// 辅助函数：扫描源文本并返回频次表
fn tally(source: &str) -> Result<FrequencyTable, TallyError> {
    let config = RunConfig::default();
    scan_source(source, &config)
}

#[test]
fn test_tally_realistic_program() {
    let source = "\
{ sample program }
program Tally;
var Count, Limit : integer;
begin
  Count := 0;
  Limit := 10;
  writeln('starting');
  while count < limit do
    count := count + 1;
  writeln('done')
end.
";
    let table = tally(source).expect("scan should succeed");

    assert_eq!(table.count("count"), 5);
    assert_eq!(table.count("limit"), 3);
    assert_eq!(table.count("writeln"), 2);
    assert_eq!(table.count("begin"), 1);
    assert_eq!(table.count("end"), 1);
    assert_eq!(table.len(), 11);
    assert_eq!(table.total(), 18);
}

#[test]
fn test_tally_case_insensitive() {
    let table = tally("Alpha ALPHA alpha").expect("scan should succeed");

    assert_eq!(table.count("alpha"), 3);
    assert_eq!(table.len(), 1);
}

#[test]
fn test_tally_literals_excluded() {
    let table = tally("x 'string contents' 42 3.14 { comment } y").expect("scan should succeed");

    assert_eq!(table.count("x"), 1);
    assert_eq!(table.count("y"), 1);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_tally_empty_source() {
    let table = tally("").expect("scan should succeed");

    assert!(table.is_empty());
}

#[test]
fn test_report_order_is_sorted() {
    let table = tally("gamma alpha beta").expect("scan should succeed");

    let names: Vec<&str> = table.sorted_entries().iter().map(|(n, _)| *n).collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn test_unterminated_string_reported() {
    let err = tally("x 'oops").expect_err("scan should fail");

    assert_eq!(err.phase(), "scanner");
    assert_eq!(err.line(), 1);
    assert_eq!(err.column(), 3);

    let report = err.to_report();
    assert_eq!(report.error_kind, "UnterminatedString");
    assert_eq!(
        format!("{}", report),
        "[1:3] scanner error: Unterminated string literal starting at 1:3"
    );
}

#[test]
fn test_unterminated_comment_reported() {
    let err = tally("a\nb { oops").expect_err("scan should fail");

    assert_eq!(err.line(), 2);
    assert_eq!(err.column(), 3);

    let report = err.to_report();
    assert_eq!(report.error_kind, "UnterminatedComment");
    let json = report.to_json();
    assert!(json.contains("\"phase\":\"scanner\""));
    assert!(json.contains("\"line\":2"));
}

#[test]
fn test_scan_bytes_with_invalid_utf8() {
    // 0xE9 后跟空格不是合法序列，替换为 U+FFFD 后不影响相邻标识符
    let config = RunConfig::default();
    let table = scan_bytes(b"caf\xE9 cafe", &config).expect("scan should succeed");

    assert_eq!(table.count("caf"), 1);
    assert_eq!(table.count("cafe"), 1);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_scan_logs_lifecycle() {
    let log_config = LogConfig::new(Level::Info).with_ring_buffer(100);
    let (logger, ring) = log_config.init();
    let ring = ring.expect("ring buffer requested");

    let config = RunConfig {
        logger,
        ..RunConfig::default()
    };

    ring.clear();
    let table = scan_source("a b a", &config).expect("scan should succeed");
    assert_eq!(table.count("a"), 2);

    let dump = ring.dump();
    assert!(dump.contains("Starting scan"));
    assert!(dump.contains("Scan completed"));
}

#[test]
fn test_failed_scan_yields_no_table() {
    let result = tally("before 'unterminated");

    // 错误路径不产生任何部分结果
    match result {
        Ok(_) => panic!("expected scan error"),
        Err(err) => assert_eq!(err.to_report().error_kind, "UnterminatedString"),
    }
}
