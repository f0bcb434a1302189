//! 频次报告输出
//!
//! 两列文本报告与可选的 JSON 输出，都写到 stdout。

use lextally_core::FrequencyTable;

/// 渲染两列频次报告
///
/// 标识符左对齐 20 列，出现次数右对齐 10 列，超长内容不截断。
/// 行按标识符升序排列。
pub fn render_report(table: &FrequencyTable) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<20}|{:>10}\n",
        "Identifier", "Occurrence count"
    ));
    for (name, count) in table.sorted_entries() {
        out.push_str(&format!("{:<20}|{:>10}\n", name, count));
    }
    out
}

/// JSON 格式输出频次表
pub fn print_table_json(table: &FrequencyTable) {
    let output = build_table_json(table);
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

/// 构建频次表 JSON
fn build_table_json(table: &FrequencyTable) -> serde_json::Value {
    use serde_json::json;

    let identifiers: Vec<serde_json::Value> = table
        .sorted_entries()
        .iter()
        .map(|(name, count)| json!({ "identifier": name, "count": count }))
        .collect();

    json!({
        "distinct": table.len(),
        "total": table.total(),
        "identifiers": identifiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lextally_api::{scan_source, RunConfig};

    fn sample_table(source: &str) -> FrequencyTable {
        scan_source(source, &RunConfig::default()).expect("scan should succeed")
    }

    #[test]
    fn test_report_header() {
        let table = sample_table("");
        let report = render_report(&table);
        let header = report.lines().next().unwrap();

        assert_eq!(header, "Identifier          |Occurrence count");
    }

    #[test]
    fn test_report_rows_sorted_and_aligned() {
        let table = sample_table("beta alpha beta");
        let report = render_report(&table);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "alpha               |         1");
        assert_eq!(lines[2], "beta                |         2");
    }

    #[test]
    fn test_report_empty_table_has_only_header() {
        let table = sample_table("");
        let report = render_report(&table);

        assert_eq!(report.lines().count(), 1);
    }

    #[test]
    fn test_report_long_identifier_not_truncated() {
        let table = sample_table("extraordinarily_long_identifier");
        let report = render_report(&table);

        assert!(report.contains("extraordinarily_long_identifier|"));
    }

    #[test]
    fn test_table_json_shape() {
        let table = sample_table("b a b");
        let value = build_table_json(&table);

        assert_eq!(value["distinct"], 2);
        assert_eq!(value["total"], 3);
        assert_eq!(value["identifiers"][0]["identifier"], "a");
        assert_eq!(value["identifiers"][1]["identifier"], "b");
        assert_eq!(value["identifiers"][1]["count"], 2);
    }
}
