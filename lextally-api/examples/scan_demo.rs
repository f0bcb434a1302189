//! 最小扫描示例
//!
//! cargo run -p lextally-api --example scan_demo

use lextally_api::{scan_source, RunConfig};

fn main() {
    let source = "Foo foo { comment } 'string' 42 bar";

    match scan_source(source, &RunConfig::default()) {
        Ok(table) => {
            for (name, count) in table.sorted_entries() {
                println!("{name}: {count}");
            }
        }
        Err(e) => {
            eprintln!("{}", e.to_report());
        }
    }
}
