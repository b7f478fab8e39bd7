// JSON report renderer

use crate::error::Result;
use crate::extract::{BenchmarkLabels, SymbolSet, TestBehaviors};
use crate::inventory::{BenchmarkInventory, FileRecord, SourceInventory, TestInventory};
use crate::output::{ReportHeader, Summary};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    generated_on: &'a str,
    summary: Summary,
    sources: Vec<&'a FileRecord<SymbolSet>>,
    benchmarks: Vec<&'a FileRecord<BenchmarkLabels>>,
    tests: Vec<&'a FileRecord<TestBehaviors>>,
}

/// Render the inventories as pretty-printed JSON.
///
/// Files are sorted by path; test behaviors keep their file order.
pub fn render_json(
    header: &ReportHeader,
    sources: &SourceInventory,
    benches: &BenchmarkInventory,
    tests: &TestInventory,
) -> Result<String> {
    let report = JsonReport {
        title: &header.title,
        generated_on: &header.generated_on,
        summary: Summary::from_inventories(sources, benches, tests),
        sources: sources.sorted(),
        benchmarks: benches.sorted(),
        tests: tests.sorted(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
