// Summary counters shared by the report and the console output

use crate::inventory::{BenchmarkInventory, SourceInventory, TestInventory};
use serde::Serialize;
use std::fmt;

/// Project-wide totals derived from the three inventories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub source_root: String,
    pub source_files: usize,
    pub benchmark_files: usize,
    pub test_files: usize,
    /// Functions, classes and interfaces across all source files
    pub total_symbols: usize,
    pub total_benchmarks: usize,
    pub total_behaviors: usize,
}

impl Summary {
    pub fn from_inventories(
        sources: &SourceInventory,
        benches: &BenchmarkInventory,
        tests: &TestInventory,
    ) -> Self {
        Self {
            source_root: sources.root().to_string(),
            source_files: sources.len(),
            benchmark_files: benches.len(),
            test_files: tests.len(),
            total_symbols: sources.iter().map(|r| r.extraction.primary_count()).sum(),
            total_benchmarks: benches.iter().map(|r| r.extraction.len()).sum(),
            total_behaviors: tests.iter().map(|r| r.extraction.len()).sum(),
        }
    }

    /// One line per counter, without list markers
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Source files: {}", self.source_files),
            format!("Benchmark files: {}", self.benchmark_files),
            format!("Test files: {}", self.test_files),
            format!("Total symbols in {}/: {}", self.source_root, self.total_symbols),
            format!("Total benchmarks: {}", self.total_benchmarks),
            format!("Total test behaviors: {}", self.total_behaviors),
        ]
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
