// Extraction module: turns one file's text into its inventory entry

mod behaviors;
mod benchmarks;
pub mod symbols;

pub use behaviors::{extract_behaviors, TestBehaviors};
pub use benchmarks::{extract_benchmarks, BenchmarkLabels};
pub use symbols::{classify, is_reserved, SymbolSet, RESERVED_KEYWORDS};

/// Per-file extraction applied by the scanner.
///
/// Each root has its own extractor and output type, so source, benchmark
/// and test inventories stay distinct types end to end.
pub trait Extractor {
    type Output;

    /// Short name used in log events
    fn name(&self) -> &'static str;

    fn extract(&self, content: &str) -> Self::Output;
}

/// Declared symbols of a source file
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolExtractor;

impl Extractor for SymbolExtractor {
    type Output = SymbolSet;

    fn name(&self) -> &'static str {
        "symbols"
    }

    fn extract(&self, content: &str) -> SymbolSet {
        classify(content)
    }
}

/// Benchmark and suite labels of a benchmark file
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkExtractor;

impl Extractor for BenchmarkExtractor {
    type Output = BenchmarkLabels;

    fn name(&self) -> &'static str {
        "benchmarks"
    }

    fn extract(&self, content: &str) -> BenchmarkLabels {
        extract_benchmarks(content)
    }
}

/// Behavior descriptions of a test file
#[derive(Debug, Clone, Copy, Default)]
pub struct BehaviorExtractor;

impl Extractor for BehaviorExtractor {
    type Output = TestBehaviors;

    fn name(&self) -> &'static str {
        "behaviors"
    }

    fn extract(&self, content: &str) -> TestBehaviors {
        extract_behaviors(content)
    }
}
