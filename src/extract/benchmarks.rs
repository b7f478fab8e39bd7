// Benchmark label extraction
//
// Picks up `bench("name", ...)` registrations and `describe("suite", ...)`
// groups. Both land in one flat set; nesting is not tracked.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Unique benchmark and suite names declared in one file
pub type BenchmarkLabels = BTreeSet<String>;

static BENCH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"bench\(\s*['"]([^'"]+)['"]"#).unwrap());

static SUITE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"describe\(\s*['"]([^'"]+)['"]"#).unwrap());

/// Collect benchmark and suite labels from a benchmark file
pub fn extract_benchmarks(content: &str) -> BenchmarkLabels {
    BENCH_RE
        .captures_iter(content)
        .chain(SUITE_RE.captures_iter(content))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
