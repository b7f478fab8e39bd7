// Markdown report renderer

use crate::inventory::{BenchmarkInventory, SourceInventory, TestInventory};
use crate::output::Summary;

/// Shown for a source file in which nothing was recognized
pub const NO_SYMBOLS: &str = "No symbols";

/// Title and generation marker at the top of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub title: String,
    /// Generation marker, usually a date. Supplied by the caller so the
    /// renderer itself stays deterministic.
    pub generated_on: String,
}

impl ReportHeader {
    pub fn new(title: impl Into<String>, generated_on: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            generated_on: generated_on.into(),
        }
    }
}

/// Render the inventory report.
///
/// Files are listed by path, benchmark labels and behaviors are sorted too,
/// so the same inventories always produce the same text.
pub fn render(
    header: &ReportHeader,
    sources: &SourceInventory,
    benches: &BenchmarkInventory,
    tests: &TestInventory,
) -> String {
    let summary = Summary::from_inventories(sources, benches, tests);
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", header.title));
    md.push_str(&format!("Generated on: {}\n\n", header.generated_on));

    md.push_str("## Summary\n\n");
    for line in summary.lines() {
        md.push_str(&format!("- {}\n", line));
    }
    md.push('\n');

    md.push_str(&format!("## Source Files (`{}/`)\n\n", sources.root()));
    for record in sources.sorted() {
        md.push_str(&format!(
            "- `{}` - {}\n",
            record.path,
            symbol_summary(&record.extraction)
        ));
    }
    md.push('\n');

    md.push_str(&format!("## Benchmark Files (`{}/`)\n\n", benches.root()));
    for record in benches.sorted() {
        md.push_str(&format!(
            "- `{}` - {} benchmarks\n",
            record.path,
            record.extraction.len()
        ));
        // already ordered: labels are a BTreeSet
        for label in &record.extraction {
            md.push_str(&format!("  - {}\n", label));
        }
        md.push('\n');
    }

    md.push_str(&format!("## Test Files (`{}/`)\n\n", tests.root()));
    for record in tests.sorted() {
        md.push_str(&format!(
            "- `{}` - {} test behaviors\n",
            record.path,
            record.extraction.len()
        ));
        let mut behaviors: Vec<&String> = record.extraction.iter().collect();
        behaviors.sort();
        for behavior in behaviors {
            md.push_str(&format!("  - {}\n", behavior));
        }
        md.push('\n');
    }

    md
}

/// `1 classes, 2 functions` style summary of one file's symbols
fn symbol_summary(symbols: &crate::extract::SymbolSet) -> String {
    let counts = symbols.category_counts();
    if counts.is_empty() {
        return NO_SYMBOLS.to_string();
    }

    counts
        .iter()
        .map(|(label, count)| format!("{} {}", count, label))
        .collect::<Vec<_>>()
        .join(", ")
}
