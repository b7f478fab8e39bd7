// Output generation module

mod json;
mod markdown;
mod summary;

pub use json::render_json;
pub use markdown::{render, ReportHeader, NO_SYMBOLS};
pub use summary::Summary;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::inventory::{BenchmarkInventory, SourceInventory, TestInventory};

/// Render the report in the requested format
pub fn render_report(
    format: OutputFormat,
    header: &ReportHeader,
    sources: &SourceInventory,
    benches: &BenchmarkInventory,
    tests: &TestInventory,
) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render(header, sources, benches, tests)),
        OutputFormat::Json => render_json(header, sources, benches, tests),
    }
}
