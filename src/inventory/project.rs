// Whole-project inventory: the three roots scanned with their own extractors

use crate::config::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::extract::{BehaviorExtractor, BenchmarkExtractor, SymbolExtractor};
use crate::inventory::{
    BenchmarkInventory, Scanner, SkippedFile, SourceInventory, TestInventory,
};
use crate::output::{render_report, ReportHeader, Summary};
use std::path::Path;

/// Source, benchmark and test inventories of one project
#[derive(Debug)]
pub struct ProjectInventory {
    pub sources: SourceInventory,
    pub benches: BenchmarkInventory,
    pub tests: TestInventory,
    /// Files left out of any inventory
    pub skipped: Vec<SkippedFile>,
}

impl ProjectInventory {
    /// Scan the configured roots under `project_root`.
    ///
    /// Roots are scanned one after the other. A missing root fails the
    /// build unless `scan.allow_missing_roots` is set.
    pub fn build(project_root: &Path, config: &Config, verbose: bool) -> Result<Self> {
        if !project_root.is_dir() {
            return Err(Error::PathNotFound(project_root.to_path_buf()));
        }

        let mut skipped = Vec::new();

        let sources = Scanner::from_config(&config.sources, &config.scan)?
            .with_verbose(verbose)
            .scan(&project_root.join(&config.sources.dir), &SymbolExtractor)?;
        skipped.extend(sources.skipped);

        let benches = Scanner::from_config(&config.benches, &config.scan)?
            .with_verbose(verbose)
            .scan(&project_root.join(&config.benches.dir), &BenchmarkExtractor)?;
        skipped.extend(benches.skipped);

        let tests = Scanner::from_config(&config.tests, &config.scan)?
            .with_verbose(verbose)
            .scan(&project_root.join(&config.tests.dir), &BehaviorExtractor)?;
        skipped.extend(tests.skipped);

        Ok(Self {
            sources: sources.inventory,
            benches: benches.inventory,
            tests: tests.inventory,
            skipped,
        })
    }

    pub fn summary(&self) -> Summary {
        Summary::from_inventories(&self.sources, &self.benches, &self.tests)
    }

    /// Render the report in the given format
    pub fn render(&self, format: OutputFormat, header: &ReportHeader) -> Result<String> {
        render_report(format, header, &self.sources, &self.benches, &self.tests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_project() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("benches")).unwrap();
        fs::create_dir_all(root.join("tests")).unwrap();

        fs::write(root.join("src/store.ts"), "export class Store {}\nfunction helper() {}\n").unwrap();
        fs::write(root.join("benches/store.ts"), "bench(\"insert\", () => {});\n").unwrap();
        fs::write(root.join("tests/store.test.tsx"), "it(\"inserts\", () => {});\n").unwrap();
        dir
    }

    #[test]
    fn test_build_project() {
        let dir = create_project();
        let project = ProjectInventory::build(dir.path(), &Config::default(), false).unwrap();

        assert_eq!(project.sources.len(), 1);
        assert_eq!(project.benches.len(), 1);
        assert_eq!(project.tests.len(), 1);
        assert!(project.skipped.is_empty());

        let summary = project.summary();
        assert_eq!(summary.total_symbols, 2);
        assert_eq!(summary.total_benchmarks, 1);
        assert_eq!(summary.total_behaviors, 1);
    }

    #[test]
    fn test_build_missing_root_fails() {
        let dir = create_project();
        fs::remove_dir_all(dir.path().join("benches")).unwrap();

        let result = ProjectInventory::build(dir.path(), &Config::default(), false);
        assert!(matches!(result, Err(Error::PathNotFound(_))));
    }

    #[test]
    fn test_build_missing_root_allowed() {
        let dir = create_project();
        fs::remove_dir_all(dir.path().join("benches")).unwrap();

        let mut config = Config::default();
        config.scan.allow_missing_roots = true;
        let project = ProjectInventory::build(dir.path(), &config, false).unwrap();
        assert!(project.benches.is_empty());
        assert_eq!(project.benches.root(), "benches");
    }

    #[test]
    fn test_build_missing_project_root() {
        let result = ProjectInventory::build(Path::new("/nonexistent/project"), &Config::default(), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_markdown() {
        let dir = create_project();
        let project = ProjectInventory::build(dir.path(), &Config::default(), false).unwrap();
        let header = ReportHeader::new("Store Inventory", "2026-10-19");

        let md = project.render(OutputFormat::Markdown, &header).unwrap();
        assert!(md.contains("- `src/store.ts` - 1 classes, 1 functions\n"));
        assert!(md.contains("- `tests/store.test.tsx` - 1 test behaviors\n  - inserts\n"));
    }
}
