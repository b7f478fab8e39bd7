// Directory scanner
//
// Walks one root, reads every file whose name matches the configured globs
// and hands the content to an extractor. A file that cannot be read is
// logged and skipped; only a missing or unreadable root stops the scan.

use crate::config::{compile_patterns, RootConfig, ScanConfig};
use crate::error::{Error, Result};
use crate::extract::Extractor;
use crate::inventory::{FileRecord, Inventory};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file left out of an inventory, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of scanning one root
#[derive(Debug)]
pub struct ScanOutcome<T> {
    pub inventory: Inventory<T>,
    pub skipped: Vec<SkippedFile>,
}

/// Scans a root directory for files matching a set of name globs
pub struct Scanner {
    patterns: Vec<glob::Pattern>,
    follow_links: bool,
    allow_missing_root: bool,
    verbose: bool,
}

impl Scanner {
    /// Create a scanner for the given file name globs
    pub fn new(patterns: &[String]) -> Result<Self> {
        Ok(Self::with_patterns(compile_patterns(patterns)?))
    }

    /// Create a scanner from a root's config section and the shared scan settings
    pub fn from_config(root: &RootConfig, scan: &ScanConfig) -> Result<Self> {
        Ok(Self::with_patterns(root.compiled_patterns()?)
            .with_follow_links(scan.follow_links)
            .with_allow_missing_root(scan.allow_missing_roots))
    }

    /// Create a scanner from already compiled globs
    pub fn with_patterns(patterns: Vec<glob::Pattern>) -> Self {
        Self {
            patterns,
            follow_links: false,
            allow_missing_root: false,
            verbose: false,
        }
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Treat a missing root as an empty one
    pub fn with_allow_missing_root(mut self, allow: bool) -> Self {
        self.allow_missing_root = allow;
        self
    }

    /// Show a progress bar while reading files
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Scan `root` and build its inventory.
    ///
    /// Record paths are relative to the parent of `root`, so they start
    /// with the root directory's own name.
    pub fn scan<E: Extractor>(&self, root: &Path, extractor: &E) -> Result<ScanOutcome<E::Output>> {
        let label = root_label(root);

        if !root.is_dir() {
            if self.allow_missing_root {
                tracing::warn!(root = %root.display(), "scan root not found, treating as empty");
                return Ok(ScanOutcome {
                    inventory: Inventory::empty(label),
                    skipped: Vec::new(),
                });
            }
            return Err(Error::PathNotFound(root.to_path_buf()));
        }

        let base = root.parent().unwrap_or(root);
        let mut skipped = Vec::new();
        let files = self.discover_files(root, &mut skipped)?;

        tracing::debug!(
            root = %root.display(),
            files = files.len(),
            extractor = extractor.name(),
            "scanning root"
        );

        let progress = self.progress_bar(files.len());
        let mut records = Vec::with_capacity(files.len());
        let mut seen = HashSet::new();

        for path in &files {
            if let Some(ref pb) = progress {
                let msg = path.file_name().unwrap_or_default().to_string_lossy().to_string();
                pb.set_message(msg);
                pb.inc(1);
            }

            let result = scan_file(path, base, extractor).and_then(|record| {
                if seen.insert(record.path.clone()) {
                    Ok(record)
                } else {
                    // lossy file names can collide
                    Err(Error::DuplicatePath(record.path))
                }
            });

            match result {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping file");
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if let Some(pb) = progress {
            pb.finish_with_message(format!("{} scanned", label));
        }

        Ok(ScanOutcome {
            inventory: Inventory::aggregate(label, records)?,
            skipped,
        })
    }

    /// Matching files under `root`, in a stable order. Unreadable entries
    /// below the root are recorded as skipped; an unreadable root is an error.
    fn discover_files(&self, root: &Path, skipped: &mut Vec<SkippedFile>) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(Error::from(e)),
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    tracing::warn!(path = %path.display(), error = %e, "skipping directory entry");
                    skipped.push(SkippedFile {
                        path,
                        reason: Error::from(e).to_string(),
                    });
                    continue;
                }
            };

            if entry.file_type().is_file() && self.matches(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Check a file name against the configured globs
    fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&name))
    }

    fn progress_bar(&self, len: usize) -> Option<ProgressBar> {
        if !self.verbose {
            return None;
        }

        let pb = ProgressBar::new(len as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        Some(pb)
    }
}

/// Read one file and extract its record
fn scan_file<E: Extractor>(path: &Path, base: &Path, extractor: &E) -> Result<FileRecord<E::Output>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::read(path, e.to_string()))?;
    let key = relative_key(path, base);
    let extraction = extractor.extract(&content);
    Ok(FileRecord::new(key, &content, extraction))
}

/// Path of `path` relative to `base`, joined with `/`
pub fn relative_key(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Display name of a root: its last path segment
fn root_label(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{BehaviorExtractor, BenchmarkExtractor, SymbolExtractor};
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Collects the fields of every WARN event
    #[derive(Clone, Default)]
    struct WarnRecorder {
        events: Arc<Mutex<Vec<String>>>,
    }

    struct FieldText(String);

    impl Visit for FieldText {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.0.push_str(&format!("{}={:?} ", field.name(), value));
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for WarnRecorder {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                let mut text = FieldText(String::new());
                event.record(&mut text);
                self.events.lock().unwrap().push(text.0);
            }
        }
    }

    fn ts_scanner() -> Scanner {
        Scanner::new(&["*.ts".to_string(), "*.tsx".to_string()]).unwrap()
    }

    fn create_source_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("components")).unwrap();

        fs::write(src.join("index.ts"), "export class App {}\n").unwrap();
        fs::write(
            src.join("components/button.tsx"),
            "export function Button(props) {}\ninterface ButtonProps {}\n",
        )
        .unwrap();
        fs::write(src.join("notes.md"), "class NotCode {}").unwrap();

        dir
    }

    #[test]
    fn test_scan_source_root() {
        let dir = create_source_tree();
        let outcome = ts_scanner()
            .scan(&dir.path().join("src"), &SymbolExtractor)
            .unwrap();

        let inventory = outcome.inventory;
        assert_eq!(inventory.root(), "src");
        assert_eq!(inventory.len(), 2);
        assert!(outcome.skipped.is_empty());

        let button = inventory.get("src/components/button.tsx").unwrap();
        assert!(button.extraction.functions.contains("Button"));
        assert!(button.extraction.interfaces.contains("ButtonProps"));
        assert_eq!(button.line_count, 2);

        let index = inventory.get("src/index.ts").unwrap();
        assert_eq!(index.byte_size, "export class App {}\n".len());
    }

    #[test]
    fn test_scan_ignores_non_matching_files() {
        let dir = create_source_tree();
        let outcome = ts_scanner()
            .scan(&dir.path().join("src"), &SymbolExtractor)
            .unwrap();
        assert!(outcome.inventory.get("src/notes.md").is_none());
    }

    #[test]
    fn test_scan_skips_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let tests = dir.path().join("tests");
        fs::create_dir_all(&tests).unwrap();
        fs::write(tests.join("a.test.ts"), "it(\"works\", () => {})").unwrap();
        fs::write(tests.join("b.test.ts"), "test(\"also works\", () => {})").unwrap();
        fs::write(tests.join("corrupt.test.ts"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let outcome = ts_scanner().scan(&tests, &BehaviorExtractor).unwrap();

        assert_eq!(outcome.inventory.len(), 2);
        assert_eq!(outcome.skipped.len(), 1);
        assert!(outcome.skipped[0].path.ends_with("corrupt.test.ts"));
        assert!(outcome.skipped[0].reason.contains("corrupt.test.ts"));
    }

    #[test]
    fn test_scan_missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let result = ts_scanner().scan(&dir.path().join("benches"), &BenchmarkExtractor);
        assert!(matches!(result, Err(Error::PathNotFound(_))));
    }

    #[test]
    fn test_scan_missing_root_allowed() {
        let dir = TempDir::new().unwrap();
        let outcome = ts_scanner()
            .with_allow_missing_root(true)
            .scan(&dir.path().join("benches"), &BenchmarkExtractor)
            .unwrap();
        assert!(outcome.inventory.is_empty());
        assert_eq!(outcome.inventory.root(), "benches");
    }

    #[test]
    fn test_scan_empty_root() {
        let dir = TempDir::new().unwrap();
        let benches = dir.path().join("benches");
        fs::create_dir_all(&benches).unwrap();

        let outcome = Scanner::new(&["*.ts".to_string()])
            .unwrap()
            .scan(&benches, &BenchmarkExtractor)
            .unwrap();
        assert!(outcome.inventory.is_empty());
    }

    #[test]
    fn test_matches() {
        let scanner = ts_scanner();
        assert!(scanner.matches(Path::new("src/a.ts")));
        assert!(scanner.matches(Path::new("src/a.tsx")));
        assert!(!scanner.matches(Path::new("src/a.js")));
        assert!(!scanner.matches(Path::new("src/ts")));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(Scanner::new(&["[".to_string()]).is_err());

        let root = RootConfig::new("src", &["*.ts", "[*.tsx"]);
        let result = Scanner::from_config(&root, &ScanConfig::default());
        assert!(matches!(result, Err(Error::GlobPattern(_))));
    }

    #[test]
    fn test_relative_key() {
        assert_eq!(
            relative_key(Path::new("/project/src/a/b.ts"), Path::new("/project")),
            "src/a/b.ts"
        );
        assert_eq!(relative_key(Path::new("src/x.ts"), Path::new("")), "src/x.ts");
    }

    #[test]
    fn test_root_label() {
        assert_eq!(root_label(Path::new("/project/benches")), "benches");
        assert_eq!(root_label(Path::new("tests")), "tests");
    }

    #[test]
    fn test_scan_skip_emits_warning() {
        let dir = TempDir::new().unwrap();
        let tests = dir.path().join("tests");
        fs::create_dir_all(&tests).unwrap();
        fs::write(tests.join("ok.test.ts"), "it(\"works\", () => {})").unwrap();
        fs::write(tests.join("corrupt.test.ts"), [0xff, 0xfe, 0x00]).unwrap();

        let recorder = WarnRecorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());
        let outcome = tracing::subscriber::with_default(subscriber, || {
            ts_scanner().scan(&tests, &BehaviorExtractor).unwrap()
        });

        assert_eq!(outcome.inventory.len(), 1);
        let events = recorder.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].contains("corrupt.test.ts"), "{}", events[0]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_lossy_name_collision_skips_one_file() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("good.ts"), "class Good {}").unwrap();
        fs::write(src.join(OsStr::from_bytes(b"a\xff.ts")), "class First {}").unwrap();
        fs::write(src.join(OsStr::from_bytes(b"a\xfe.ts")), "class Second {}").unwrap();

        let outcome = ts_scanner().scan(&src, &SymbolExtractor).unwrap();

        assert_eq!(outcome.inventory.len(), 2);
        assert!(outcome.inventory.get("src/good.ts").is_some());
        assert_eq!(outcome.skipped.len(), 1);
        assert!(outcome.skipped[0].reason.contains("Duplicate inventory path"));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_unreadable_root_is_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.ts"), "class A1 {}").unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o000)).unwrap();

        // privileged users can still list the directory
        let listable = fs::read_dir(&src).is_ok();
        let result = ts_scanner().scan(&src, &SymbolExtractor);
        fs::set_permissions(&src, fs::Permissions::from_mode(0o755)).unwrap();

        if listable {
            return;
        }
        assert!(matches!(result, Err(Error::WalkDir(_))));
    }
}
