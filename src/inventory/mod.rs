// Inventory module: per-file records and the per-root collections built from them

mod project;
mod scanner;

pub use project::ProjectInventory;
pub use scanner::*;

use crate::error::{Error, Result};
use crate::extract::{BenchmarkLabels, SymbolSet, TestBehaviors};
use serde::Serialize;
use std::collections::HashMap;

/// What was learned about one scanned file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord<T> {
    /// Path relative to the parent of the scan root, `/`-separated
    pub path: String,
    pub extraction: T,
    pub line_count: usize,
    pub byte_size: usize,
}

impl<T> FileRecord<T> {
    /// Build a record from the file's decoded content
    pub fn new(path: impl Into<String>, content: &str, extraction: T) -> Self {
        Self {
            path: path.into(),
            extraction,
            line_count: content.lines().count(),
            byte_size: content.len(),
        }
    }
}

/// All records of one scan root, keyed by path.
///
/// Map order carries no meaning; use [`Inventory::sorted`] for output.
#[derive(Debug, Clone)]
pub struct Inventory<T> {
    root: String,
    records: HashMap<String, FileRecord<T>>,
}

pub type SourceInventory = Inventory<SymbolSet>;
pub type BenchmarkInventory = Inventory<BenchmarkLabels>;
pub type TestInventory = Inventory<TestBehaviors>;

impl<T> Inventory<T> {
    /// An inventory with no files
    pub fn empty(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            records: HashMap::new(),
        }
    }

    /// Collect records into an inventory, rejecting repeated path keys
    pub fn aggregate(
        root: impl Into<String>,
        records: impl IntoIterator<Item = FileRecord<T>>,
    ) -> Result<Self> {
        let mut inventory = Self::empty(root);
        for record in records {
            inventory.insert(record)?;
        }
        Ok(inventory)
    }

    fn insert(&mut self, record: FileRecord<T>) -> Result<()> {
        if self.records.contains_key(&record.path) {
            return Err(Error::DuplicatePath(record.path));
        }
        self.records.insert(record.path.clone(), record);
        Ok(())
    }

    /// Name of the scanned root directory, e.g. `src`
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&FileRecord<T>> {
        self.records.get(path)
    }

    /// Records in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &FileRecord<T>> {
        self.records.values()
    }

    /// Records sorted lexicographically by path
    pub fn sorted(&self) -> Vec<&FileRecord<T>> {
        let mut records: Vec<&FileRecord<T>> = self.records.values().collect();
        records.sort_by(|a, b| a.path.cmp(&b.path));
        records
    }
}
