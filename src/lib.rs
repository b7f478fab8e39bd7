//! Inventory - Generate a symbol, benchmark and test inventory from a codebase
//!
//! Walks a project's source, benchmark and test directories, extracts
//! declared symbols, benchmark labels and test behaviors with lexical
//! patterns, and renders the result as one Markdown (or JSON) report.
//! Nothing is compiled or type-checked.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod inventory;
pub mod output;

// Re-export main types
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use extract::{
    classify, extract_behaviors, extract_benchmarks, BenchmarkLabels, Extractor, SymbolSet,
    TestBehaviors,
};
pub use inventory::{
    FileRecord, Inventory, ProjectInventory, ScanOutcome, Scanner, SkippedFile,
};
pub use output::{render, render_json, ReportHeader, Summary};
