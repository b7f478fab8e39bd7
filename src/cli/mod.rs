//! CLI module for the inventory generator

mod args;

pub use args::{Args, Command};

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{Error, Result};
use crate::inventory::ProjectInventory;
use crate::output::ReportHeader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Generate {
            path,
            output,
            config,
            format,
            title,
            allow_missing_roots,
            verbose,
        } => {
            if !path.exists() {
                return Err(Error::PathNotFound(path));
            }

            let cfg = load_config(&path, config.as_deref(), output, format, title, allow_missing_roots)?;

            if verbose {
                println!("Project root: {}", path.display());
                println!("Sources: {} {:?}", cfg.sources.dir, cfg.sources.patterns);
                println!("Benchmarks: {} {:?}", cfg.benches.dir, cfg.benches.patterns);
                println!("Tests: {} {:?}", cfg.tests.dir, cfg.tests.patterns);
                println!("Output: {}", cfg.output_path(&path).display());
                println!("Format: {:?}", cfg.output.format);
            }

            println!("Generating {}...", cfg.title());
            let written = generate(&path, &cfg, &today(), verbose)?;

            println!("Inventory generated: {}", written.output_path.display());

            if !written.project.skipped.is_empty() {
                println!("\nSkipped files ({}):", written.project.skipped.len());
                for skipped in written.project.skipped.iter().take(5) {
                    println!("  {}: {}", skipped.path.display(), skipped.reason);
                }
                if written.project.skipped.len() > 5 {
                    println!("  ... and {} more", written.project.skipped.len() - 5);
                }
            }

            println!("\nSummary:");
            for line in written.project.summary().lines() {
                println!("  {}", line);
            }

            Ok(())
        }

        Command::Version => {
            println!("inventory {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// A generated report and where it was written
#[derive(Debug)]
pub struct Generated {
    pub project: ProjectInventory,
    pub output_path: PathBuf,
}

/// Scan the project, render the report and overwrite the output file
pub fn generate(project_root: &Path, cfg: &Config, generated_on: &str, verbose: bool) -> Result<Generated> {
    let project = ProjectInventory::build(project_root, cfg, verbose)?;

    let header = ReportHeader::new(cfg.title(), generated_on);
    let report = project.render(cfg.output.format, &header)?;

    let output_path = cfg.output_path(project_root);
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output_path, report)?;

    Ok(Generated {
        project,
        output_path,
    })
}

/// Explicit config files must load; the implicit one falls back to defaults
fn load_config(
    project_root: &Path,
    config_path: Option<&Path>,
    output: Option<PathBuf>,
    format: Option<String>,
    title: Option<String>,
    allow_missing_roots: bool,
) -> Result<Config> {
    let mut cfg = match config_path {
        Some(p) => Config::load(p)?,
        None => Config::load_or_default(&project_root.join(CONFIG_FILE_NAME)),
    };

    cfg.merge_cli(output, format, title, allow_missing_roots)?;
    cfg.validate()?;
    Ok(cfg)
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
