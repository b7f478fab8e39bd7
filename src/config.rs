use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the project root
pub const CONFIG_FILE_NAME: &str = "inventory.toml";

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    #[serde(default = "RootConfig::default_sources")]
    pub sources: RootConfig,
    #[serde(default = "RootConfig::default_benches")]
    pub benches: RootConfig,
    #[serde(default = "RootConfig::default_tests")]
    pub tests: RootConfig,
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
}

/// One scanned root: a directory under the project root and the file name
/// globs it is scanned for. Both keys are required when the table is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootConfig {
    pub dir: String,
    pub patterns: Vec<String>,
}

/// Directory walking behavior
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Treat a missing root as empty instead of failing the run
    pub allow_missing_roots: bool,
    pub follow_links: bool,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report path, relative to the project root unless absolute
    pub path: PathBuf,
    pub format: OutputFormat,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl OutputFormat {
    /// Parse a format name as given on the command line
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::config_validation(format!(
                "unknown output format: {}",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: ProjectConfig::default(),
            sources: RootConfig::default_sources(),
            benches: RootConfig::default_benches(),
            tests: RootConfig::default_tests(),
            scan: ScanConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "Project".to_string(),
        }
    }
}

impl RootConfig {
    pub fn new(dir: &str, patterns: &[&str]) -> Self {
        Self {
            dir: dir.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn default_sources() -> Self {
        Self::new("src", &["*.ts", "*.tsx"])
    }

    fn default_benches() -> Self {
        Self::new("benches", &["*.ts"])
    }

    fn default_tests() -> Self {
        Self::new("tests", &["*.ts", "*.tsx"])
    }

    /// Compile the file name patterns
    pub fn compiled_patterns(&self) -> Result<Vec<glob::Pattern>> {
        compile_patterns(&self.patterns)
    }

    fn validate(&self, section: &str) -> Result<()> {
        if self.dir.trim().is_empty() {
            return Err(Error::config_validation(format!(
                "{}.dir must not be empty",
                section
            )));
        }

        if self.patterns.is_empty() {
            return Err(Error::config_validation(format!(
                "{} needs at least one file pattern",
                section
            )));
        }

        self.compiled_patterns()?;
        Ok(())
    }
}

/// Compile file name globs, failing on the first invalid one
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<glob::Pattern>> {
    patterns
        .iter()
        .map(|p| glob::Pattern::new(p).map_err(Error::from))
        .collect()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("inventory.md"),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults. A missing file is silent,
    /// an unusable one is logged.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
            Self::default()
        })
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        output: Option<PathBuf>,
        format: Option<String>,
        title: Option<String>,
        allow_missing_roots: bool,
    ) -> Result<()> {
        if let Some(out) = output {
            self.output.path = out;
        }

        if let Some(fmt) = format {
            self.output.format = OutputFormat::parse(&fmt)?;
        }

        if let Some(name) = title {
            self.project.name = name;
        }

        if allow_missing_roots {
            self.scan.allow_missing_roots = true;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.sources.validate("sources")?;
        self.benches.validate("benches")?;
        self.tests.validate("tests")?;

        if self.output.path.as_os_str().is_empty() {
            return Err(Error::config_validation("output.path must not be empty"));
        }

        Ok(())
    }

    /// Report title
    pub fn title(&self) -> String {
        format!("{} Inventory", self.project.name)
    }

    /// Resolve the output path against the project root
    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        if self.output.path.is_absolute() {
            self.output.path.clone()
        } else {
            project_root.join(&self.output.path)
        }
    }
}
