use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "semv.toml";

/// The semv configuration file structure (semv.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SemvConfig {
    /// Output configuration
    pub output: OutputConfig,

    /// Version parsing configuration
    pub parse: ParseConfig,
}

/// How results are printed
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Version parsing configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Accept partial versions such as "1" or "1.2" where a version is expected
    pub loose: bool,
}

impl SemvConfig {
    /// Load configuration from semv.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                return Self::load_file(&config_path).map(Some);
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration from an explicit path
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: SemvConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }
}
