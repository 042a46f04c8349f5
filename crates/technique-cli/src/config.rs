use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Author recorded when the author prompt is left blank and nothing is configured.
pub const DEFAULT_AUTHOR: &str = "Nico";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TechniqueConfig {
    #[serde(default)]
    pub record: RecordSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordSection {
    #[serde(default = "default_author")]
    pub default_author: String,
}

impl Default for RecordSection {
    fn default() -> Self {
        Self {
            default_author: default_author(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub directory: Option<String>,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

/// Effective settings after merging flags, config file, and built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub author: String,
    /// Directory for the record file; empty means the working directory.
    pub output_dir: PathBuf,
}

impl Settings {
    pub fn from_sources(cli: &Cli, config: &TechniqueConfig) -> Self {
        let author = cli
            .author
            .clone()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| config.record.default_author.clone());
        let output_dir = cli
            .output_dir
            .clone()
            .or_else(|| config.output.directory.clone())
            .map(PathBuf::from)
            .unwrap_or_default();
        Self { author, output_dir }
    }
}

/// Resolve settings for this run.
///
/// Without an explicit config path and without a resolvable default location,
/// built-in defaults apply.
pub fn resolve_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let path = resolve_config_path(cli);
    let config = match &path {
        Some(path) => load_config(path)?,
        None => TechniqueConfig::default(),
    };
    let settings = Settings::from_sources(cli, &config);
    tracing::debug!(
        config = ?path,
        author = %settings.author,
        output_dir = %settings.output_dir.display(),
        "settings resolved"
    );
    Ok(settings)
}

/// Config file path: `--config`/`TECHNIQUE_CONFIG`, else the XDG location.
///
/// `None` when neither `XDG_CONFIG_HOME` nor `HOME` is set.
pub fn resolve_config_path(cli: &Cli) -> Option<PathBuf> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Some(PathBuf::from(value));
        }
    }
    match default_config_path() {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::debug!(error = %e, "no default config location");
            None
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Read the config file, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<TechniqueConfig> {
    if !path.exists() {
        return Ok(TechniqueConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<TechniqueConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("technique"));
        }
    }
    Ok(home_dir()?.join(".config").join("technique"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
