use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;

/// Name of the configuration file looked up from the working directory
pub const CONFIG_FILE: &str = "pox-version.toml";

/// The pox-version configuration file structure (pox-version.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// Output settings
    pub output: OutputConfig,

    /// Settings for the sort command
    pub sort: SortConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for all commands
    pub format: OutputFormat,

    /// Colorize text output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Drop versions that cannot be sorted instead of failing
    pub skip_invalid: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self { skip_invalid: true }
    }
}

impl VersionConfig {
    /// Load configuration from pox-version.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                log::debug!("Reading {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: VersionConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                return Ok(Some(config));
            }

            // Move to parent directory
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config() {
        let config: VersionConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
        assert!(config.sort.skip_invalid);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[output]
format = "json"
color = false

[sort]
skip_invalid = false
"#;
        let config: VersionConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
        assert!(!config.sort.skip_invalid);
    }

    #[test]
    fn test_parse_invalid_format() {
        let result: std::result::Result<VersionConfig, _> = toml::from_str("[output]\nformat = \"yaml\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_searches_upward() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[output]\nformat = \"json\"\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = VersionConfig::load(&nested).unwrap().unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[output\n").unwrap();

        assert!(VersionConfig::load(dir.path()).is_err());
    }
}
