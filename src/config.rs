//! Viewer configuration loaded from `board-filter.toml`.
//!
//! ```toml
//! [filters]
//! default_query = "&priority=High"
//!
//! [output]
//! format = "text"
//! ```
//!
//! Lookup order: an explicit path, then `./board-filter.toml`, then the
//! user config directory (`<config_dir>/board-filter/config.toml`). With no
//! file, defaults apply. Command-line flags override file values.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::BoardError;

pub const CONFIG_FILE_NAME: &str = "board-filter.toml";

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format '{}'. Valid values: text, json", s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiltersConfig {
    /// Query applied when a command is given none.
    #[serde(default)]
    pub default_query: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub filters: FiltersConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self, BoardError> {
        let content = std::fs::read_to_string(path).map_err(|source| BoardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| BoardError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load the first config found, or defaults.
    ///
    /// An explicit path must exist; the implicit locations are optional.
    pub fn discover(explicit: Option<&Path>, working_dir: &Path) -> Result<Self, BoardError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::candidate_paths(working_dir)
            .into_iter()
            .find(|p| p.is_file())
        {
            Some(path) => {
                debug!(path = %path.display(), "using config file");
                Self::load(&path)
            }
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn candidate_paths(working_dir: &Path) -> Vec<PathBuf> {
        let mut paths = vec![working_dir.join(CONFIG_FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("board-filter").join("config.toml"));
        }
        paths
    }

    /// The query to use when none was given on the command line.
    pub fn effective_query<'a>(&'a self, cli_query: Option<&'a str>) -> &'a str {
        cli_query
            .or(self.filters.default_query.as_deref())
            .unwrap_or("")
    }

    pub fn effective_format(&self, cli_format: Option<OutputFormat>) -> OutputFormat {
        cli_format.unwrap_or(self.output.format)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = ViewerConfig::parse(
            r#"
[filters]
default_query = "&priority=High"

[output]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.filters.default_query.as_deref(), Some("&priority=High"));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = ViewerConfig::parse("").unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(ViewerConfig::parse("[output]\nformat = \"xml\"").is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("Valid values"));
    }

    #[test]
    fn test_cli_values_override_file() {
        let config = ViewerConfig {
            filters: FiltersConfig {
                default_query: Some("&project=TDP".into()),
            },
            output: OutputConfig {
                format: OutputFormat::Json,
            },
        };
        assert_eq!(config.effective_query(None), "&project=TDP");
        assert_eq!(config.effective_query(Some("&project=TBG")), "&project=TBG");
        assert_eq!(config.effective_format(None), OutputFormat::Json);
        assert_eq!(
            config.effective_format(Some(OutputFormat::Text)),
            OutputFormat::Text
        );
        assert_eq!(ViewerConfig::default().effective_query(None), "");
    }

    #[test]
    fn test_discover_prefers_working_dir_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[filters]\ndefault_query = \"&component=UI\"\n",
        )
        .unwrap();
        let config = ViewerConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.filters.default_query.as_deref(), Some("&component=UI"));
    }

    #[test]
    fn test_discover_missing_explicit_path_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = ViewerConfig::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, BoardError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "filters = 3").unwrap();
        let err = ViewerConfig::load(&path).unwrap_err();
        assert!(matches!(err, BoardError::ConfigParse { .. }));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let config = ViewerConfig {
            filters: FiltersConfig {
                default_query: Some("&assignee=kabir".into()),
            },
            output: OutputConfig::default(),
        };
        let rendered = config.to_toml().unwrap();
        assert_eq!(ViewerConfig::parse(&rendered).unwrap(), config);
    }
}
