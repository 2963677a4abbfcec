use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "FPA_FINDER_CONFIG";

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub report: ReportConfig,
}

/// Configuration for search behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Default number of search results to return
    pub default_limit: usize,
    /// Default number of similar records shown with `show --similar`
    pub similar_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            similar_limit: 5,
        }
    }
}

/// Configuration for report output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory reports are written to when `--output` names a bare
    /// filename. Empty means the current directory.
    pub output_dir: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load the user config if one exists, otherwise the defaults.
    ///
    /// `FPA_FINDER_CONFIG` overrides the platform config directory; a
    /// missing file is not an error.
    pub fn load_or_default() -> Result<Self> {
        let path = match std::env::var(CONFIG_ENV) {
            Ok(p) if !p.is_empty() => PathBuf::from(p),
            _ => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Platform config file location
    pub fn default_path() -> Option<PathBuf> {
        let project_dirs = directories::ProjectDirs::from("dev", "fpa-finder", "fpa-finder")?;
        Some(project_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let config = Config::default();
        assert_eq!(config.search.default_limit, 10);
        assert_eq!(config.search.similar_limit, 5);
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
[search]
default_limit = 20
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.default_limit, 20);
        // Unspecified fields keep their defaults.
        assert_eq!(config.search.similar_limit, 5);
    }

    #[test]
    fn parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.search.default_limit, 10);
        assert!(config.report.output_dir.is_empty());
    }

    #[test]
    fn serialize_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            search: SearchConfig {
                default_limit: 7,
                similar_limit: 3,
            },
            report: ReportConfig {
                output_dir: "/tmp/reports".into(),
            },
        };
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.search.default_limit, 7);
        assert_eq!(loaded.search.similar_limit, 3);
        assert_eq!(loaded.report.output_dir, "/tmp/reports");
    }

    #[test]
    fn load_missing_file_is_error() {
        assert!(Config::load(Path::new("/nonexistent/config.toml")).is_err());
    }
}
