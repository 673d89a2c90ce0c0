use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Defaults
// =============================================================================

/// Version regex capturing the whole release name
pub const DEFAULT_VERSION_REGEX: &str = "(.*)";

/// Base URL release feeds are fetched from
pub const DEFAULT_GITHUB_URL: &str = "https://github.com";

/// Host of source URLs served by the GitHub source
pub const DEFAULT_GITHUB_HOST: &str = "github.com";

/// Timeout for a whole resolution in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Configuration file structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Regex with one capture group extracting the version from a release name
    pub version_regex: String,
    /// Accept pre-release versions
    pub unstable_version: bool,
    /// Resolution timeout in milliseconds
    pub fetch_timeout: u64,
    pub sources: SourcesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version_regex: DEFAULT_VERSION_REGEX.to_string(),
            unstable_version: false,
            fetch_timeout: FETCH_TIMEOUT_MS,
            sources: SourcesConfig::default(),
        }
    }
}

/// Version source configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SourcesConfig {
    pub github: GitHubConfig,
}

/// GitHub release feed configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GitHubConfig {
    pub enabled: bool,
    pub base_url: String,
    pub host: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_GITHUB_URL.to_string(),
            host: DEFAULT_GITHUB_HOST.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Config {
    /// Loads the configuration at `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the config directory for upstream-version.
/// Uses $XDG_CONFIG_HOME/upstream-version if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/upstream-version,
/// or ./upstream-version if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("upstream-version")
}
