use crate::domain::DEFAULT_OFFSET;
use crate::error::{Result, SetVersionError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "setversion.toml";

/// Represents the complete configuration for set-version.
///
/// Every field has a default, so an empty file (or no file at all) reproduces
/// the stock layout: `main.cpp`, `README.md` and `resource.rc` next to the
/// repository root, with an offset of 23.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_offset")]
    pub offset: u32,

    #[serde(default)]
    pub line_ending: LineEnding,

    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub documentation: DocumentationConfig,

    #[serde(default)]
    pub resource: ResourceConfig,
}

fn default_offset() -> u32 {
    DEFAULT_OFFSET
}

/// Line terminator written after every rewritten line.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` elsewhere
    #[default]
    Native,
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native if cfg!(windows) => "\r\n",
            LineEnding::Native | LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Where the commit history is read from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    #[serde(default = "default_repository_path")]
    pub path: PathBuf,
}

fn default_repository_path() -> PathBuf {
    PathBuf::from(".")
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            path: default_repository_path(),
        }
    }
}

/// The primary source file holding the `VERSION(...)` declaration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SourceConfig {
    #[serde(default = "default_source_path")]
    pub path: PathBuf,

    /// Literal token that opens the declaration's field list
    #[serde(default = "default_source_marker")]
    pub marker: String,
}

fn default_source_path() -> PathBuf {
    PathBuf::from("./main.cpp")
}

fn default_source_marker() -> String {
    "VERSION(".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            path: default_source_path(),
            marker: default_source_marker(),
        }
    }
}

/// The documentation file holding the version badge.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DocumentationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_documentation_path")]
    pub path: PathBuf,

    #[serde(default = "default_badge_marker")]
    pub marker: String,

    /// Literal that terminates the version segment of the badge URL
    #[serde(default = "default_badge_suffix")]
    pub suffix: String,
}

fn default_true() -> bool {
    true
}

fn default_documentation_path() -> PathBuf {
    PathBuf::from("./README.md")
}

fn default_badge_marker() -> String {
    "badge/version-".to_string()
}

fn default_badge_suffix() -> String {
    "-brightgreen".to_string()
}

impl Default for DocumentationConfig {
    fn default() -> Self {
        DocumentationConfig {
            enabled: true,
            path: default_documentation_path(),
            marker: default_badge_marker(),
            suffix: default_badge_suffix(),
        }
    }
}

/// The platform resource script holding the version-info block.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResourceConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_resource_path")]
    pub path: PathBuf,
}

fn default_resource_path() -> PathBuf {
    PathBuf::from("./resource.rc")
}

impl Default for ResourceConfig {
    fn default() -> Self {
        ResourceConfig {
            enabled: true,
            path: default_resource_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            offset: default_offset(),
            line_ending: LineEnding::default(),
            repository: RepositoryConfig::default(),
            source: SourceConfig::default(),
            documentation: DocumentationConfig::default(),
            resource: ResourceConfig::default(),
        }
    }
}

impl Config {
    /// Check values that deserialize fine but cannot work at run time.
    pub fn validate(&self) -> Result<()> {
        if self.source.marker.is_empty() {
            return Err(SetVersionError::config("source.marker must not be empty"));
        }
        if self.documentation.marker.is_empty() || self.documentation.suffix.is_empty() {
            return Err(SetVersionError::config(
                "documentation.marker and documentation.suffix must not be empty",
            ));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `setversion.toml` in current directory
/// 3. `~/.config/.setversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse and validate configuration text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| SetVersionError::config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
