use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User settings for `verse-export`, stored as TOML.
///
/// Every key is optional in the file; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exports are written to when no output path is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_heading_base_size")]
    pub heading_base_size: u32,
    #[serde(default = "default_excluded_tag")]
    pub excluded_tag: String,
    /// Hex colour of note text. An empty string leaves notes uncoloured.
    #[serde(default = "default_notes_color")]
    pub notes_color: String,
    #[serde(default = "default_separator")]
    pub default_separator: String,
}

fn default_heading_base_size() -> u32 {
    14
}

fn default_excluded_tag() -> String {
    "div".to_string()
}

fn default_notes_color() -> String {
    "2779AA".to_string()
}

fn default_separator() -> String {
    ":".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            heading_base_size: default_heading_base_size(),
            excluded_tag: default_excluded_tag(),
            notes_color: default_notes_color(),
            default_separator: default_separator(),
        }
    }
}

impl ExportConfig {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: ExportConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the output directory
        config.output_dir = config
            .output_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/verse-export");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Notes colour, or `None` when it is configured empty.
    pub fn notes_color(&self) -> Option<&str> {
        let color = self.notes_color.trim();
        (!color.is_empty()).then_some(color)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
