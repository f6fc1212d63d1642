use markdown_toc_engine::{RenderOptions, RewriterOptions, SlugStyle};
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

    #[error("Invalid config file at {config_path}: {message}")]
    ConfigInvalidError {
        config_path: PathBuf,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugStyleSetting {
    #[default]
    Ascii,
    Unicode,
}

impl From<SlugStyleSetting> for SlugStyle {
    fn from(setting: SlugStyleSetting) -> Self {
        match setting {
            SlugStyleSetting::Ascii => SlugStyle::Ascii,
            SlugStyleSetting::Unicode => SlugStyle::Unicode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Written once per nesting level before each list item.
    pub indent: String,
    pub slug_style: SlugStyleSetting,
    /// Documents with more ToC headings than this are rejected. Must be at
    /// least 1.
    pub max_nesting: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            slug_style: SlugStyleSetting::default(),
            max_nesting: RewriterOptions::DEFAULT_MAX_NESTING,
        }
    }
}

impl Config {
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

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if config.max_nesting == 0 {
            return Err(ConfigError::ConfigInvalidError {
                config_path: config_path.to_path_buf(),
                message: "max_nesting must be at least 1".to_string(),
            });
        }

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
        let config_dir = shellexpand::tilde("~/.config/markdown-toc");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expand `~` and environment variables in a user supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    pub fn rewriter_options(&self) -> RewriterOptions {
        RewriterOptions {
            render: RenderOptions {
                indent: self.indent.clone(),
                slug_style: self.slug_style.into(),
            },
            max_nesting: self.max_nesting,
        }
    }
}
