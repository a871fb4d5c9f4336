use crate::paths::PathManager;
use movie_catalog_models::ImageSize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub images: ImageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote catalog endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(default = "default_image_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub default_size: ImageSize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Force JSON output; otherwise JSON is used only when stdout is not a terminal
    #[serde(default)]
    pub json: bool,
    /// Write to the rolling log file in the config directory
    #[serde(default)]
    pub to_file: bool,
    /// Explicit log file; implies file logging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            language: default_language(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: default_image_base_url(),
            default_size: ImageSize::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            to_file: false,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Log file to write to, if any: `file` when set, the default log file when `to_file` is on
    pub fn log_file(&self, paths: &PathManager) -> Option<PathBuf> {
        match (&self.file, self.to_file) {
            (Some(file), _) => Some(file.clone()),
            (None, true) => Some(paths.log_file()),
            (None, false) => None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file when it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.catalog.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("catalog.base_url cannot be empty"));
        }
        if !self.catalog.base_url.starts_with("http://") && !self.catalog.base_url.starts_with("https://") {
            return Err(anyhow::anyhow!("catalog.base_url must be an http(s) URL: {}", self.catalog.base_url));
        }
        if self.catalog.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("catalog.request_timeout_secs must be greater than zero"));
        }
        if self.catalog.language.trim().is_empty() {
            return Err(anyhow::anyhow!("catalog.language cannot be empty"));
        }
        if self.images.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("images.base_url cannot be empty"));
        }
        if !self.images.base_url.starts_with("http://") && !self.images.base_url.starts_with("https://") {
            return Err(anyhow::anyhow!("images.base_url must be an http(s) URL: {}", self.images.base_url));
        }
        // Size tokens are appended directly, e.g. <base>w500/poster.jpg
        if !self.images.base_url.ends_with('/') {
            return Err(anyhow::anyhow!("images.base_url must end with '/': {}", self.images.base_url));
        }
        Ok(())
    }
}
