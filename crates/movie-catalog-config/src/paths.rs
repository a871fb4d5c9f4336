use anyhow::Result;
use std::path::{Path, PathBuf};

/// Overrides the platform config directory when set
pub const CONFIG_DIR_ENV: &str = "MOVIE_CATALOG_CONFIG_DIR";

pub struct PathManager {
    config_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("movie-catalog");

        Ok(Self::with_base(base_dir))
    }

    /// All paths rooted at `base`; config files at the top level, logs in a subdirectory
    pub fn with_base(base: PathBuf) -> Self {
        Self {
            log_dir: base.join("logs"),
            config_dir: base,
        }
    }

    pub fn from_env() -> Option<Self> {
        std::env::var(CONFIG_DIR_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .map(|v| Self::with_base(PathBuf::from(v)))
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn credentials_file(&self) -> PathBuf {
        self.config_dir.join("credentials.toml")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("movie-catalog.log")
    }

    /// Create the config and log directories
    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(from_env) = Self::from_env() {
            return from_env;
        }

        // Fall back to the working directory when the platform has no config dir
        Self::new().unwrap_or_else(|_| Self::with_base(PathBuf::from(".movie-catalog")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_base() {
        let paths = PathManager::with_base(PathBuf::from("/tmp/mc"));
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/mc/config.toml"));
        assert_eq!(paths.credentials_file(), PathBuf::from("/tmp/mc/credentials.toml"));
        assert_eq!(paths.log_file(), PathBuf::from("/tmp/mc/logs/movie-catalog.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathManager::with_base(dir.path().join("nested"));
        paths.ensure_directories().unwrap();
        assert!(paths.config_dir().is_dir());
        assert!(paths.log_file().parent().unwrap().is_dir());
    }
}
