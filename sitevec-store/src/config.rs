//! Store configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};

/// Default directory for vector data, relative to the working directory
pub const DEFAULT_VECTOR_DIR: &str = "data/vectors";

/// Environment variable overriding the vector directory
pub const VECTOR_DIR_ENV: &str = "SITEVEC_VECTOR_DIR";

/// Configuration for the store and embedding engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Directory holding `<host>_embedding.bin` / `<host>_text.bin` pairs
    pub vector_dir: PathBuf,
    /// fastembed model cache directory (see `embedding::resolve_model_cache_dir`)
    pub model_cache_dir: Option<PathBuf>,
    /// Show a progress bar while the model downloads
    pub show_download_progress: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            vector_dir: PathBuf::from(DEFAULT_VECTOR_DIR),
            model_cache_dir: None,
            show_download_progress: false,
        }
    }
}

/// Fields a config file may set; absent ones leave the base untouched
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    vector_dir: Option<PathBuf>,
    model_cache_dir: Option<PathBuf>,
    show_download_progress: Option<bool>,
}

impl StoreConfig {
    /// Defaults with `SITEVEC_VECTOR_DIR` applied
    pub fn from_env() -> Self {
        Self::default().with_env_vector_dir(std::env::var(VECTOR_DIR_ENV).ok())
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::default().merge_file(path)
    }

    /// Apply the fields a JSON config file sets on top of `self`
    pub fn merge_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            StoreError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let file: ConfigFile = serde_json::from_str(&raw)?;

        if let Some(dir) = file.vector_dir {
            self.vector_dir = dir;
        }
        if let Some(dir) = file.model_cache_dir {
            self.model_cache_dir = Some(dir);
        }
        if let Some(show) = file.show_download_progress {
            self.show_download_progress = show;
        }

        log::debug!("Loaded config from {}", path.display());
        Ok(self)
    }

    fn with_env_vector_dir(mut self, value: Option<String>) -> Self {
        match value {
            Some(dir) if !dir.is_empty() => self.vector_dir = PathBuf::from(dir),
            Some(_) => log::warn!("{} is set but empty, ignoring", VECTOR_DIR_ENV),
            None => {}
        }
        self
    }

    pub fn with_vector_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.vector_dir = dir.into();
        self
    }

    pub fn with_model_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.model_cache_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.vector_dir, PathBuf::from("data/vectors"));
        assert!(config.model_cache_dir.is_none());
        assert!(!config.show_download_progress);
    }

    #[test]
    fn test_from_file_partial() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sitevec.json");
        std::fs::write(&path, r#"{ "vectorDir": "/srv/vectors" }"#).unwrap();

        let config = StoreConfig::from_file(&path).unwrap();
        assert_eq!(config.vector_dir, PathBuf::from("/srv/vectors"));
        assert!(config.model_cache_dir.is_none());
    }

    #[test]
    fn test_from_file_missing() {
        let err = StoreConfig::from_file("/nonexistent/sitevec.json").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn test_from_file_malformed() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            StoreConfig::from_file(&path),
            Err(StoreError::Json(_))
        ));
    }

    #[test]
    fn test_env_value_applied() {
        let config = StoreConfig::default().with_env_vector_dir(Some("/env/vectors".into()));
        assert_eq!(config.vector_dir, PathBuf::from("/env/vectors"));

        let config = StoreConfig::default().with_env_vector_dir(Some(String::new()));
        assert_eq!(config.vector_dir, PathBuf::from(DEFAULT_VECTOR_DIR));
    }

    #[test]
    fn test_partial_file_keeps_env_vector_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sitevec.json");
        std::fs::write(&path, r#"{ "modelCacheDir": "/cache/file" }"#).unwrap();

        let config = StoreConfig::default()
            .with_env_vector_dir(Some("/env/vectors".into()))
            .merge_file(&path)
            .unwrap();
        assert_eq!(config.vector_dir, PathBuf::from("/env/vectors"));
        assert_eq!(config.model_cache_dir, Some(PathBuf::from("/cache/file")));
    }

    #[test]
    fn test_file_overrides_env_vector_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sitevec.json");
        std::fs::write(&path, r#"{ "vectorDir": "/from/file" }"#).unwrap();

        let config = StoreConfig::default()
            .with_env_vector_dir(Some("/env/vectors".into()))
            .merge_file(&path)
            .unwrap();
        assert_eq!(config.vector_dir, PathBuf::from("/from/file"));
    }

    #[test]
    fn test_from_env_then_partial_file() {
        // Only test in this crate that touches SITEVEC_VECTOR_DIR
        std::env::set_var(VECTOR_DIR_ENV, "/env/real");
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sitevec.json");
        std::fs::write(&path, r#"{ "showDownloadProgress": true }"#).unwrap();

        let config = StoreConfig::from_env().merge_file(&path).unwrap();
        std::env::remove_var(VECTOR_DIR_ENV);

        assert_eq!(config.vector_dir, PathBuf::from("/env/real"));
        assert!(config.show_download_progress);
    }

    #[test]
    fn test_builders() {
        let config = StoreConfig::default()
            .with_vector_dir("/tmp/v")
            .with_model_cache_dir("/tmp/m");
        assert_eq!(config.vector_dir, PathBuf::from("/tmp/v"));
        assert_eq!(config.model_cache_dir, Some(PathBuf::from("/tmp/m")));
    }
}
