//! Model cache discovery
//!
//! Decides where fastembed keeps the downloaded all-MiniLM-L6-v2 files.

use std::path::{Path, PathBuf};

/// Environment variable overriding the model cache location
pub const MODEL_CACHE_ENV: &str = "SITEVEC_MODEL_CACHE";

/// fastembed's own default, used when no home directory is known
const FALLBACK_CACHE_DIR: &str = ".fastembed_cache";

/// Resolve the model cache directory with priority:
/// 1. SITEVEC_MODEL_CACHE environment variable
/// 2. Configured `model_cache_dir`
/// 3. User home directory (~/.sitevec/models)
/// 4. `.fastembed_cache` in the working directory
pub fn resolve_model_cache_dir(configured: Option<&Path>) -> PathBuf {
    resolve_with(
        std::env::var(MODEL_CACHE_ENV).ok(),
        configured,
        home_model_dir(),
    )
}

fn resolve_with(
    env_value: Option<String>,
    configured: Option<&Path>,
    home_dir: Option<PathBuf>,
) -> PathBuf {
    // Priority 1: explicit environment override
    if let Some(cache) = env_value {
        if !cache.is_empty() {
            log::info!("Using {}: {}", MODEL_CACHE_ENV, cache);
            return PathBuf::from(cache);
        }
        log::warn!("{} is set but empty, ignoring", MODEL_CACHE_ENV);
    }

    // Priority 2: configuration
    if let Some(path) = configured {
        log::info!("Using configured model cache: {}", path.display());
        return path.to_path_buf();
    }

    // Priority 3: user home directory
    if let Some(path) = home_dir {
        log::info!("Using user model cache: {}", path.display());
        return path;
    }

    log::warn!(
        "No home directory found, caching model in {}",
        FALLBACK_CACHE_DIR
    );
    PathBuf::from(FALLBACK_CACHE_DIR)
}

/// `~/.sitevec/models`, if a home directory is known
fn home_model_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(".sitevec").join("models"))
}
