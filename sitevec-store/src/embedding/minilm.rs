//! all-MiniLM-L6-v2 sentence embeddings
//!
//! ONNX model served through fastembed, 384 dimensions, mean pooled and
//! normalized.

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::path::Path;

use super::Embedder;
use crate::error::{Result, StoreError};

/// Model identifier as published on HuggingFace
pub const MINILM_MODEL_NAME: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Output dimension of all-MiniLM-L6-v2
pub const MINILM_DIMENSION: usize = 384;

/// fastembed wrapper for all-MiniLM-L6-v2
pub struct MiniLmEmbedding {
    model: TextEmbedding,
    dimension: usize,
}

impl MiniLmEmbedding {
    /// Load the model, downloading it into `cache_dir` on first use
    pub fn from_cache_dir(cache_dir: &Path, show_download_progress: bool) -> Result<Self> {
        log::info!(
            "Loading {} (cache: {})",
            MINILM_MODEL_NAME,
            cache_dir.display()
        );

        let options = InitOptions::new(EmbeddingModel::AllMiniLML6V2)
            .with_cache_dir(cache_dir.to_path_buf())
            .with_show_download_progress(show_download_progress);

        let model = TextEmbedding::try_new(options).map_err(|e| {
            StoreError::model(format!("Failed to load {}: {}", MINILM_MODEL_NAME, e))
        })?;

        // Get dimension by encoding test string
        let probe = model
            .embed(vec!["test"], None)
            .map_err(|e| StoreError::model(format!("Failed to encode test string: {}", e)))?;
        let dimension = probe
            .first()
            .map(Vec::len)
            .ok_or_else(|| StoreError::model("Model returned no vector for the test string"))?;

        if dimension != MINILM_DIMENSION {
            log::warn!(
                "{} produced {}d vectors, expected {}d",
                MINILM_MODEL_NAME,
                dimension,
                MINILM_DIMENSION
            );
        }

        log::info!("Loaded {} ({}d)", MINILM_MODEL_NAME, dimension);

        Ok(Self { model, dimension })
    }
}

impl Embedder for MiniLmEmbedding {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut embeddings = self
            .model
            .embed(vec![text], None)
            .map_err(|e| StoreError::embedding(format!("Failed to encode text: {}", e)))?;

        if embeddings.is_empty() {
            return Err(StoreError::embedding("Model returned no vector"));
        }
        Ok(embeddings.swap_remove(0))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        MINILM_MODEL_NAME
    }
}
