//! Vector embedding engine
//!
//! Holds the process-wide model, loaded once at startup and shared read-only.

use super::discovery::resolve_model_cache_dir;
use super::minilm::MiniLmEmbedding;
use super::Embedder;
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use std::sync::Arc;

/// Vector embedding engine
///
/// Cheap to clone; clones share the same loaded model.
#[derive(Clone)]
pub struct VectorEngine {
    model: Arc<dyn Embedder>,
    dimension: usize,
}

impl VectorEngine {
    /// Create VectorEngine with all-MiniLM-L6-v2
    ///
    /// Downloads the model into the resolved cache directory if needed.
    /// Failure here is meant to be fatal for the caller.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let cache_dir = resolve_model_cache_dir(config.model_cache_dir.as_deref());
        let model = MiniLmEmbedding::from_cache_dir(&cache_dir, config.show_download_progress)?;
        Ok(Self::with_embedder(Arc::new(model)))
    }

    /// Create VectorEngine around an already loaded model
    pub fn with_embedder(model: Arc<dyn Embedder>) -> Self {
        let dimension = model.dimension();

        log::info!("VectorEngine ready ({}, {}d)", model.model_name(), dimension);

        Self { model, dimension }
    }

    /// Encode text into a fixed-dimension vector
    pub fn generate_embeddings(&self, text: &str) -> Result<Vec<f32>> {
        let embedding = self.model.embed(text)?;

        if embedding.len() != self.dimension {
            return Err(StoreError::embedding(format!(
                "Model returned {} values, expected {}",
                embedding.len(),
                self.dimension
            )));
        }

        Ok(embedding)
    }

    /// Cosine similarity between two embeddings
    pub fn similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        cosine_similarity(a, b)
    }

    /// Get embedding dimension
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }
}

/// Cosine similarity between two vectors
///
/// Returns 0.0 when the lengths differ or either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
