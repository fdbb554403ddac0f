//! Embedding module
//!
//! Uses all-MiniLM-L6-v2 through fastembed for 384d sentence embeddings.

mod discovery;
mod engine;
mod minilm;

pub use discovery::{resolve_model_cache_dir, MODEL_CACHE_ENV};
pub use engine::{cosine_similarity, VectorEngine};
pub use minilm::{MiniLmEmbedding, MINILM_DIMENSION, MINILM_MODEL_NAME};

use crate::error::Result;

/// A loaded text-to-vector model
pub trait Embedder: Send + Sync {
    /// Encode one text into a vector. Empty input is passed to the model as-is.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Length of every vector this model returns
    fn dimension(&self) -> usize;

    fn model_name(&self) -> &str;
}
