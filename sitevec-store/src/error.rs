//! Error types for sitevec-store

use thiserror::Error;

/// Errors that can occur in the embedding store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Serialization error (bincode), usually a corrupted stored file
    #[error("Serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    /// JSON error while reading configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Model loading error
    #[error("Model error: {0}")]
    Model(String),

    /// Embedding generation error
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Domain string normalizes to an empty key
    #[error("Invalid domain: {0:?}")]
    InvalidDomain(String),

    /// Query and stored vectors have different lengths
    #[error("Dimension mismatch: stored vector has {stored} dimensions, query has {query}")]
    DimensionMismatch { stored: usize, query: usize },

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Create a model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create an embedding error
    pub fn embedding(msg: impl Into<String>) -> Self {
        Self::Embedding(msg.into())
    }

    /// Create an invalid domain error
    pub fn invalid_domain(domain: impl Into<String>) -> Self {
        Self::InvalidDomain(domain.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
