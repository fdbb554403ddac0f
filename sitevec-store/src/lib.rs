//! sitevec Store
//!
//! Per-domain embedding storage with a cosine-similarity gate on lookup.
//!
//! ## Features
//!
//! - **Local sentence embeddings** - all-MiniLM-L6-v2 (384d) through fastembed
//! - **One record per domain** - a vector file and a text file keyed by host
//! - **Similarity gate** - lookups return the stored text only when the query
//!   points the same way (cosine similarity > 0)
//!
//! ## Example
//!
//! ```ignore
//! use sitevec_store::{StoreConfig, VectorEngine, VectorStore, DEFAULT_TOP_K};
//!
//! // Load the model once at startup
//! let config = StoreConfig::from_env();
//! let engine = VectorEngine::new(&config)?;
//! let store = VectorStore::from_config(&config)?;
//!
//! let text = "Rust is a systems programming language";
//! let embedding = engine.generate_embeddings(text)?;
//! store.save_embeddings("https://www.rust-lang.org/learn", &embedding, text)?;
//!
//! let query = engine.generate_embeddings("memory safe language")?;
//! let hits = store.search_embeddings("www.rust-lang.org", &query, DEFAULT_TOP_K)?;
//! ```

pub mod config;
pub mod embedding;
pub mod error;
pub mod key;
pub mod storage;

// Re-exports for convenience
pub use config::StoreConfig;
pub use embedding::{cosine_similarity, Embedder, MiniLmEmbedding, VectorEngine};
pub use error::{Result, StoreError};
pub use key::DomainKey;
pub use storage::{StoredRecord, VectorStore, DEFAULT_TOP_K};
