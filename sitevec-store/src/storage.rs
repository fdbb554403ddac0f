//! Flat-file storage, one vector and one text per domain
//!
//! Each domain key owns two files in the vector directory:
//! `<host>_embedding.bin` (bincode `Vec<f32>`) and `<host>_text.bin`
//! (bincode `String`). Files are replaced via temp file + rename. The pair
//! is guarded by an in-process lock; across processes a reader can still
//! see a new vector next to old text.

use bincode::Options;
use parking_lot::RwLock;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::config::StoreConfig;
use crate::embedding::cosine_similarity;
use crate::error::{Result, StoreError};
use crate::key::DomainKey;

/// Result count callers pass when they have no preference
pub const DEFAULT_TOP_K: usize = 1;

/// Fixed-width little-endian encoding; anything after the value is corruption
fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

/// The vector and text currently stored for a domain
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub key: DomainKey,
    pub embedding: Vec<f32>,
    pub text: String,
}

/// Directory-backed embedding store
pub struct VectorStore {
    dir: PathBuf,
    pair_lock: RwLock<()>,
}

impl VectorStore {
    /// Open a store at the given directory, creating it if absent
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        log::info!("VectorStore opened at: {}", dir.display());

        Ok(Self {
            dir: dir.to_path_buf(),
            pair_lock: RwLock::new(()),
        })
    }

    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::new(&config.vector_dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store `embedding` and `text` under the key derived from `domain`.
    ///
    /// Silently replaces whatever was stored for that key before.
    pub fn save_embeddings(&self, domain: &str, embedding: &[f32], text: &str) -> Result<()> {
        let key = DomainKey::from_domain(domain)?;
        let vector_bytes = codec().serialize(embedding)?;
        let text_bytes = codec().serialize(text)?;

        let _guard = self.pair_lock.write();
        self.replace_file(&key.embedding_file(), &vector_bytes)?;
        self.replace_file(&key.text_file(), &text_bytes)?;

        log::debug!(
            "Saved {}d embedding and {} bytes of text for {}",
            embedding.len(),
            text.len(),
            key
        );
        Ok(())
    }

    /// Load the stored pair for `domain`.
    ///
    /// `Ok(None)` when either file is missing; corrupted files are errors.
    pub fn load_record(&self, domain: &str) -> Result<Option<StoredRecord>> {
        let key = DomainKey::from_domain(domain)?;

        let _guard = self.pair_lock.read();
        let Some(vector_bytes) = self.read_file(&key.embedding_file())? else {
            return Ok(None);
        };
        let Some(text_bytes) = self.read_file(&key.text_file())? else {
            return Ok(None);
        };

        let embedding: Vec<f32> = codec().deserialize(&vector_bytes)?;
        let text: String = codec().deserialize(&text_bytes)?;

        Ok(Some(StoredRecord {
            key,
            embedding,
            text,
        }))
    }

    /// Return the stored text for `domain` if it is similar to `query_embedding`.
    ///
    /// Yields `[text]` when cosine similarity is strictly positive and `[]`
    /// otherwise, including when nothing is stored. Only one vector exists per
    /// domain, so `top_k` never changes the outcome.
    pub fn search_embeddings(
        &self,
        domain: &str,
        query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<String>> {
        let Some(record) = self.load_record(domain)? else {
            log::debug!("No stored embedding for {}", domain);
            return Ok(Vec::new());
        };

        if record.embedding.len() != query_embedding.len() {
            return Err(StoreError::DimensionMismatch {
                stored: record.embedding.len(),
                query: query_embedding.len(),
            });
        }

        let similarity = cosine_similarity(query_embedding, &record.embedding);
        log::debug!(
            "Similarity {:.4} for {} (top_k={})",
            similarity,
            record.key,
            top_k
        );

        if similarity > 0.0 {
            Ok(vec![record.text])
        } else {
            Ok(Vec::new())
        }
    }

    /// Write `bytes` to a temp file in the store directory, then rename over `name`
    fn replace_file(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.dir.join(name)).map_err(|e| e.error)?;
        Ok(())
    }

    fn read_file(&self, name: &str) -> Result<Option<Vec<u8>>> {
        match std::fs::read(self.dir.join(name)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, VectorStore) {
        let dir = TempDir::new().unwrap();
        let store = VectorStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("vectors");
        let store = VectorStore::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.dir(), nested.as_path());
    }

    #[test]
    fn test_file_layout() {
        let (dir, store) = store();
        store
            .save_embeddings("https://a.com/x", &[1.0, 2.0], "hello")
            .unwrap();

        assert!(dir.path().join("a.com_embedding.bin").is_file());
        assert!(dir.path().join("a.com_text.bin").is_file());

        // No temp files left behind
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 2);
    }

    #[test]
    fn test_load_record() {
        let (_dir, store) = store();
        store.save_embeddings("a.com", &[0.5, -0.5], "text").unwrap();

        let record = store.load_record("http://a.com/other").unwrap().unwrap();
        assert_eq!(record.key.as_str(), "a.com");
        assert_eq!(record.embedding, vec![0.5, -0.5]);
        assert_eq!(record.text, "text");
    }

    #[test]
    fn test_load_record_missing() {
        let (_dir, store) = store();
        assert!(store.load_record("nothing.here").unwrap().is_none());
    }

    #[test]
    fn test_search_orthogonal_query_is_empty() {
        let (_dir, store) = store();
        store.save_embeddings("a.com", &[1.0, 0.0], "text").unwrap();

        let results = store
            .search_embeddings("a.com", &[0.0, 1.0], DEFAULT_TOP_K)
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_top_k_does_not_change_result() {
        let (_dir, store) = store();
        store.save_embeddings("a.com", &[1.0, 1.0], "text").unwrap();

        for top_k in [0, 1, 5] {
            let results = store.search_embeddings("a.com", &[1.0, 1.0], top_k).unwrap();
            assert_eq!(results, vec!["text".to_string()]);
        }
    }

    #[test]
    fn test_invalid_domain() {
        let (_dir, store) = store();
        assert!(matches!(
            store.save_embeddings("https://", &[1.0], "x"),
            Err(StoreError::InvalidDomain(_))
        ));
        assert!(matches!(
            store.search_embeddings("", &[1.0], DEFAULT_TOP_K),
            Err(StoreError::InvalidDomain(_))
        ));
    }
}
