//! Domain key derivation
//!
//! A domain key is the host segment of a URL or bare domain string. It is
//! the filename stem for the two files that back a domain.

use std::fmt;

use crate::error::{Result, StoreError};

const EMBEDDING_SUFFIX: &str = "_embedding.bin";
const TEXT_SUFFIX: &str = "_text.bin";

/// Host-only storage key for a domain
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainKey(String);

impl DomainKey {
    /// Derive the key from a domain or URL string.
    ///
    /// Splits on `//` from the left, keeps the final piece up to its first
    /// `/`, so
    /// `https://a.com/x`, `http://a.com/y` and `a.com` all map to `a.com`.
    pub fn from_domain(domain: &str) -> Result<Self> {
        let after_scheme = domain.split("//").last().unwrap_or(domain);
        let host = after_scheme.split('/').next().unwrap_or(after_scheme);

        if host.is_empty() {
            return Err(StoreError::invalid_domain(domain));
        }

        Ok(Self(host.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the vector file, e.g. `a.com_embedding.bin`
    pub fn embedding_file(&self) -> String {
        format!("{}{}", self.0, EMBEDDING_SUFFIX)
    }

    /// File name of the text file, e.g. `a.com_text.bin`
    pub fn text_file(&self) -> String {
        format!("{}{}", self.0, TEXT_SUFFIX)
    }
}

impl fmt::Display for DomainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
