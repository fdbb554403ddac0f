//! Command-line arguments and subcommand execution

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use sitevec_store::{DomainKey, Result, StoreConfig, VectorEngine, VectorStore, DEFAULT_TOP_K};

#[derive(Debug, Parser)]
#[command(name = "sitevec")]
#[command(about = "Store and look up per-domain text embeddings")]
#[command(version)]
pub struct Cli {
    /// Directory holding the per-domain vector and text files
    #[arg(long, global = true)]
    pub vector_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Where the embedding model is cached
    #[arg(long, global = true)]
    pub model_cache: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the embedding of TEXT
    Embed { text: String },

    /// Embed TEXT and store it for DOMAIN, replacing what was there
    Save { domain: String, text: String },

    /// Embed QUERY and print the text stored for DOMAIN if it is similar
    Search {
        domain: String,
        query: String,

        /// Accepted for compatibility; at most one result is returned
        #[arg(long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },
}

/// What a subcommand prints, as JSON
#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Output {
    Embed {
        dimension: usize,
        embedding: Vec<f32>,
    },
    Save {
        domain: String,
        key: String,
        dimension: usize,
    },
    Search {
        domain: String,
        results: Vec<String>,
    },
}

impl Cli {
    /// Defaults, then environment, then config file, then command-line flags
    pub fn store_config(&self) -> Result<StoreConfig> {
        let mut config = StoreConfig::from_env();
        if let Some(path) = &self.config {
            config = config.merge_file(path)?;
        }

        if let Some(dir) = &self.vector_dir {
            config = config.with_vector_dir(dir);
        }
        if let Some(dir) = &self.model_cache {
            config = config.with_model_cache_dir(dir);
        }

        Ok(config)
    }
}

/// Run one subcommand against a loaded engine and opened store
pub fn execute(command: Command, engine: &VectorEngine, store: &VectorStore) -> Result<Output> {
    match command {
        Command::Embed { text } => {
            let embedding = engine.generate_embeddings(&text)?;
            Ok(Output::Embed {
                dimension: embedding.len(),
                embedding,
            })
        }
        Command::Save { domain, text } => {
            let key = DomainKey::from_domain(&domain)?;
            let embedding = engine.generate_embeddings(&text)?;
            store.save_embeddings(&domain, &embedding, &text)?;
            tracing::info!("Stored {} ({} chars)", key, text.chars().count());
            Ok(Output::Save {
                domain,
                key: key.to_string(),
                dimension: embedding.len(),
            })
        }
        Command::Search {
            domain,
            query,
            top_k,
        } => {
            let query_embedding = engine.generate_embeddings(&query)?;
            let results = store.search_embeddings(&domain, &query_embedding, top_k)?;
            tracing::info!("{} result(s) for {}", results.len(), domain);
            Ok(Output::Search { domain, results })
        }
    }
}
