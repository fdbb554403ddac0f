//! sitevec entry point

use anyhow::Context;
use clap::Parser;
use sitevec::{execute, Cli};
use sitevec_store::{VectorEngine, VectorStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitevec=info,sitevec_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.store_config().context("Failed to load configuration")?;
    tracing::debug!("Config: {:?}", config);

    // Model load is fatal; nothing runs without it
    let engine = VectorEngine::new(&config).context("Failed to load embedding model")?;
    let store = VectorStore::from_config(&config).context("Failed to open vector directory")?;

    let output = execute(cli.command, &engine, &store)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
