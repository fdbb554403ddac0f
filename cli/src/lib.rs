//! sitevec command-line front end
//!
//! Loads the embedding model once, opens the vector directory and runs a
//! single `embed`, `save` or `search` subcommand.

pub mod commands;

pub use commands::{execute, Cli, Command, Output};
