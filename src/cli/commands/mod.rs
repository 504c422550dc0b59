//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod classify;
mod delete;
mod helpers;
mod list;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings, LoadOptions};

#[derive(Parser)]
#[command(name = "medialib")]
#[command(about = "Media library frontend for a stored-URL collection")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend collection URL (overrides config file)
    #[arg(short, long, global = true, env = "MEDIALIB_BACKEND_URL")]
    backend: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web interface
    Serve {
        /// Address to bind: port, host, or host:port (default from config)
        #[arg(long)]
        bind: Option<String>,
    },

    /// List stored media with their content types
    List {
        /// Only show records whose title contains this text
        #[arg(short, long)]
        query: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a stored media record
    Delete {
        /// Record identifier
        id: String,
    },

    /// Show how URLs would be rendered
    Classify {
        /// URLs (or bare YouTube IDs) to classify
        #[arg(required = true)]
        urls: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        backend_url: cli.backend,
    };

    match cli.command {
        Commands::Serve { bind } => {
            let (settings, _) = load_settings(&options).await?;
            serve::cmd_serve(&settings, bind.as_deref().unwrap_or(&settings.bind)).await
        }
        Commands::List { query, json } => {
            let (settings, _) = load_settings(&options).await?;
            list::cmd_list(&settings, query.as_deref().unwrap_or(""), json).await
        }
        Commands::Delete { id } => {
            let (settings, _) = load_settings(&options).await?;
            delete::cmd_delete(&settings, &id).await
        }
        // Classification needs no backend or config
        Commands::Classify { urls, json } => classify::cmd_classify(&urls, json),
    }
}
