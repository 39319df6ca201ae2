//! Snips CLI - store and retrieve snippets of text

use std::fs::OpenOptions;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use snips::storage::SnippetStore;
use snips::{Snippet, config, output};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "snips")]
#[command(version)]
#[command(about = "Store and retrieve snippets of text")]
#[command(long_about = r#"
Snips keeps short named text snippets in one SQLite table.

Example usage:
  snips put greeting "hello world"
  snips get greeting
  snips catalog
  snips search "greet%"

The database is snippets.db in the working directory (override via
snips.toml); the snippets table itself is created by an external setup step.
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a snippet, updating in place if the name is already taken
    Put {
        /// The name of the snippet
        name: String,

        /// The snippet text
        snippet: String,

        /// Hide this snippet from the catalog listing
        #[arg(long)]
        hide: bool,
    },

    /// Query a snippet by name
    Get {
        /// The name of the snippet
        name: String,
    },

    /// List all visible snippet names, ascending
    Catalog,

    /// Find snippets whose name matches a SQL LIKE pattern.
    ///
    /// The pattern is used verbatim; embed % wildcards yourself. Matching is
    /// on the snippet name, not its text.
    Search {
        /// LIKE pattern matched against snippet names
        #[arg(value_name = "STRING")]
        pattern: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::load_config(None)?;

    // Initialize logging: append-only file, one stream per process
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config::log_path(config.as_ref()))?;

    // SNIPS_LOG takes precedence over --verbose
    let filter = EnvFilter::try_from_env("SNIPS_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Arc::new(log_file)).with_ansi(false))
        .with(filter)
        .init();

    let store = SnippetStore::open(&config::database_path(config.as_ref()))?;

    match cli.command {
        Commands::Put { name, snippet, hide } => {
            let snippet = Snippet::new(name, snippet, hide);
            store.put(&snippet)?;
            println!("{}", output::stored(&snippet));
        }

        Commands::Get { name } => {
            let message = store.get(&name)?;
            println!("{}", output::retrieved(message.as_deref()));
        }

        Commands::Catalog => {
            let keywords = store.catalog()?;
            println!("{}", output::catalog(&keywords));
        }

        Commands::Search { pattern } => {
            let messages = store.search(&pattern)?;
            println!("{}", output::search(&pattern, &messages));
        }
    }

    Ok(())
}
