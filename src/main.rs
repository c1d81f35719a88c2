mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordcast::config::WordcastConfig;

#[derive(Parser)]
#[command(
    name = "wordcast",
    version,
    about = "Attach pretrained word embeddings to tokenized sentences"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Annotate whitespace-tokenized sentences (stdin or --input) as JSON lines
    Annotate {
        #[command(flatten)]
        model: cli::ModelArgs,
        /// Read sentences from a file instead of stdin, one per line
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Print the vector for a single word as JSON
    Lookup {
        #[command(flatten)]
        model: cli::ModelArgs,
        word: String,
    },
    /// Show the loaded model's location, dimensionality, and backend
    Info {
        #[command(flatten)]
        model: cli::ModelArgs,
    },
    /// Manage the embedding model cache
    Model {
        #[command(subcommand)]
        action: ModelAction,
    },
}

#[derive(Subcommand)]
enum ModelAction {
    /// Download a remote model into the cache
    Fetch {
        /// Model URL; defaults to the configured model location
        location: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = WordcastConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for JSON output.
    let filter = EnvFilter::try_new(&config.logging.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Annotate { model, input } => {
            model.apply(&mut config);
            cli::annotate::annotate(&config, input.as_deref())?;
        }
        Command::Lookup { model, word } => {
            model.apply(&mut config);
            cli::lookup::lookup(&config, &word)?;
        }
        Command::Info { model } => {
            model.apply(&mut config);
            cli::info::info(&config)?;
        }
        Command::Model { action } => match action {
            ModelAction::Fetch { location } => {
                cli::model_fetch(&config, location.as_deref())?;
            }
        },
    }

    Ok(())
}
