//! Folio CLI - Command-line surface over the Folio reading core

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a book
    Info {
        /// Book JSON file path
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the table of contents
    Toc {
        /// Book JSON file path
        input: String,
    },

    /// Read a chapter, resuming from persisted state
    Read {
        /// Book JSON file path
        input: String,

        /// Chapter to open (zero-based); defaults to the saved position
        #[arg(short, long)]
        chapter: Option<usize>,

        /// Directory for persisted reading state
        #[arg(long, default_value = ".folio-state")]
        state_dir: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "folio_cli=debug,folio_core=debug"
    } else {
        "folio_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Info { input, json } => commands::info(&input, json),

        Commands::Toc { input } => commands::toc(&input),

        Commands::Read {
            input,
            chapter,
            state_dir,
        } => commands::read(&input, chapter, &state_dir),
    }
}
