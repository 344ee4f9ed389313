//! Lectern CLI - Command-line interface for the book-reading service

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lectern_client::ContentClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lectern")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the book-reading service
    #[arg(long, global = true, default_value = "http://127.0.0.1:5000")]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the identifiers of every book on the service
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a book's summarized content with its image selections
    Show {
        /// Book identifier
        id: String,

        /// What to render (image, text, image+text)
        #[arg(short, long, default_value = "image+text")]
        mode: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export a book's chapters as text files
    Export {
        /// Book identifier
        id: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "lectern_cli=debug,lectern_client=debug"
    } else {
        "lectern_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = ContentClient::new(&cli.base_url);

    match cli.command {
        Commands::List { json } => commands::list(&client, json).await,

        Commands::Show { id, mode, json } => commands::show(&client, &id, &mode, json).await,

        Commands::Export { id, output_dir } => commands::export(&client, &id, &output_dir).await,
    }
}
