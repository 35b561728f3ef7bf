//! SleepSense CLI — the main entry point.
//!
//! Commands:
//! - `serve`     — Start the HTTP gateway
//! - `chat`      — Interactive or single-message chat
//! - `inspect`   — Show how a message would be answered, without the LLM
//! - `models`    — Probe which Gemini models answer
//! - `knowledge` — List the knowledge base
//! - `status`    — Show configuration
//! - `doctor`    — Diagnose configuration and connectivity

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "sleepsense",
    about = "SleepSense — OSA medical assistant powered by Gemini",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Chat with the assistant
    Chat {
        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,

        /// Conversation identity (defaults to a fresh id per run)
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Show intent, selected knowledge and the rendered prompt for a message
    Inspect {
        /// The message to analyse
        message: String,
    },

    /// Find the first Gemini model that answers
    Models,

    /// List knowledge domains and section keys
    Knowledge,

    /// Show configuration
    Status,

    /// Diagnose configuration and connectivity
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Chat { message, user } => commands::chat::run(message, user).await?,
        Commands::Inspect { message } => commands::inspect::run(message).await?,
        Commands::Models => commands::models::run().await?,
        Commands::Knowledge => commands::knowledge::run().await?,
        Commands::Status => commands::status::run().await?,
        Commands::Doctor => commands::doctor::run().await?,
    }

    Ok(())
}
