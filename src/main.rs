use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use badwords::config::Config;
use badwords::detect::ProfanityFilter;

/// badwords: word-list profanity detection over HTTP.
///
/// Combines a word-boundary matcher and a tokenizing matcher, each with its
/// own English and German word lists, and flags text if either one hits.
#[derive(Parser)]
#[command(name = "badwords", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service (POST /check, GET /health, GET /config)
    Serve {
        /// Port to listen on (default: 3000)
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Address to bind (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Check a single text from the command line
    Check {
        /// The text to check
        text: String,

        /// Also print the censored text from the boundary detector
        #[arg(long)]
        censor: bool,
    },

    /// Normalize a word-list file in place (trim, lower-case, dedupe, sort)
    CleanList {
        /// Path to the newline-separated word list
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("badwords=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            // Word lists must be complete before any traffic is accepted.
            let filter = ProfanityFilter::build(&config.filter_options())
                .context("failed to initialize word lists")?;
            info!(
                max_text_length = ?config.max_text_length,
                "Starting badwords v{}",
                env!("CARGO_PKG_VERSION")
            );
            badwords::web::run_server(config, filter, port, &bind).await?;
        }

        Commands::Check { text, censor } => {
            let config = Config::load()?;
            let filter = ProfanityFilter::build(&config.filter_options())
                .context("failed to initialize word lists")?;

            let verdicts = filter.verdicts(&text);
            let censored = censor.then(|| filter.boundary().censor(&text));
            badwords::output::terminal::display_check_result(
                &text,
                &verdicts,
                censored.as_deref(),
            );
        }

        Commands::CleanList { file } => {
            let kept = badwords::wordlist::clean_file(&file)?;
            println!(
                "{} {} ({kept} terms)",
                "Cleaned".green().bold(),
                file.display()
            );
        }
    }

    Ok(())
}
