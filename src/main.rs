//! voicetext CLI binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use voicetext::cli::handlers::{handle_recognize, handle_synthesize, handle_token};
use voicetext::cli::{Cli, Commands};
use voicetext::config::VoiceTextConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "voicetext=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match VoiceTextConfig::from_env() {
        Ok(config) => match cli.command {
            Commands::Token => handle_token(config).await,
            Commands::Synthesize(args) => handle_synthesize(config, args).await,
            Commands::Recognize(args) => handle_recognize(config, args).await,
        },
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
