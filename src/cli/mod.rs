//! CLI entry point for voicetext.

pub mod handlers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// voicetext CLI
#[derive(Parser, Debug)]
#[command(name = "voicetext", version, about = "VK Cloud voice API client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Obtain an access token and print it
    Token,
    /// Synthesize text into <output-dir>/<id>.oga
    Synthesize(SynthesizeArgs),
    /// Transcribe an Ogg/Opus file
    Recognize(RecognizeArgs),
}

/// Arguments for `voicetext synthesize`.
#[derive(Parser, Debug)]
pub struct SynthesizeArgs {
    /// Text to speak
    pub text: String,

    /// File id; the audio is written to <output-dir>/<id>.oga
    #[arg(long)]
    pub id: String,

    /// Output directory (defaults to VOICETEXT_OUTPUT_DIR or ./voice)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Voice model (defaults to VOICETEXT_MODEL or maria)
    #[arg(long)]
    pub model: Option<String>,

    /// Speech tempo (defaults to VOICETEXT_TEMPO or 0.9)
    #[arg(long)]
    pub tempo: Option<f64>,
}

/// Arguments for `voicetext recognize`.
#[derive(Parser, Debug)]
pub struct RecognizeArgs {
    /// Path to the audio file
    pub file: PathBuf,

    /// Print every hypothesis instead of only the transcript
    #[arg(long)]
    pub verbose: bool,
}
