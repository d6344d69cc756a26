use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "srkit")]
#[command(version)]
#[command(about = "Transcribe WAV files with the Groq Whisper API")]
pub struct Cli {
    /// Print request details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transcribe a WAV file
    Transcribe(TranscribeArgs),

    /// List the Groq models srkit knows about
    Models,

    /// Show or change saved settings
    Config(ConfigArgs),
}

#[derive(Args, Debug, Default)]
pub struct TranscribeArgs {
    /// WAV file to transcribe
    pub file: PathBuf,

    /// Model identifier (default: whisper-large-v3-turbo)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Text to guide the transcription style or vocabulary
    #[arg(long)]
    pub prompt: Option<String>,

    /// Response format: json, verbose_json, text, srt or vtt
    #[arg(long)]
    pub response_format: Option<String>,

    /// Sampling temperature
    #[arg(short, long)]
    pub temperature: Option<f32>,

    /// Language of the audio (ISO-639-1, e.g. "en")
    #[arg(short, long)]
    pub language: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Save a Groq API key (empty string removes it)
    #[arg(long)]
    pub groq_api_key: Option<String>,

    /// Default model
    #[arg(long)]
    pub model: Option<String>,

    /// Default language
    #[arg(long)]
    pub language: Option<String>,

    /// Default prompt
    #[arg(long)]
    pub prompt: Option<String>,

    /// Default response format
    #[arg(long)]
    pub response_format: Option<String>,

    /// Default temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Print the current settings
    #[arg(long)]
    pub show: bool,
}
