use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mary")]
#[command(about = "Command-line client for MaryTTS text-to-speech servers")]
#[command(version)]
pub struct Args {
    /// MaryTTS server host (e.g., localhost, https://tts.example.com)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// MaryTTS server port
    #[arg(short = 'p', long, global = true)]
    pub port: Option<u16>,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Log requests and responses to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by commands that call the `process` endpoint.
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct VoiceArgs {
    /// Locale (e.g., en_US, de)
    #[arg(short = 'l', long)]
    pub locale: Option<String>,

    /// Voice name (see `mary voices`)
    #[arg(long)]
    pub voice: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize or analyze text
    Process {
        /// File to read text from (reads from stdin if not provided, or if `-`)
        file: Option<String>,

        /// Text to process instead of a file
        #[arg(short = 't', long, conflicts_with = "file")]
        text: Option<String>,

        /// Input type (see `mary types`)
        #[arg(short = 'i', long)]
        input_type: Option<String>,

        /// Output type (see `mary types`)
        #[arg(short = 'O', long)]
        output_type: Option<String>,

        /// Audio format (see `mary types`)
        #[arg(short = 'a', long)]
        audio: Option<String>,

        #[command(flatten)]
        voice: VoiceArgs,

        /// Print audio as a base64 data URI
        #[arg(long, conflicts_with = "no_base64")]
        base64: bool,

        /// Print raw audio even if the config file enables base64
        #[arg(long)]
        no_base64: bool,

        /// Write the result to this file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
    /// Show phonetic transcriptions of words
    Phonemes {
        /// Words to transcribe
        #[arg(required = true)]
        words: Vec<String>,

        #[command(flatten)]
        voice: VoiceArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List voices installed on the server
    Voices {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List locales supported by the server
    Locales,
    /// List input types, output types and audio formats
    Types,
    /// Configure mary settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
