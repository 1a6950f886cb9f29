//! # marytts-client - MaryTTS client library and CLI
//!
//! A client for the HTTP interface of a [MaryTTS](https://github.com/marytts/marytts)
//! server. It turns method calls into `process` form requests and decodes the
//! three kinds of response bodies the server produces: binary audio, MaryXML
//! and line-oriented text listings.
//!
//! ## Library
//!
//! ```no_run
//! use marytts_client::translation::{OutputType, ProcessOptions, TranslationClient};
//!
//! # async fn demo() -> marytts_client::Result<()> {
//! let client = TranslationClient::new("localhost", 59125)?;
//!
//! // WAVE audio with the server's default voice
//! let audio = client.process("Hello World").await?;
//!
//! // Phonetic transcription of individual words
//! let words = ["this", "is", "a", "test"];
//! let phonemes = client.phonemes(&words, "en_US", Some("cmu-slt-hsmm")).await?;
//! for (word, entry) in &phonemes {
//!     println!("{word}: {:?}", entry.phonemes);
//! }
//!
//! // Raw MaryXML for any other output type
//! let options = ProcessOptions::default().output_type(OutputType::PartsOfSpeech);
//! let xml = client.process_with_options("Hello World", &options).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## CLI
//!
//! ```bash
//! # Synthesize to a WAVE file
//! mary process --text "Hello World" -o hello.wav
//!
//! # Transcribe words
//! mary phonemes this is a test --voice cmu-slt-hsmm
//!
//! # Inspect the server
//! mary voices
//! mary locales
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/mary/config.toml`:
//!
//! ```toml
//! [server]
//! host = "localhost"
//! port = 59125
//!
//! [defaults]
//! locale = "en_US"
//! voice = "cmu-slt-hsmm"
//! audio = "wave_file"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and server settings.
pub mod config;

/// Typed errors returned by the client.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input reading from the command line, files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, logging).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// MaryTTS client: request encoding and response decoding.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

pub use error::{Error, Result};
pub use translation::TranslationClient;
