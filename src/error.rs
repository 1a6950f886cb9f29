//! Error types for the MaryTTS client.

use thiserror::Error;

/// Errors returned by [`TranslationClient`](crate::translation::TranslationClient).
///
/// Only failures that leave the caller without any response are errors.
/// Responses that arrive but carry no usable data (unexpected phoneme XML,
/// malformed voice lines) decode to default values instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured host and port do not form a valid base URL.
    #[error("Invalid server address: '{0}'")]
    InvalidAddress(String),

    /// The request could not be sent or its body could not be read.
    #[error("Failed to reach MaryTTS server at {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status other than 200.
    #[error("MaryTTS server returned {status}: {message}")]
    Status { status: u16, message: String },
}

impl Error {
    pub(crate) fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Returns `true` if the server could not be reached at all.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns `true` if the server answered with an unexpected status.
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
