use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode, Url};

use super::listing::{VoiceRegistry, parse_locales, parse_voices};
use super::options::{AudioFormat, InputType, OutputType, ProcessOptions};
use super::phonemes::{PhonemeMap, decode_phonemes, seed_map};
use super::request::ProcessRequest;
use crate::error::{Error, Result};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 59125;

/// Decoded body of a `process` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutput {
    /// Raw audio bytes.
    Audio(Bytes),
    /// Audio as `data:<content-type>;base64,<payload>`.
    DataUri(String),
    /// Any non-audio output type, undecoded.
    Text(String),
}

impl ProcessOutput {
    pub const fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Audio(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns the textual payload of `Text` and `DataUri` outputs.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Audio(_) => None,
            Self::DataUri(text) | Self::Text(text) => Some(text),
        }
    }
}

/// Client for a MaryTTS server.
///
/// Every call issues exactly one HTTP request and keeps no state between
/// calls, so a client can be cloned and shared freely.
#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: Client,
    base_url: Url,
}

impl TranslationClient {
    /// Creates a client for the server at `host:port`.
    ///
    /// `host` may carry an `http://` or `https://` scheme; `http://` is
    /// assumed otherwise.
    pub fn new(host: &str, port: u16) -> Result<Self> {
        Self::with_http_client(Client::new(), host, port)
    }

    /// Creates a client for `localhost:59125`.
    pub fn local() -> Result<Self> {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }

    /// Creates a client that sends requests through `client`.
    ///
    /// Timeouts, proxies and TLS settings come from `client`.
    pub fn with_http_client(client: Client, host: &str, port: u16) -> Result<Self> {
        Ok(Self {
            client,
            base_url: normalize_base_url(host, port)?,
        })
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Processes `text` with default options (plain text to WAVE audio, `en_US`).
    pub async fn process(&self, text: &str) -> Result<ProcessOutput> {
        self.process_with_options(text, &ProcessOptions::default())
            .await
    }

    /// Processes `text` and decodes the response according to the output type.
    ///
    /// Audio comes back as bytes, or as a data URI when `options.base64` is
    /// set. Every other output type comes back as text.
    pub async fn process_with_options(
        &self,
        text: &str,
        options: &ProcessOptions,
    ) -> Result<ProcessOutput> {
        let request = ProcessRequest::new(text, options);
        let url = self.endpoint("process")?;

        tracing::debug!(
            %url,
            input_type = %request.input_type,
            output_type = %request.output_type,
            locale = %request.locale,
            "Sending process request"
        );

        let response = self
            .client
            .post(url.clone())
            .form(&request.form_fields())
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        let response = check_status(response).await?;

        if !request.output_type.is_audio() {
            let body = response.text().await.map_err(|e| transport_error(&url, e))?;
            tracing::debug!(bytes = body.len(), "Received text response");
            return Ok(ProcessOutput::Text(body));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let audio = response.bytes().await.map_err(|e| transport_error(&url, e))?;
        tracing::debug!(bytes = audio.len(), "Received audio response");

        if options.base64 {
            let mime = content_type.as_deref().unwrap_or(request.audio.mime_type());
            Ok(ProcessOutput::DataUri(data_uri(mime, &audio)))
        } else {
            Ok(ProcessOutput::Audio(audio))
        }
    }

    /// Looks up the phonetic transcription of each word.
    ///
    /// The result holds one entry per distinct word. Words the server did
    /// not transcribe, or every word when the response is not the expected
    /// MaryXML, keep the default entry.
    pub async fn phonemes<S: AsRef<str>>(
        &self,
        words: &[S],
        locale: &str,
        voice: Option<&str>,
    ) -> Result<PhonemeMap> {
        if words.is_empty() {
            return Ok(seed_map(words));
        }

        let text = words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" ");

        let mut options = ProcessOptions::default()
            .input_type(InputType::Text)
            .output_type(OutputType::Phonemes)
            .locale(locale);
        options.voice = voice.map(str::to_string);

        let output = self.process_with_options(&text, &options).await?;
        Ok(decode_phonemes(words, output.as_text().unwrap_or_default()))
    }

    /// Fetches the voices installed on the server.
    pub async fn voices(&self) -> Result<VoiceRegistry> {
        let body = self.get_text("voices").await?;
        Ok(parse_voices(&body))
    }

    /// Fetches the locales supported by the server.
    pub async fn locales(&self) -> Result<Vec<String>> {
        let body = self.get_text("locales").await?;
        Ok(parse_locales(&body))
    }

    pub fn input_types(&self) -> Vec<&'static str> {
        InputType::keys()
    }

    pub fn output_types(&self) -> Vec<&'static str> {
        OutputType::keys()
    }

    pub fn audio_formats(&self) -> Vec<&'static str> {
        AudioFormat::keys()
    }

    async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "Sending listing request");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;
        let response = check_status(response).await?;

        response.text().await.map_err(|e| transport_error(&url, e))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|_| Error::InvalidAddress(format!("{}{path}", self.base_url)))
    }
}

/// Formats `data` as a base64 `data:` URI.
pub fn data_uri(mime: &str, data: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(data))
}

fn normalize_base_url(host: &str, port: u16) -> Result<Url> {
    let address = format!("{}:{port}/", host.trim_end_matches('/'));
    let address = if address.starts_with("http://") || address.starts_with("https://") {
        address
    } else {
        format!("http://{address}")
    };

    match Url::parse(&address) {
        // A path, query or fragment in `host` would swallow the port.
        Ok(url) if url.path() == "/" && url.query().is_none() && url.fragment().is_none() => {
            Ok(url)
        }
        _ => Err(Error::InvalidAddress(address)),
    }
}

fn transport_error(url: &Url, source: reqwest::Error) -> Error {
    tracing::debug!(%url, error = %source, "MaryTTS request failed");
    Error::transport(url.as_str(), source)
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }

    let url = response.url().clone();
    let body = response.text().await.unwrap_or_default();
    let message = status
        .canonical_reason()
        .unwrap_or("Unknown status")
        .to_string();
    tracing::debug!(%url, status = status.as_u16(), %message, body = body.trim(), "MaryTTS server rejected request");

    Err(Error::Status {
        status: status.as_u16(),
        message,
    })
}
