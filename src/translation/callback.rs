//! Continuation-style variants of the client operations.
//!
//! Each network-bound variant spawns the request onto the current Tokio
//! runtime and hands the outcome to the continuation exactly once, on success
//! and on failure alike. They panic if called outside a Tokio runtime.

use tokio::task::JoinHandle;

use super::client::{ProcessOutput, TranslationClient};
use super::listing::VoiceRegistry;
use super::options::ProcessOptions;
use super::phonemes::PhonemeMap;
use crate::error::Result;

impl TranslationClient {
    pub fn process_callback<F>(&self, text: impl Into<String>, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<ProcessOutput>) + Send + 'static,
    {
        self.process_with_options_callback(text, ProcessOptions::default(), callback)
    }

    pub fn process_with_options_callback<F>(
        &self,
        text: impl Into<String>,
        options: ProcessOptions,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<ProcessOutput>) + Send + 'static,
    {
        let client = self.clone();
        let text = text.into();
        tokio::spawn(async move {
            callback(client.process_with_options(&text, &options).await);
        })
    }

    pub fn phonemes_callback<F>(
        &self,
        words: Vec<String>,
        locale: impl Into<String>,
        voice: Option<String>,
        callback: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<PhonemeMap>) + Send + 'static,
    {
        let client = self.clone();
        let locale = locale.into();
        tokio::spawn(async move {
            callback(client.phonemes(words.as_slice(), &locale, voice.as_deref()).await);
        })
    }

    pub fn voices_callback<F>(&self, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<VoiceRegistry>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            callback(client.voices().await);
        })
    }

    pub fn locales_callback<F>(&self, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<String>>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            callback(client.locales().await);
        })
    }

    /// Passes the input type keys to `callback` before returning them.
    pub fn input_types_callback<F>(&self, callback: F) -> Vec<&'static str>
    where
        F: FnOnce(&[&'static str]),
    {
        let types = self.input_types();
        callback(&types);
        types
    }

    /// Passes the output type keys to `callback` before returning them.
    pub fn output_types_callback<F>(&self, callback: F) -> Vec<&'static str>
    where
        F: FnOnce(&[&'static str]),
    {
        let types = self.output_types();
        callback(&types);
        types
    }

    /// Passes the audio format keys to `callback` before returning them.
    pub fn audio_formats_callback<F>(&self, callback: F) -> Vec<&'static str>
    where
        F: FnOnce(&[&'static str]),
    {
        let formats = self.audio_formats();
        callback(&formats);
        formats
    }
}
