use super::options::{AudioFormat, InputType, OutputType, ProcessOptions};

/// A single `process` request, built fresh for every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRequest {
    pub text: String,
    pub input_type: InputType,
    pub output_type: OutputType,
    pub locale: String,
    pub audio: AudioFormat,
    pub voice: Option<String>,
}

impl ProcessRequest {
    pub fn new(text: impl Into<String>, options: &ProcessOptions) -> Self {
        Self {
            text: text.into(),
            input_type: options.input_type,
            output_type: options.output_type,
            locale: options.locale.clone(),
            audio: options.audio,
            voice: options.voice.clone().filter(|v| !v.is_empty()),
        }
    }

    /// Encodes the request as `process` form fields.
    ///
    /// `VOICE` is only present when a non-empty voice was requested.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("INPUT_TEXT", self.text.as_str()),
            ("INPUT_TYPE", self.input_type.wire_token()),
            ("OUTPUT_TYPE", self.output_type.wire_token()),
            ("LOCALE", self.locale.as_str()),
            ("AUDIO", self.audio.wire_token()),
        ];

        if let Some(voice) = &self.voice {
            fields.push(("VOICE", voice.as_str()));
        }

        fields
    }
}
