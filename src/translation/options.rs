//! Closed option sets accepted by the MaryTTS `process` endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale used when the caller supplies none.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Declares a closed option set mapping lowercase keys to uppercase wire tokens.
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $($variant:ident => ($key:literal, $token:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member of the set, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The lowercase symbolic name callers use.
            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            /// The uppercase token sent to the server.
            pub const fn wire_token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }

            /// Looks up a member by its exact lowercase key.
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// All keys of the set, in declaration order.
            pub fn keys() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.key()).collect()
            }

            /// Resolves a caller-supplied key, substituting the default for
            /// absent or unrecognized values.
            pub fn resolve(value: Option<&str>) -> Self {
                match value {
                    None => Self::default(),
                    Some(key) => Self::from_key(key).unwrap_or_else(|| {
                        tracing::debug!(
                            option = stringify!($name),
                            value = key,
                            fallback = Self::default().key(),
                            "Unrecognized option value, using default"
                        );
                        Self::default()
                    }),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

option_set! {
    /// Representation of the text sent to the server.
    InputType, default = Text {
        Text => ("text", "TEXT"),
        SimplePhonemes => ("simplephonemes", "SIMPLEPHONEMES"),
        Sable => ("sable", "SABLE"),
        Ssml => ("ssml", "SSML"),
        Apml => ("apml", "APML"),
        EmotionMl => ("emotionml", "EMOTIONML"),
        RawMaryXml => ("rawmaryxml", "RAWMARYXML"),
        Tokens => ("tokens", "TOKENS"),
        Words => ("words", "WORDS"),
        PartsOfSpeech => ("partsofspeech", "PARTSOFSPEECH"),
        Phonemes => ("phonemes", "PHONEMES"),
        Intonation => ("intonation", "INTONATION"),
        Allophones => ("allophones", "ALLOPHONES"),
        AcoustParams => ("acoustparams", "ACOUSTPARAMS"),
    }
}

option_set! {
    /// Representation the server should produce.
    OutputType, default = Audio {
        RawMaryXml => ("rawmaryxml", "RAWMARYXML"),
        Tokens => ("tokens", "TOKENS"),
        Words => ("words", "WORDS"),
        PartsOfSpeech => ("partsofspeech", "PARTSOFSPEECH"),
        Phonemes => ("phonemes", "PHONEMES"),
        Intonation => ("intonation", "INTONATION"),
        Allophones => ("allophones", "ALLOPHONES"),
        AcoustParams => ("acoustparams", "ACOUSTPARAMS"),
        TargetFeatures => ("targetfeatures", "TARGETFEATURES"),
        Audio => ("audio", "AUDIO"),
        HalfphoneTargetFeatures => ("halfphone_targetfeatures", "HALFPHONE_TARGETFEATURES"),
        RealisedAcoustParams => ("realised_acoustparams", "REALISED_ACOUSTPARAMS"),
        RealisedDurations => ("realised_durations", "REALISED_DURATIONS"),
        PraatTextGrid => ("praat_textgrid", "PRAAT_TEXTGRID"),
    }
}

option_set! {
    /// Container format for synthesized audio.
    AudioFormat, default = WaveFile {
        WaveFile => ("wave_file", "WAVE_FILE"),
        AuFile => ("au_file", "AU_FILE"),
        AiffFile => ("aiff_file", "AIFF_FILE"),
    }
}

impl OutputType {
    /// Returns `true` if the server answers with binary audio.
    pub const fn is_audio(self) -> bool {
        matches!(self, Self::Audio)
    }
}

impl AudioFormat {
    /// MIME type used when the server does not declare one.
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::WaveFile => "audio/x-wav",
            Self::AuFile => "audio/basic",
            Self::AiffFile => "audio/x-aiff",
        }
    }
}

/// Typed options for a `process` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    pub input_type: InputType,
    pub output_type: OutputType,
    pub locale: String,
    pub audio: AudioFormat,
    /// Voice name; `None` or an empty string lets the server choose.
    pub voice: Option<String>,
    /// Return audio as a `data:` URI instead of raw bytes.
    /// Ignored unless `output_type` is audio.
    pub base64: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            input_type: InputType::default(),
            output_type: OutputType::default(),
            locale: DEFAULT_LOCALE.to_string(),
            audio: AudioFormat::default(),
            voice: None,
            base64: false,
        }
    }
}

impl ProcessOptions {
    #[must_use]
    pub const fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    #[must_use]
    pub const fn output_type(mut self, output_type: OutputType) -> Self {
        self.output_type = output_type;
        self
    }

    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub const fn audio(mut self, audio: AudioFormat) -> Self {
        self.audio = audio;
        self
    }

    #[must_use]
    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    #[must_use]
    pub const fn base64(mut self, base64: bool) -> Self {
        self.base64 = base64;
        self
    }
}

/// String-valued options as they arrive from a user, a config file or
/// another untyped source.
///
/// Call [`RawProcessOptions::resolve`] to validate them; unknown or absent
/// values fall back to the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProcessOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64: Option<bool>,
}

impl RawProcessOptions {
    /// Validates every field against its option set.
    pub fn resolve(&self) -> ProcessOptions {
        ProcessOptions {
            input_type: InputType::resolve(self.input_type.as_deref()),
            output_type: OutputType::resolve(self.output_type.as_deref()),
            locale: self
                .locale
                .clone()
                .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            audio: AudioFormat::resolve(self.audio.as_deref()),
            voice: self.voice.clone().filter(|v| !v.is_empty()),
            base64: self.base64.unwrap_or(false),
        }
    }

    /// Fills every unset field from `fallback`.
    #[must_use]
    pub fn or(self, fallback: &Self) -> Self {
        Self {
            input_type: self.input_type.or_else(|| fallback.input_type.clone()),
            output_type: self.output_type.or_else(|| fallback.output_type.clone()),
            locale: self.locale.or_else(|| fallback.locale.clone()),
            audio: self.audio.or_else(|| fallback.audio.clone()),
            voice: self.voice.or_else(|| fallback.voice.clone()),
            base64: self.base64.or(fallback.base64),
        }
    }
}
