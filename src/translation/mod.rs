mod callback;
mod client;
mod listing;
mod options;
mod phonemes;
mod request;

pub use client::{DEFAULT_HOST, DEFAULT_PORT, ProcessOutput, TranslationClient, data_uri};
pub use listing::{VoiceInfo, VoiceRegistry, parse_locales, parse_voices};
pub use options::{
    AudioFormat, DEFAULT_LOCALE, InputType, OutputType, ProcessOptions, RawProcessOptions,
};
pub use phonemes::{
    MaryXmlError, PhonemeEntry, PhonemeMap, Token, UNKNOWN, apply_tokens, decode_phonemes,
    extract_tokens, seed_map,
};
pub use request::ProcessRequest;
