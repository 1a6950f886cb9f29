//! Decoding of the line-oriented `voices` and `locales` listings.

use indexmap::IndexMap;
use serde::Serialize;

/// Attributes of a voice installed on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceInfo {
    pub locale: String,
    pub gender: String,
    /// Synthesis technology, e.g. `hmm` or `unitselection`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Voices keyed by name, in the order the server listed them.
pub type VoiceRegistry = IndexMap<String, VoiceInfo>;

/// Parses a `voices` listing: one `name locale gender type` line per voice.
///
/// Blank lines are ignored. Lines with fewer than four fields are skipped
/// and logged; fields past the fourth are ignored. If a name repeats, its
/// first line wins.
pub fn parse_voices(body: &str) -> VoiceRegistry {
    let mut voices = VoiceRegistry::new();

    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [name, locale, gender, kind, ..] = fields.as_slice() else {
            tracing::warn!(line, "Skipping malformed voice line");
            continue;
        };

        voices
            .entry((*name).to_string())
            .or_insert_with(|| VoiceInfo {
                locale: (*locale).to_string(),
                gender: (*gender).to_string(),
                kind: (*kind).to_string(),
            });
    }

    voices
}

/// Parses a `locales` listing: one locale per line, blank lines ignored.
pub fn parse_locales(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
