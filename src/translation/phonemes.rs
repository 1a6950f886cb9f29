//! Phoneme transcription results and MaryXML token extraction.
//!
//! The server answers a `PHONEMES` request with a MaryXML document of the shape
//! `maryxml > p > [voice >] s > t*`. Each `t` element holds one token as text
//! and carries its transcription in the `ph`, `g2p_method` and `pos`
//! attributes.

use indexmap::IndexMap;
use roxmltree::{Document, Node, ParsingOptions};
use serde::Serialize;
use thiserror::Error;

/// Placeholder for a transcription method or part of speech the server did not report.
pub const UNKNOWN: &str = "unknown";

/// Transcription of a single requested word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhonemeEntry {
    /// Phonetic transcription, `None` until the server reports one.
    pub phonemes: Option<String>,
    /// How the transcription was produced (e.g. `lexicon`, `rules`).
    pub method: String,
    pub part_of_speech: String,
}

impl Default for PhonemeEntry {
    fn default() -> Self {
        Self {
            phonemes: None,
            method: UNKNOWN.to_string(),
            part_of_speech: UNKNOWN.to_string(),
        }
    }
}

impl PhonemeEntry {
    /// Returns `true` if the server supplied a transcription for this word.
    pub const fn is_transcribed(&self) -> bool {
        self.phonemes.is_some()
    }
}

/// Requested words mapped to their transcriptions, in first-occurrence order.
pub type PhonemeMap = IndexMap<String, PhonemeEntry>;

/// Why a response carried no usable tokens.
#[derive(Debug, Error)]
pub enum MaryXmlError {
    #[error("Failed to parse MaryXML: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("MaryXML document has no <{0}> element where one was expected")]
    Missing(&'static str),
}

/// One `t` element of a MaryXML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub phonemes: Option<String>,
    pub method: Option<String>,
    pub part_of_speech: Option<String>,
}

/// Builds the result map with a default entry for every distinct word.
pub fn seed_map<S: AsRef<str>>(words: &[S]) -> PhonemeMap {
    let mut map = PhonemeMap::with_capacity(words.len());
    for word in words {
        map.entry(word.as_ref().to_string()).or_default();
    }
    map
}

/// Extracts the token list from a MaryXML document.
pub fn extract_tokens(xml: &str) -> Result<Vec<Token>, MaryXmlError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(xml, options)?;

    let root = document.root_element();
    if root.tag_name().name() != "maryxml" {
        return Err(MaryXmlError::Missing("maryxml"));
    }

    let paragraph = first_child(root, "p").ok_or(MaryXmlError::Missing("p"))?;
    let container = first_child(paragraph, "voice").unwrap_or(paragraph);
    let sentence = first_child(container, "s").ok_or(MaryXmlError::Missing("s"))?;

    let tokens: Vec<Token> = sentence
        .children()
        .filter(|n| is_element_named(*n, "t"))
        .map(|node| Token {
            text: text_content(node).trim().to_string(),
            phonemes: node.attribute("ph").map(str::to_string),
            method: node.attribute("g2p_method").map(str::to_string),
            part_of_speech: node.attribute("pos").map(str::to_string),
        })
        .collect();

    if tokens.is_empty() {
        return Err(MaryXmlError::Missing("t"));
    }

    Ok(tokens)
}

/// Fills `map` from the tokens of `xml`.
///
/// Tokens whose text is not a key of `map` are ignored. When the document
/// cannot be read, `map` is left untouched and the miss is logged.
pub fn apply_tokens(map: &mut PhonemeMap, xml: &str) {
    let tokens = match extract_tokens(xml) {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::warn!(error = %e, "No phoneme data in server response");
            return;
        }
    };

    // Walk backwards so the earliest token for a repeated word wins.
    for token in tokens.iter().rev() {
        if let Some(entry) = map.get_mut(&token.text) {
            entry.phonemes.clone_from(&token.phonemes);
            entry.method = token.method.clone().unwrap_or_else(|| UNKNOWN.to_string());
            entry.part_of_speech = token
                .part_of_speech
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string());
        }
    }
}

/// Decodes a `PHONEMES` response into a map keyed by the requested words.
pub fn decode_phonemes<S: AsRef<str>>(words: &[S], xml: &str) -> PhonemeMap {
    let mut map = seed_map(words);
    apply_tokens(&mut map, xml);
    map
}

fn is_element_named(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn first_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_element_named(*n, name))
}

fn text_content(node: Node<'_, '_>) -> String {
    node.children()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const WITH_VOICE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<maryxml xmlns="http://mary.dfki.de/2002/MaryXML" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" version="0.5" xml:lang="en-US">
<p>
<voice name="cmu-slt-hsmm">
<s>
<t g2p_method="lexicon" ph="' D I s" pos="DT">
this
</t>
<t g2p_method="lexicon" ph="' I z" pos="VBZ">
is
</t>
<t g2p_method="lexicon" ph="' @" pos="DT">
a
</t>
<t g2p_method="lexicon" ph="' t E s t" pos="NN">
test
</t>
<t pos=".">
.
</t>
</s>
</voice>
</p>
</maryxml>"#;

    const WITHOUT_VOICE: &str = r#"<maryxml version="0.5">
<p>
<s>
<t g2p_method="rules" ph="' h @ - l @U" pos="UH">hello</t>
</s>
</p>
</maryxml>"#;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_seed_map_defaults() {
        let map = seed_map(&["this", "is", "this"]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get_index(0).unwrap().0, "this");
        assert_eq!(map.get_index(1).unwrap().0, "is");
        for entry in map.values() {
            assert_eq!(entry, &PhonemeEntry::default());
            assert_eq!(entry.method, "unknown");
            assert_eq!(entry.part_of_speech, "unknown");
        }
    }

    #[test]
    fn test_decode_with_voice_node() {
        let map = decode_phonemes(&words(&["this", "is", "a", "test"]), WITH_VOICE);

        assert_eq!(map.len(), 4);
        assert_eq!(map["this"].phonemes.as_deref(), Some("' D I s"));
        assert_eq!(map["this"].method, "lexicon");
        assert_eq!(map["this"].part_of_speech, "DT");
        assert_eq!(map["test"].phonemes.as_deref(), Some("' t E s t"));
        assert_eq!(map["test"].part_of_speech, "NN");
    }

    #[test]
    fn test_decode_without_voice_node() {
        let map = decode_phonemes(&["hello"], WITHOUT_VOICE);
        assert_eq!(map["hello"].phonemes.as_deref(), Some("' h @ - l @U"));
        assert_eq!(map["hello"].method, "rules");
    }

    #[test]
    fn test_unrequested_tokens_ignored() {
        let map = decode_phonemes(&["test"], WITH_VOICE);
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("."));
        assert!(map["test"].is_transcribed());
    }

    #[test]
    fn test_missing_word_keeps_default() {
        let map = decode_phonemes(&["this", "banana"], WITH_VOICE);
        assert!(map["this"].is_transcribed());
        assert_eq!(map["banana"], PhonemeEntry::default());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let map = decode_phonemes(&["This"], WITH_VOICE);
        assert_eq!(map["This"], PhonemeEntry::default());
    }

    #[test]
    fn test_token_without_attributes() {
        let map = decode_phonemes(&["."], WITH_VOICE);
        let entry = &map["."];
        assert!(entry.phonemes.is_none());
        assert_eq!(entry.method, "unknown");
        assert_eq!(entry.part_of_speech, ".");
    }

    #[test]
    fn test_earliest_token_wins() {
        let xml = r#"<maryxml><p><s>
<t ph="first" g2p_method="lexicon" pos="A">go</t>
<t ph="second" g2p_method="rules" pos="B">go</t>
</s></p></maryxml>"#;
        let map = decode_phonemes(&["go"], xml);
        assert_eq!(map["go"].phonemes.as_deref(), Some("first"));
        assert_eq!(map["go"].part_of_speech, "A");
    }

    #[test]
    fn test_structural_misses_return_defaults() {
        let cases = [
            "not xml at all",
            "<other><p><s><t ph=\"x\">hi</t></s></p></other>",
            "<maryxml></maryxml>",
            "<maryxml><p></p></maryxml>",
            "<maryxml><p><voice><p><s><t ph=\"x\">hi</t></s></p></voice></p></maryxml>",
            "<maryxml><p><s></s></p></maryxml>",
        ];

        for xml in cases {
            let map = decode_phonemes(&["hi"], xml);
            assert_eq!(map["hi"], PhonemeEntry::default(), "xml: {xml}");
        }
    }

    #[test]
    fn test_extract_tokens_reports_missing_element() {
        let err = extract_tokens("<maryxml><p></p></maryxml>").unwrap_err();
        assert!(matches!(err, MaryXmlError::Missing("s")));

        let err = extract_tokens("<maryxml></maryxml>").unwrap_err();
        assert!(matches!(err, MaryXmlError::Missing("p")));

        let err = extract_tokens("<maryxml").unwrap_err();
        assert!(matches!(err, MaryXmlError::Parse(_)));
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let json = serde_json::to_value(PhonemeEntry::default()).unwrap();
        assert_eq!(json["phonemes"], serde_json::Value::Null);
        assert_eq!(json["partOfSpeech"], "unknown");
    }
}
