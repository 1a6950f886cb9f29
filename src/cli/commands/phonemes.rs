use anyhow::Result;

use super::{column_width, load_resolved_config};
use crate::config::ResolveOptions;
use crate::translation::{PhonemeMap, RawProcessOptions};
use crate::ui::{Spinner, Style};

pub struct PhonemesOptions {
    pub words: Vec<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub locale: Option<String>,
    pub voice: Option<String>,
    pub json: bool,
}

pub async fn run_phonemes(options: PhonemesOptions) -> Result<()> {
    let config = load_resolved_config(&ResolveOptions {
        host: options.host,
        port: options.port,
        options: RawProcessOptions {
            locale: options.locale,
            voice: options.voice,
            ..Default::default()
        },
    })?;

    let process_options = config.process_options();
    let client = config.client()?;

    let spinner = Spinner::new("Transcribing...");
    let result = client
        .phonemes(
            &options.words,
            &process_options.locale,
            process_options.voice.as_deref(),
        )
        .await;
    spinner.stop();
    let map = result?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        print_table(&map);
    }

    let missing = map.values().filter(|e| !e.is_transcribed()).count();
    if missing > 0 {
        crate::status!(
            "{}",
            Style::hint(format!("{missing} word(s) without transcription"))
        );
    }

    Ok(())
}

fn print_table(map: &PhonemeMap) {
    let width = column_width(map.keys());

    for (word, entry) in map {
        let phonemes = entry
            .phonemes
            .as_deref()
            .map_or_else(|| Style::secondary("(none)"), Style::value);
        println!(
            "  {}  {}  {}",
            Style::code(format!("{word:<width$}")),
            phonemes,
            Style::secondary(format!("[{}, {}]", entry.part_of_speech, entry.method))
        );
    }
}
