//! Server listing command handlers.

use anyhow::Result;

use super::{column_width, load_resolved_config};
use crate::config::ResolveOptions;
use crate::translation::VoiceRegistry;
use crate::ui::{Spinner, Style};

/// Prints the voices installed on the server.
pub async fn print_voices(resolve: &ResolveOptions, json: bool) -> Result<()> {
    let client = load_resolved_config(resolve)?.client()?;

    let spinner = Spinner::new("Fetching voices...");
    let result = client.voices().await;
    spinner.stop();
    let voices = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&voices)?);
    } else {
        print_voice_table(&voices);
    }

    Ok(())
}

/// Prints the locales supported by the server, one per line.
pub async fn print_locales(resolve: &ResolveOptions) -> Result<()> {
    let client = load_resolved_config(resolve)?.client()?;

    let spinner = Spinner::new("Fetching locales...");
    let result = client.locales().await;
    spinner.stop();

    for locale in result? {
        println!("{locale}");
    }

    Ok(())
}

fn print_voice_table(voices: &VoiceRegistry) {
    if voices.is_empty() {
        println!("No voices installed.");
        return;
    }

    let width = column_width(voices.keys());

    println!("{}", Style::header("Voices"));
    for (name, voice) in voices {
        println!(
            "  {}  {}  {}",
            Style::value(format!("{name:<width$}")),
            Style::code(format!("{:<6}", voice.locale)),
            Style::secondary(format!("{}, {}", voice.gender, voice.kind))
        );
    }
}
