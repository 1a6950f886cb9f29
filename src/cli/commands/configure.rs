//! Configure command handler for editing default settings.

use anyhow::{Context, Result, bail};
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager, ServerConfig};
use crate::translation::{AudioFormat, DEFAULT_HOST, DEFAULT_LOCALE, DEFAULT_PORT};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current configuration file. Otherwise asks for
/// the server address and default voice settings and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        print_current_config(&manager, &manager.load_or_default());
        return Ok(());
    }

    if !handle_prompt_cancellation(run_configure_inner)? {
        crate::status!("{}", Style::hint("Configuration unchanged"));
    }

    Ok(())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    print_current_config(&manager, &config);

    let host = prompt_text(
        "Server host:",
        config.server.host.as_deref().unwrap_or(DEFAULT_HOST),
    )?;
    if host.is_empty() {
        bail!("Host cannot be empty");
    }

    let port = prompt_text(
        "Server port:",
        &config.server.port.unwrap_or(DEFAULT_PORT).to_string(),
    )?;
    let port: u16 = port
        .parse()
        .with_context(|| format!("Invalid port: '{port}'"))?;
    if port == 0 {
        bail!("Port must be between 1 and 65535");
    }

    let locale = prompt_text(
        "Default locale:",
        config.defaults.locale.as_deref().unwrap_or(DEFAULT_LOCALE),
    )?;

    let voice = Text::new("Default voice:")
        .with_help_message("Leave empty to let the server choose (see `mary voices`)")
        .with_initial_value(config.defaults.voice.as_deref().unwrap_or_default())
        .prompt()?;

    let audio = select_audio_format(config.defaults.audio.as_deref())?;

    config.server = ServerConfig {
        host: Some(host),
        port: Some(port),
    };
    config.defaults.locale = Some(locale).filter(|l| !l.is_empty());
    config.defaults.voice = Some(voice.trim().to_string()).filter(|v| !v.is_empty());
    config.defaults.audio = Some(audio.to_string());

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_config(manager: &ConfigManager, config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");

    println!(
        "{} {}",
        Style::header("Current configuration"),
        Style::secondary(manager.config_path().display().to_string())
    );
    println!(
        "  {}    {}",
        Style::label("host"),
        config.server.host.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}    {}",
        Style::label("port"),
        config.server.port.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("locale"),
        config.defaults.locale.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("voice"),
        config.defaults.voice.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("audio"),
        config.defaults.audio.as_deref().map_or_else(not_set, Style::value)
    );
    println!();
}

fn prompt_text(message: &str, default: &str) -> Result<String> {
    let value = Text::new(message).with_default(default).prompt()?;
    Ok(value.trim().to_string())
}

fn select_audio_format(default: Option<&str>) -> Result<AudioFormat> {
    let default_index = default
        .and_then(AudioFormat::from_key)
        .and_then(|d| AudioFormat::ALL.iter().position(|f| *f == d))
        .unwrap_or(0);

    let selection = Select::new("Default audio format:", AudioFormat::ALL.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}
