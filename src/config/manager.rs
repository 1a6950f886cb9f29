use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translation::{
    AudioFormat, DEFAULT_HOST, DEFAULT_PORT, InputType, OutputType, ProcessOptions,
    RawProcessOptions, TranslationClient,
};
use crate::ui::Style;

/// Server address settings in the `[server]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host name or URL of the MaryTTS server.
    pub host: Option<String>,
    /// Port of the MaryTTS server.
    pub port: Option<u16>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/mary/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerConfig,
    /// Default `process` options, as option keys.
    #[serde(default)]
    pub defaults: RawProcessOptions,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub host: String,
    pub port: u16,
    /// Merged option keys, not yet validated.
    pub options: RawProcessOptions,
}

impl ResolvedConfig {
    /// Validates the merged option keys, falling back to defaults.
    pub fn process_options(&self) -> ProcessOptions {
        self.options.resolve()
    }

    /// Builds a client for the resolved server address.
    pub fn client(&self) -> Result<TranslationClient> {
        Ok(TranslationClient::new(&self.host, self.port)?)
    }
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub options: RawProcessOptions,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over the built-in defaults (`localhost:59125`).
///
/// # Errors
///
/// Returns an error if the resolved host is empty or the port is zero.
/// Unknown option keys are not errors; they are reported and replaced by
/// the defaults when the options are resolved.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let host = options
        .host
        .as_ref()
        .or(config_file.server.host.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    if host.trim().is_empty() {
        bail!(
            "Invalid configuration: 'host' is empty\n\n\
             Please provide it via:\n  \
             - CLI option: mary --host <host>\n  \
             - Config file: ~/.config/mary/config.toml"
        );
    }

    let port = options
        .port
        .or(config_file.server.port)
        .unwrap_or(DEFAULT_PORT);

    if port == 0 {
        bail!(
            "Invalid configuration: 'port' must be between 1 and 65535\n\n\
             Please provide it via:\n  \
             - CLI option: mary --port <port>\n  \
             - Config file: ~/.config/mary/config.toml"
        );
    }

    let merged = options.options.clone().or(&config_file.defaults);
    warn_unknown_keys(&merged);

    Ok(ResolvedConfig {
        host,
        port,
        options: merged,
    })
}

fn warn_unknown_keys(options: &RawProcessOptions) {
    let checks = [
        ("input_type", options.input_type.as_deref(), InputType::keys()),
        ("output_type", options.output_type.as_deref(), OutputType::keys()),
        ("audio", options.audio.as_deref(), AudioFormat::keys()),
    ];

    for (name, value, keys) in checks {
        if let Some(value) = value
            && !keys.contains(&value)
        {
            crate::warn!(
                "{} Unknown {name} '{value}', using the default\n\
                 Valid values: {}\n",
                Style::warning("Warning:"),
                keys.join(", ")
            );
        }
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/mary/config.toml`
    /// or `~/.config/mary/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager backed by an explicit file.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            return ConfigFile::default();
        }

        self.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring unreadable config file");
            ConfigFile::default()
        })
    }
}
