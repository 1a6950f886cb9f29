//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Voice and locale listing command handlers.
pub mod listing;

/// Phoneme lookup command handler.
pub mod phonemes;

/// Process command handler.
pub mod process;

/// Option type listing command handler.
pub mod types;

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Loads the config file and merges `options` over it.
pub fn load_resolved_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();
    resolve_config(options, &file_config)
}

/// Display width of the widest name, counted in characters.
pub(crate) fn column_width<'a>(names: impl IntoIterator<Item = &'a String>) -> usize {
    names
        .into_iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_width_counts_chars() {
        let names = ["bits1-hsmm".to_string(), "dfki-spike-über".to_string()];
        assert_eq!(column_width(&names), 15);
        assert_eq!(column_width(&Vec::<String>::new()), 0);
    }
}
