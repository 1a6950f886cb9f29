//! Configuration file management and CLI/file/default resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, ServerConfig, resolve_config,
};
