//! Configuration file loading for talk-assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./talk.toml` or `./.talk.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/talk-assistant/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDefaultsConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FileReplConfig,
};
pub use loader::ConfigLoader;
