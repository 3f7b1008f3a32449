//! Infrastructure layer for talk-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDefaultsConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig,
};
pub use logging::{JsonlConversationLogger, TranscriptRecord};
