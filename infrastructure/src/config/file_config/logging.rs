//! Log destinations from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::Path;
use talk_domain::ConfigIssue;

/// Raw logging configuration from TOML
///
/// ```toml
/// [logging]
/// conversation_log = "talk.conversation.jsonl"   # JSONL refinement transcript
/// log_file = "talk-assistant.log"                 # tracing output instead of stderr
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    pub conversation_log: Option<String>,
    pub log_file: Option<String>,
}

impl FileLoggingConfig {
    /// The transcript and the tracing log can't share a file
    pub fn validate(&self) -> Option<ConfigIssue> {
        match (&self.conversation_log, &self.log_file) {
            (Some(transcript), Some(log_file)) if Path::new(transcript) == Path::new(log_file) => {
                Some(ConfigIssue::conflicting_paths(
                    "logging.conversation_log",
                    "logging.log_file",
                    transcript,
                ))
            }
            _ => None,
        }
    }
}
