//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use talk_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_WORDS_PER_MINUTE, OutputFormat, Severity};

// Re-export OutputFormat from domain for convenience
pub use talk_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Speaking rate for time estimates
    pub words_per_minute: u32,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl FileOutputConfig {
    /// Speaking rate, falling back to the default when zero.
    pub fn words_per_minute(&self) -> (u32, Vec<ConfigIssue>) {
        if self.words_per_minute > 0 {
            return (self.words_per_minute, vec![]);
        }
        let issue = ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::ZeroValue {
                field: "output.words_per_minute".to_string(),
            },
            message: format!(
                "output.words_per_minute: must be greater than zero, falling back to {}",
                DEFAULT_WORDS_PER_MINUTE
            ),
        };
        (DEFAULT_WORDS_PER_MINUTE, vec![issue])
    }
}
