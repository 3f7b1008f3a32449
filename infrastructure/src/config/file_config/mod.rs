//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod defaults;
mod logging;
mod output;
mod repl;

pub use defaults::FileDefaultsConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use talk_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Default talk preferences
    pub defaults: FileDefaultsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Enum parse failures for `[defaults]` (length, format, audience)
    /// 2. A zero speaking rate in `[output]`
    /// 3. `[logging]` paths that point at the same file (fatal)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Enum parse validation
        issues.extend(self.defaults.parse_length().1);
        issues.extend(self.defaults.parse_format().1);
        issues.extend(self.defaults.parse_audience().1);

        // 2. Speaking rate
        issues.extend(self.output.words_per_minute().1);

        // 3. Log destinations
        issues.extend(self.logging.validate());

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talk_domain::{Audience, ConfigIssueCode, OutputFormat, Severity, TalkFormat, TalkLength};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[defaults]
length = "15min"
format = "hybrid"
audience = "youth"
include_scriptures = true
include_quotes = true

[output]
format = "plain"
color = false
words_per_minute = 150

[repl]
show_progress = false
history_file = "~/.local/share/talk-assistant/history.txt"
think_delay_ms = 500

[logging]
conversation_log = "talk.conversation.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.defaults.parse_length().0, Some(TalkLength::FifteenMinutes));
        assert_eq!(config.defaults.parse_format().0, Some(TalkFormat::Hybrid));
        assert_eq!(config.defaults.parse_audience().0, Some(Audience::Youth));
        assert!(config.defaults.include_scriptures);
        assert!(config.defaults.include_quotes);
        assert!(!config.defaults.include_concepts);
        assert_eq!(config.output.format, Some(OutputFormat::Plain));
        assert!(!config.output.color);
        assert_eq!(config.output.words_per_minute().0, 150);
        assert!(!config.repl.show_progress);
        assert_eq!(config.repl.think_delay_ms, 500);
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some("talk.conversation.jsonl")
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[defaults]
audience = "primary"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.defaults.parse_audience().0, Some(Audience::Primary));
        // Defaults should apply
        assert!(config.defaults.length.is_none());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert_eq!(config.output.words_per_minute, 130);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.defaults.length.is_none());
        assert!(config.output.format.is_none());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert_eq!(config.repl.think_delay_ms, 0);
        assert!(config.logging.conversation_log.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_rejects_shared_log_file() {
        let toml_str = r#"
[defaults]
format = "essay"

[logging]
conversation_log = "talk.log"
log_file = "talk.log"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(ConfigIssue::has_errors(&issues));
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[1].code,
            ConfigIssueCode::ConflictingPaths {
                first: "logging.conversation_log".to_string(),
                second: "logging.log_file".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let toml_str = r#"
[defaults]
length = "45min"
format = "essay"
audience = "everyone"

[output]
words_per_minute = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert!(!ConfigIssue::has_errors(&issues));

        let fields: Vec<String> = issues
            .iter()
            .map(|i| match &i.code {
                ConfigIssueCode::InvalidEnumValue { field, .. } => field.clone(),
                ConfigIssueCode::ZeroValue { field } => field.clone(),
                ConfigIssueCode::ConflictingPaths { first, .. } => first.clone(),
            })
            .collect();
        assert_eq!(
            fields,
            vec![
                "defaults.length",
                "defaults.format",
                "defaults.audience",
                "output.words_per_minute"
            ]
        );
    }
}
