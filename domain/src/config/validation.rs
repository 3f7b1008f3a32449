//! Structured configuration issues.
//!
//! Config loaders report problems as a list of [`ConfigIssue`]s instead of
//! failing on the first one, so every mistake in a file is shown at once.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot be used.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field that maps to an enum holds an unknown value.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A numeric field must be greater than zero.
    ZeroValue { field: String },
    /// Two output paths point at the same file.
    ConflictingPaths { first: String, second: String },
}

/// A detected issue in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    /// Warning for an unknown enum value; `fallback` names the value used instead.
    pub fn invalid_enum(field: &str, value: &str, valid_values: &[&str], fallback: &str) -> Self {
        Self {
            severity: Severity::Warning,
            code: ConfigIssueCode::InvalidEnumValue {
                field: field.to_string(),
                value: value.to_string(),
                valid_values: valid_values.iter().map(|v| v.to_string()).collect(),
            },
            message: format!(
                "{}: unknown value '{}', falling back to {}",
                field, value, fallback
            ),
        }
    }

    /// Error for two fields that name the same file.
    pub fn conflicting_paths(first: &str, second: &str, path: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: ConfigIssueCode::ConflictingPaths {
                first: first.to_string(),
                second: second.to_string(),
            },
            message: format!("{} and {} both point to '{}'", first, second, path),
        }
    }

    /// Whether any issue in `issues` is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity.as_str(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_wpm() -> ConfigIssue {
        ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::ZeroValue {
                field: "output.words_per_minute".to_string(),
            },
            message: "output.words_per_minute must be greater than zero".to_string(),
        }
    }

    #[test]
    fn invalid_enum_is_warning() {
        let issue = ConfigIssue::invalid_enum("defaults.format", "prose", &["full", "outline"], "no default");
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(
            issue.message,
            "defaults.format: unknown value 'prose', falling back to no default"
        );
        match issue.code {
            ConfigIssueCode::InvalidEnumValue { valid_values, .. } => {
                assert_eq!(valid_values, vec!["full", "outline"]);
            }
            other => panic!("unexpected code {:?}", other),
        }
    }

    #[test]
    fn has_errors_returns_true_for_errors() {
        let issues = vec![
            ConfigIssue::invalid_enum("defaults.audience", "teens", &["youth"], "no default"),
            zero_wpm(),
        ];
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn conflicting_paths_is_error() {
        let issue = ConfigIssue::conflicting_paths("logging.conversation_log", "logging.log_file", "talk.log");
        assert!(ConfigIssue::has_errors(std::slice::from_ref(&issue)));
        assert_eq!(
            issue.to_string(),
            "error: logging.conversation_log and logging.log_file both point to 'talk.log'"
        );
    }

    #[test]
    fn has_errors_returns_false_for_warnings_only() {
        let issues = vec![ConfigIssue::invalid_enum("output.format", "xml", &["text"], "'text'")];
        assert!(!ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn has_errors_returns_false_for_empty() {
        assert!(!ConfigIssue::has_errors(&[]));
    }

    #[test]
    fn display_includes_severity() {
        assert_eq!(
            zero_wpm().to_string(),
            "error: output.words_per_minute must be greater than zero"
        );
    }
}
