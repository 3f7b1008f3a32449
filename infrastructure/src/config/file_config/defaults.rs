//! Default talk preferences from TOML (`[defaults]` section)

use serde::{Deserialize, Serialize};
use talk_domain::{Audience, ConfigIssue, PreferenceSet, TalkFormat, TalkLength};

/// Raw default preferences from TOML
///
/// # Example
///
/// ```toml
/// [defaults]
/// length = "10min"              # "5min", "10min", "15min", "20min"
/// format = "hybrid"             # "full", "outline", "hybrid"
/// audience = "adults"           # "general", "youth", "adults", "primary"
/// include_scriptures = true
/// include_quotes = false
/// include_concepts = true
/// personal_experiences = false
/// ```
///
/// Command-line flags override these values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDefaultsConfig {
    pub length: Option<String>,
    pub format: Option<String>,
    pub audience: Option<String>,
    pub include_scriptures: bool,
    pub include_quotes: bool,
    pub include_concepts: bool,
    pub personal_experiences: bool,
}

impl FileDefaultsConfig {
    /// Parse `length`, returning a warning on failure.
    pub fn parse_length(&self) -> (Option<TalkLength>, Vec<ConfigIssue>) {
        parse_optional(
            self.length.as_deref(),
            "defaults.length",
            &["5min", "10min", "15min", "20min"],
        )
    }

    /// Parse `format`, returning a warning on failure.
    pub fn parse_format(&self) -> (Option<TalkFormat>, Vec<ConfigIssue>) {
        parse_optional(
            self.format.as_deref(),
            "defaults.format",
            &["full", "outline", "hybrid"],
        )
    }

    /// Parse `audience`, returning a warning on failure.
    pub fn parse_audience(&self) -> (Option<Audience>, Vec<ConfigIssue>) {
        parse_optional(
            self.audience.as_deref(),
            "defaults.audience",
            &["general", "youth", "adults", "primary"],
        )
    }

    /// Build a preference set for `topic` from these defaults.
    ///
    /// Unknown enum values are left unset (see [`FileConfig::validate`](super::FileConfig::validate)).
    pub fn to_preferences(&self, topic: impl Into<String>) -> PreferenceSet {
        let mut prefs = PreferenceSet::new(topic);
        prefs.length = self.parse_length().0;
        prefs.format = self.parse_format().0;
        prefs.audience = self.parse_audience().0;
        prefs.include_scriptures = self.include_scriptures;
        prefs.include_quotes = self.include_quotes;
        prefs.include_concepts = self.include_concepts;
        prefs.personal_experiences = self.personal_experiences;
        prefs
    }
}

fn parse_optional<T>(
    value: Option<&str>,
    field: &str,
    valid_values: &[&str],
) -> (Option<T>, Vec<ConfigIssue>)
where
    T: std::str::FromStr,
{
    match value {
        None => (None, vec![]),
        Some(raw) => match raw.parse::<T>() {
            Ok(parsed) => (Some(parsed), vec![]),
            Err(_) => (
                None,
                vec![ConfigIssue::invalid_enum(field, raw, valid_values, "no default")],
            ),
        },
    }
}
