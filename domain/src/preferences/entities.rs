//! Preference set entity

use super::value_objects::{Audience, TalkFormat, TalkLength, Topic};
use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// The user's choices that drive composition.
///
/// Built by the presentation layer (CLI flags merged over config defaults).
/// The topic is held as raw text; [`PreferenceSet::validated_topic`] is the
/// gate the composer goes through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceSet {
    pub topic: String,
    pub length: Option<TalkLength>,
    pub format: Option<TalkFormat>,
    pub audience: Option<Audience>,
    pub include_scriptures: bool,
    pub include_quotes: bool,
    pub include_concepts: bool,
    pub personal_experiences: bool,
    pub additional_notes: Option<String>,
}

impl PreferenceSet {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_length(mut self, length: TalkLength) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_format(mut self, format: TalkFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_audience(mut self, audience: Audience) -> Self {
        self.audience = Some(audience);
        self
    }

    pub fn with_scriptures(mut self) -> Self {
        self.include_scriptures = true;
        self
    }

    pub fn with_quotes(mut self) -> Self {
        self.include_quotes = true;
        self
    }

    pub fn with_concepts(mut self) -> Self {
        self.include_concepts = true;
        self
    }

    pub fn with_personal_experiences(mut self) -> Self {
        self.personal_experiences = true;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.additional_notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    // ==================== Validation ====================

    /// Return the topic as a validated [`Topic`].
    pub fn validated_topic(&self) -> Result<Topic, ValidationError> {
        Topic::new(self.topic.clone())
    }

    pub fn is_valid(&self) -> bool {
        self.validated_topic().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_all_off() {
        let prefs = PreferenceSet::new("Faith");
        assert_eq!(prefs.topic, "Faith");
        assert!(prefs.length.is_none());
        assert!(prefs.format.is_none());
        assert!(prefs.audience.is_none());
        assert!(!prefs.include_scriptures);
        assert!(!prefs.include_quotes);
        assert!(!prefs.include_concepts);
        assert!(!prefs.personal_experiences);
        assert!(prefs.additional_notes.is_none());
    }

    #[test]
    fn test_builder_sets_fields() {
        let prefs = PreferenceSet::new("Service")
            .with_length(TalkLength::TenMinutes)
            .with_format(TalkFormat::Full)
            .with_audience(Audience::Youth)
            .with_scriptures()
            .with_quotes()
            .with_concepts()
            .with_personal_experiences()
            .with_notes("Mention the ward service project");

        assert_eq!(prefs.length, Some(TalkLength::TenMinutes));
        assert_eq!(prefs.format, Some(TalkFormat::Full));
        assert_eq!(prefs.audience, Some(Audience::Youth));
        assert!(prefs.include_scriptures && prefs.include_quotes);
        assert!(prefs.include_concepts && prefs.personal_experiences);
        assert_eq!(
            prefs.additional_notes.as_deref(),
            Some("Mention the ward service project")
        );
    }

    #[test]
    fn test_blank_notes_are_dropped() {
        let prefs = PreferenceSet::new("Faith").with_notes("   ");
        assert!(prefs.additional_notes.is_none());
    }

    #[test]
    fn test_validated_topic() {
        assert!(PreferenceSet::new("Gratitude").is_valid());
        assert_eq!(
            PreferenceSet::new(" ").validated_topic(),
            Err(ValidationError::EmptyTopic)
        );
        assert!(!PreferenceSet::default().is_valid());
    }

    #[test]
    fn test_deserialize_partial() {
        let prefs: PreferenceSet =
            serde_json::from_str(r#"{"topic":"Hope","format":"hybrid","include_quotes":true}"#)
                .unwrap();
        assert_eq!(prefs.topic, "Hope");
        assert_eq!(prefs.format, Some(TalkFormat::Hybrid));
        assert!(prefs.include_quotes);
        assert!(!prefs.include_scriptures);
    }
}
