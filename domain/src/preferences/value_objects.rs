//! Preference value objects

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// The subject of a talk (Value Object)
///
/// Always holds non-blank text. The original spelling is kept verbatim so
/// it can be interpolated into the talk unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic(String);

impl Topic {
    /// Create a topic, rejecting empty or whitespace-only text
    pub fn new(content: impl Into<String>) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(ValidationError::EmptyTopic)
        } else {
            Ok(Self(content))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Topic {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Topic::new(value)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.0
    }
}

/// Target speaking time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TalkLength {
    #[serde(rename = "5min")]
    FiveMinutes,
    #[serde(rename = "10min")]
    TenMinutes,
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[serde(rename = "20min")]
    TwentyMinutes,
}

impl TalkLength {
    pub fn minutes(&self) -> u32 {
        match self {
            TalkLength::FiveMinutes => 5,
            TalkLength::TenMinutes => 10,
            TalkLength::FifteenMinutes => 15,
            TalkLength::TwentyMinutes => 20,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TalkLength::FiveMinutes => "5min",
            TalkLength::TenMinutes => "10min",
            TalkLength::FifteenMinutes => "15min",
            TalkLength::TwentyMinutes => "20min",
        }
    }
}

impl std::fmt::Display for TalkLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} minutes", self.minutes())
    }
}

impl std::str::FromStr for TalkLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.trim_end_matches("min").trim() {
            "5" => Ok(TalkLength::FiveMinutes),
            "10" => Ok(TalkLength::TenMinutes),
            "15" => Ok(TalkLength::FifteenMinutes),
            "20" => Ok(TalkLength::TwentyMinutes),
            _ => Err(format!(
                "Unknown talk length: {}. Valid: 5min, 10min, 15min, 20min",
                s
            )),
        }
    }
}

/// How the introduction and application sections are written
///
/// | format | introduction | application |
/// |--------|--------------|-------------|
/// | `Full` | prose | prose |
/// | `Outline` | bullets | bullets |
/// | `Hybrid` | prose | bullets |
///
/// An unset format renders like `Outline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TalkFormat {
    /// Word-for-word talk
    Full,
    /// Talking points and outline
    Outline,
    /// Key sections in prose, the rest as points
    Hybrid,
}

impl TalkFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TalkFormat::Full => "full",
            TalkFormat::Outline => "outline",
            TalkFormat::Hybrid => "hybrid",
        }
    }
}

impl std::fmt::Display for TalkFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TalkFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(TalkFormat::Full),
            "outline" => Ok(TalkFormat::Outline),
            "hybrid" => Ok(TalkFormat::Hybrid),
            _ => Err(format!(
                "Unknown talk format: {}. Valid: full, outline, hybrid",
                s
            )),
        }
    }
}

/// Who the talk is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// General congregation
    General,
    /// Youth and young adults
    Youth,
    Adults,
    /// Primary children
    Primary,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::General => "general",
            Audience::Youth => "youth",
            Audience::Adults => "adults",
            Audience::Primary => "primary",
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Audience::General),
            "youth" => Ok(Audience::Youth),
            "adults" => Ok(Audience::Adults),
            "primary" => Ok(Audience::Primary),
            _ => Err(format!(
                "Unknown audience: {}. Valid: general, youth, adults, primary",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_rejects_blank() {
        assert_eq!(Topic::new(""), Err(ValidationError::EmptyTopic));
        assert_eq!(Topic::new("   \t"), Err(ValidationError::EmptyTopic));
    }

    #[test]
    fn test_topic_keeps_spelling() {
        let topic = Topic::new("  the Atonement ").unwrap();
        assert_eq!(topic.as_str(), "  the Atonement ");
    }

    #[test]
    fn test_topic_deserialize_validates() {
        let ok: Result<Topic, _> = serde_json::from_str("\"Faith\"");
        assert_eq!(ok.unwrap().as_str(), "Faith");
        let err: Result<Topic, _> = serde_json::from_str("\"  \"");
        assert!(err.is_err());
    }

    #[test]
    fn test_parse_length() {
        assert_eq!("5min".parse::<TalkLength>(), Ok(TalkLength::FiveMinutes));
        assert_eq!("10".parse::<TalkLength>(), Ok(TalkLength::TenMinutes));
        assert_eq!("15 MIN".parse::<TalkLength>(), Ok(TalkLength::FifteenMinutes));
        assert!("7min".parse::<TalkLength>().is_err());
        assert_eq!(TalkLength::TwentyMinutes.minutes(), 20);
    }

    #[test]
    fn test_length_serde_matches_form_values() {
        let json = serde_json::to_string(&TalkLength::TenMinutes).unwrap();
        assert_eq!(json, "\"10min\"");
        let parsed: TalkLength = serde_json::from_str("\"20min\"").unwrap();
        assert_eq!(parsed, TalkLength::TwentyMinutes);
    }

    #[test]
    fn test_parse_format_and_audience() {
        assert_eq!("Hybrid".parse::<TalkFormat>(), Ok(TalkFormat::Hybrid));
        assert!("prose".parse::<TalkFormat>().is_err());
        assert_eq!("PRIMARY".parse::<Audience>(), Ok(Audience::Primary));
        assert!("seniors".parse::<Audience>().is_err());
    }

    #[test]
    fn test_format_serialize_lowercase() {
        let json = serde_json::to_string(&TalkFormat::Outline).unwrap();
        assert_eq!(json, "\"outline\"");
    }
}
