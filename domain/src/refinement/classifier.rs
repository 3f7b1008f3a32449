//! Intent classification for refinement instructions
//!
//! The engine depends only on the [`IntentClassifier`] trait. The shipped
//! [`KeywordIntentClassifier`] matches keywords in a fixed priority order;
//! a learned model can implement the same trait.

use super::intent::Intent;

/// Maps free-form instruction text to exactly one [`Intent`].
///
/// Implementations must be total: every input, including the empty string,
/// yields an intent.
pub trait IntentClassifier: Send + Sync {
    fn classify(&self, instruction: &str) -> Intent;
}

/// One keyword rule: any keyword found (case-insensitive substring) selects
/// the intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub intent: Intent,
    keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new<I, S>(intent: Intent, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            intent,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// `lowered` must already be lowercase
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Rule-based classifier: first matching rule wins.
///
/// Default priority:
///
/// | # | keywords | intent |
/// |---|----------|--------|
/// | 1 | `shorter` | [`Intent::ShortenRequest`] |
/// | 2 | `longer`, `more detail` | [`Intent::LengthenRequest`] |
/// | 3 | `scripture` | [`Intent::AddScriptureRequest`] |
/// | 4 | `simple`, `basic` | [`Intent::SimplifyLanguageRequest`] |
/// | - | (no match) | [`Intent::GenericRevisionRequest`] |
///
/// # Example
///
/// ```
/// use talk_domain::{Intent, IntentClassifier, KeywordIntentClassifier};
///
/// let classifier = KeywordIntentClassifier::default();
/// assert_eq!(classifier.classify("Make it SHORTER"), Intent::ShortenRequest);
/// assert_eq!(classifier.classify(""), Intent::GenericRevisionRequest);
/// ```
#[derive(Debug, Clone)]
pub struct KeywordIntentClassifier {
    rules: Vec<KeywordRule>,
    fallback: Intent,
}

impl Default for KeywordIntentClassifier {
    fn default() -> Self {
        Self {
            rules: vec![
                KeywordRule::new(Intent::ShortenRequest, ["shorter"]),
                KeywordRule::new(Intent::LengthenRequest, ["longer", "more detail"]),
                KeywordRule::new(Intent::AddScriptureRequest, ["scripture"]),
                KeywordRule::new(Intent::SimplifyLanguageRequest, ["simple", "basic"]),
            ],
            fallback: Intent::GenericRevisionRequest,
        }
    }
}

impl KeywordIntentClassifier {
    /// A classifier with no rules; everything maps to the fallback
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            fallback: Intent::GenericRevisionRequest,
        }
    }

    /// Append a rule with the lowest priority (still above the fallback)
    pub fn with_rule(mut self, rule: KeywordRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Insert a rule at `priority` (0 = checked first); clamps to the end
    pub fn with_rule_at(mut self, priority: usize, rule: KeywordRule) -> Self {
        let index = priority.min(self.rules.len());
        self.rules.insert(index, rule);
        self
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }
}

impl IntentClassifier for KeywordIntentClassifier {
    fn classify(&self, instruction: &str) -> Intent {
        let lowered = instruction.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.intent)
            .unwrap_or(self.fallback)
    }
}
