//! Speaking-time estimate for a talk.

use serde::{Deserialize, Serialize};
use talk_domain::{Document, TalkLength};

/// Word count and speaking time of a document, with the requested target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalkEstimate {
    pub word_count: usize,
    pub minutes: u32,
    /// Requested length in minutes, when one was chosen
    pub target_minutes: Option<u32>,
}

impl TalkEstimate {
    pub fn of(document: &Document, target: Option<TalkLength>, words_per_minute: u32) -> Self {
        Self {
            word_count: document.word_count(),
            minutes: document.estimated_minutes(words_per_minute),
            target_minutes: target.map(|t| t.minutes()),
        }
    }

    /// Whether the estimate runs past the requested length
    pub fn is_over_target(&self) -> bool {
        self.target_minutes.is_some_and(|t| self.minutes > t)
    }
}

impl std::fmt::Display for TalkEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "~{} words, about {} min", self.word_count, self.minutes)?;
        if let Some(target) = self.target_minutes {
            write!(f, " (target {} min)", target)?;
        }
        Ok(())
    }
}
