//! Session parameters: refinement loop pacing.
//!
//! [`SessionParams`] groups the static parameters that control a
//! [`TalkSession`](crate::use_cases::talk_session::TalkSession).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use talk_domain::DEFAULT_WORDS_PER_MINUTE;

/// Refinement session parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Simulated "thinking" pause before each reply. `None` replies at once.
    pub think_delay: Option<Duration>,
    /// Speaking rate used for time estimates.
    pub words_per_minute: u32,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            think_delay: None,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl SessionParams {
    // ==================== Builder Methods ====================

    /// Zero disables the delay.
    pub fn with_think_delay_ms(mut self, millis: u64) -> Self {
        self.think_delay = (millis > 0).then(|| Duration::from_millis(millis));
        self
    }

    /// Zero keeps the current rate.
    pub fn with_words_per_minute(mut self, wpm: u32) -> Self {
        if wpm > 0 {
            self.words_per_minute = wpm;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = SessionParams::default();
        assert_eq!(params.think_delay, None);
        assert_eq!(params.words_per_minute, 130);
    }

    #[test]
    fn test_builder() {
        let params = SessionParams::default()
            .with_think_delay_ms(250)
            .with_words_per_minute(150);
        assert_eq!(params.think_delay, Some(Duration::from_millis(250)));
        assert_eq!(params.words_per_minute, 150);
    }

    #[test]
    fn test_zero_values() {
        let params = SessionParams::default()
            .with_think_delay_ms(0)
            .with_words_per_minute(0);
        assert_eq!(params.think_delay, None);
        assert_eq!(params.words_per_minute, 130);
    }
}
