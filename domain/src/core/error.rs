//! Domain error types

use thiserror::Error;

/// Errors raised when a [`PreferenceSet`](crate::PreferenceSet) cannot be
/// composed into a talk.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Topic is required: please enter a topic for your talk")]
    EmptyTopic,
}

/// Errors raised by the [`RefinementEngine`](crate::RefinementEngine) when it
/// is driven out of order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Session is not ready (current state: {0})")]
    NotReady(&'static str),
}

impl EngineError {
    /// Check if this error came from preference validation
    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation(_))
    }
}
