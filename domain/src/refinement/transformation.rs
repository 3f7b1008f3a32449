//! Transformation contract

use crate::document::Document;
use serde::{Deserialize, Serialize};

/// Result of applying a [`Transformation`]: the next document plus the
/// assistant's acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    pub document: Document,
    pub response: String,
    /// `false` when the document came back structurally identical
    pub changed: bool,
}

impl Revision {
    pub fn changed(document: Document, response: impl Into<String>) -> Self {
        Self {
            document,
            response: response.into(),
            changed: true,
        }
    }

    pub fn unchanged(document: &Document, response: impl Into<String>) -> Self {
        Self {
            document: document.clone(),
            response: response.into(),
            changed: false,
        }
    }

    /// Build a revision, deriving `changed` by comparing with the input.
    pub fn compare(
        before: &Document,
        after: Document,
        changed_response: impl Into<String>,
        unchanged_response: impl Into<String>,
    ) -> Self {
        if &after == before {
            Self::unchanged(before, unchanged_response)
        } else {
            Self::changed(after, changed_response)
        }
    }
}

/// One intent's edit policy (`Document -> Document`).
///
/// Implementations are pure and total: a missing target section or anchor
/// yields [`Revision::unchanged`], never an error. The instruction text is
/// passed through for acknowledgments.
pub trait Transformation: Send + Sync {
    fn apply(&self, document: &Document, instruction: &str) -> Revision;
}
