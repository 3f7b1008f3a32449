//! Refinement engine: the per-session state machine
//!
//! ```text
//! Idle ──start──▶ AwaitingComposition ──ok──▶ Ready ──submit──▶ Refining
//!   ▲                     │                     ▲                  │
//!   └──ValidationError────┘                     └──────────────────┘
//! ```

use super::classifier::{IntentClassifier, KeywordIntentClassifier};
use super::intent::Intent;
use super::registry::TransformationRegistry;
use crate::composition::compose;
use crate::conversation::entities::{ConversationLog, ConversationTurn};
use crate::core::error::EngineError;
use crate::core::string::truncate;
use crate::document::Document;
use crate::preferences::entities::PreferenceSet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Lifecycle state of a refinement session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    Idle,
    AwaitingComposition,
    Ready,
    Refining,
}

impl EngineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineState::Idle => "idle",
            EngineState::AwaitingComposition => "awaiting_composition",
            EngineState::Ready => "ready",
            EngineState::Refining => "refining",
        }
    }
}

impl std::fmt::Display for EngineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reply to an applied instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementReply {
    pub document: Document,
    pub response: String,
    pub intent: Intent,
    /// `false` when the transformation found nothing to change
    pub changed: bool,
}

/// Outcome of [`RefinementEngine::submit_instruction`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The instruction was classified, applied and logged
    Reply(RefinementReply),
    /// Blank instruction: state and log untouched
    NoOp,
}

impl SubmitOutcome {
    pub fn is_noop(&self) -> bool {
        matches!(self, SubmitOutcome::NoOp)
    }

    pub fn reply(&self) -> Option<&RefinementReply> {
        match self {
            SubmitOutcome::Reply(reply) => Some(reply),
            SubmitOutcome::NoOp => None,
        }
    }
}

/// Orchestrates classification, transformation and logging for one session.
///
/// Owns the current [`Document`] and the [`ConversationLog`]. Mutating
/// methods take `&mut self`, so two instructions can never be in flight on
/// the same engine at once.
pub struct RefinementEngine {
    state: EngineState,
    document: Option<Document>,
    log: ConversationLog,
    classifier: Arc<dyn IntentClassifier>,
    registry: TransformationRegistry,
}

impl Default for RefinementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RefinementEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefinementEngine")
            .field("state", &self.state)
            .field("turns", &self.log.len())
            .field("registry", &self.registry)
            .finish()
    }
}

impl RefinementEngine {
    pub fn new() -> Self {
        Self {
            state: EngineState::Idle,
            document: None,
            log: ConversationLog::new(),
            classifier: Arc::new(KeywordIntentClassifier::default()),
            registry: TransformationRegistry::default(),
        }
    }

    /// Swap in another intent classifier (e.g. a learned model)
    pub fn with_classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_registry(mut self, registry: TransformationRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The current document (`None` until composition succeeds)
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn conversation(&self) -> &ConversationLog {
        &self.log
    }

    /// The intent an instruction would be handled as, without applying it
    pub fn classify(&self, instruction: &str) -> Intent {
        self.classifier.classify(instruction)
    }

    /// Compose the initial document and move to `Ready`.
    ///
    /// On a validation failure the engine returns to `Idle` with no document.
    pub fn start(&mut self, prefs: &PreferenceSet) -> Result<&Document, EngineError> {
        if self.state != EngineState::Idle {
            return Err(EngineError::NotReady(self.state.as_str()));
        }

        self.state = EngineState::AwaitingComposition;
        match compose(prefs) {
            Ok(document) => {
                info!(
                    "Composed talk '{}' ({} sections, {} words)",
                    document.title(),
                    document.sections().len(),
                    document.word_count()
                );
                self.state = EngineState::Ready;
                Ok(self.document.insert(document))
            }
            Err(e) => {
                self.state = EngineState::Idle;
                Err(e.into())
            }
        }
    }

    /// Apply one refinement instruction to the current document.
    ///
    /// Only valid in `Ready`. A blank instruction is a [`SubmitOutcome::NoOp`]
    /// and leaves state and log untouched. Otherwise a user turn and an
    /// assistant turn are appended and the document is replaced.
    pub fn submit_instruction(&mut self, instruction: &str) -> Result<SubmitOutcome, EngineError> {
        if self.state != EngineState::Ready {
            return Err(EngineError::NotReady(self.state.as_str()));
        }
        let Some(current) = self.document.as_ref() else {
            return Err(EngineError::NotReady(self.state.as_str()));
        };

        if instruction.trim().is_empty() {
            debug!("Ignoring blank instruction");
            return Ok(SubmitOutcome::NoOp);
        }

        self.state = EngineState::Refining;

        let intent = self.classifier.classify(instruction);
        debug!(
            "Classified '{}' as {}",
            truncate(instruction, 60),
            intent.as_str()
        );

        let revision = self.registry.apply(intent, current, instruction);
        info!(
            "Applied {} (changed: {}, {} words)",
            intent.as_str(),
            revision.changed,
            revision.document.word_count()
        );

        self.log.append(ConversationTurn::user(instruction));
        self.log.append(ConversationTurn::assistant(revision.response.clone()));
        self.document = Some(revision.document.clone());
        self.state = EngineState::Ready;

        Ok(SubmitOutcome::Reply(RefinementReply {
            document: revision.document,
            response: revision.response,
            intent,
            changed: revision.changed,
        }))
    }
}
