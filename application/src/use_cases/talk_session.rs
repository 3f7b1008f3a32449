//! Talk session use case.
//!
//! Wraps a [`RefinementEngine`] for async callers (the CLI and the REPL):
//! composition, one instruction at a time, progress callbacks and the
//! conversation transcript.
//!
//! The engine sits behind a [`tokio::sync::Mutex`]. [`TalkSession::submit`]
//! uses `try_lock`, so a second instruction sent while one is still being
//! processed fails fast with [`SessionError::Busy`] instead of queueing.

use crate::config::SessionParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{NoProgress, TalkProgressNotifier};
use crate::use_cases::estimate::TalkEstimate;
use std::sync::Arc;
use talk_domain::core::string::truncate;
use talk_domain::{
    ConversationLog, Document, EngineError, EngineState, PreferenceSet, RefinementEngine,
    SubmitOutcome, TalkLength,
};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Errors that can occur while driving a [`TalkSession`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Still working on the previous instruction, please wait")]
    Busy,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl SessionError {
    /// Check if this error came from preference validation
    pub fn is_validation(&self) -> bool {
        matches!(self, SessionError::Engine(e) if e.is_validation())
    }
}

/// The composed talk together with its speaking-time estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedTalk {
    pub document: Document,
    pub estimate: TalkEstimate,
}

/// Use case for one composition-plus-refinement session.
pub struct TalkSession {
    engine: Mutex<RefinementEngine>,
    params: SessionParams,
    target: Mutex<Option<TalkLength>>,
    progress: Arc<dyn TalkProgressNotifier>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Default for TalkSession {
    fn default() -> Self {
        Self::new(RefinementEngine::new())
    }
}

impl TalkSession {
    pub fn new(engine: RefinementEngine) -> Self {
        Self {
            engine: Mutex::new(engine),
            params: SessionParams::default(),
            target: Mutex::new(None),
            progress: Arc::new(NoProgress),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_params(mut self, params: SessionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn TalkProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn params(&self) -> &SessionParams {
        &self.params
    }

    // ==================== Operations ====================

    /// Compose the initial talk from `prefs`.
    pub async fn start(&self, prefs: &PreferenceSet) -> Result<ComposedTalk, SessionError> {
        let mut engine = self.engine.try_lock().map_err(|_| SessionError::Busy)?;

        self.progress.on_compose_start(prefs.topic.trim());
        let document = match engine.start(prefs) {
            Ok(document) => document.clone(),
            Err(e) => {
                self.progress.on_compose_failed();
                return Err(e.into());
            }
        };
        self.progress.on_compose_complete(&document);

        *self.target.lock().await = prefs.length;
        let estimate = TalkEstimate::of(&document, prefs.length, self.params.words_per_minute);

        self.conversation_logger.log(ConversationEvent::TalkComposed {
            topic: document.title().to_string(),
            sections: document.section_kinds(),
            word_count: estimate.word_count,
            estimated_minutes: estimate.minutes,
            notes: prefs.additional_notes.clone(),
        });

        Ok(ComposedTalk { document, estimate })
    }

    /// Apply one refinement instruction.
    ///
    /// Blank instructions return [`SubmitOutcome::NoOp`] without any delay.
    pub async fn submit(&self, instruction: &str) -> Result<SubmitOutcome, SessionError> {
        let mut engine = self.engine.try_lock().map_err(|_| SessionError::Busy)?;

        if instruction.trim().is_empty() {
            let outcome = engine.submit_instruction(instruction)?;
            self.conversation_logger.log(ConversationEvent::InstructionIgnored {
                text: instruction.to_string(),
            });
            return Ok(outcome);
        }

        if engine.state() != EngineState::Ready {
            return Err(EngineError::NotReady(engine.state().as_str()).into());
        }

        let intent = engine.classify(instruction);
        info!(
            "Refining talk ({}): {}",
            intent.as_str(),
            truncate(instruction, 80)
        );
        let turn = engine.conversation().len() + 1;
        self.conversation_logger.log(ConversationEvent::UserInstruction {
            turn,
            text: instruction.to_string(),
            intent,
        });
        self.progress.on_refine_start(intent);

        if let Some(delay) = self.params.think_delay {
            debug!("Thinking for {:?}", delay);
            tokio::time::sleep(delay).await;
        }

        let outcome = engine.submit_instruction(instruction)?;
        if let SubmitOutcome::Reply(reply) = &outcome {
            self.progress.on_refine_complete(reply.intent, reply.changed);
            self.conversation_logger.log(ConversationEvent::AssistantResponse {
                turn: turn + 1,
                intent: reply.intent,
                response: reply.response.clone(),
                changed: reply.changed,
                word_count: reply.document.word_count(),
            });
        }
        Ok(outcome)
    }

    // ==================== Accessors ====================

    pub async fn state(&self) -> EngineState {
        self.engine.lock().await.state()
    }

    /// Snapshot of the current document
    pub async fn document(&self) -> Option<Document> {
        self.engine.lock().await.document().cloned()
    }

    /// Snapshot of the conversation so far
    pub async fn conversation(&self) -> ConversationLog {
        self.engine.lock().await.conversation().clone()
    }

    /// Estimate for `document` against the length chosen at start
    pub async fn estimate(&self, document: &Document) -> TalkEstimate {
        let target = *self.target.lock().await;
        TalkEstimate::of(document, target, self.params.words_per_minute)
    }
}
