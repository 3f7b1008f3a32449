//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording session events
//! (composed talks, user instructions, assistant replies) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! refinement transcript in a machine-readable format (JSONL).

use serde::Serialize;
use std::sync::Mutex;
use talk_domain::{Intent, SectionKind, Speaker};

/// One entry of the refinement transcript.
///
/// Serialized with a `type` tag, so a JSONL line reads
/// `{"type":"user_instruction","turn":1,...}`. Timestamps are added by the
/// logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// The initial talk was composed
    TalkComposed {
        topic: String,
        sections: Vec<SectionKind>,
        word_count: usize,
        estimated_minutes: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    /// A non-blank instruction, appended as conversation turn `turn` (1-based)
    UserInstruction {
        turn: usize,
        text: String,
        intent: Intent,
    },
    /// The assistant's reply to the instruction one turn earlier
    AssistantResponse {
        turn: usize,
        intent: Intent,
        response: String,
        changed: bool,
        word_count: usize,
    },
    /// A blank instruction; nothing was appended to the conversation
    InstructionIgnored { text: String },
}

impl ConversationEvent {
    /// The `type` tag this event serializes with
    pub fn event_type(&self) -> &'static str {
        match self {
            ConversationEvent::TalkComposed { .. } => "talk_composed",
            ConversationEvent::UserInstruction { .. } => "user_instruction",
            ConversationEvent::AssistantResponse { .. } => "assistant_response",
            ConversationEvent::InstructionIgnored { .. } => "instruction_ignored",
        }
    }

    /// Who spoke, for events that are conversation turns
    pub fn speaker(&self) -> Option<Speaker> {
        match self {
            ConversationEvent::UserInstruction { .. } => Some(Speaker::User),
            ConversationEvent::AssistantResponse { .. } => Some(Speaker::Assistant),
            _ => None,
        }
    }

    /// Conversation turn index, for events that are conversation turns
    pub fn turn(&self) -> Option<usize> {
        match self {
            ConversationEvent::UserInstruction { turn, .. }
            | ConversationEvent::AssistantResponse { turn, .. } => Some(*turn),
            _ => None,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// `log` is synchronous and non-fallible; logging failures never interrupt
/// a session.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

/// Keeps events in memory, mostly for assertions in tests.
#[derive(Default)]
pub struct MemoryConversationLogger {
    events: Mutex<Vec<ConversationEvent>>,
}

impl MemoryConversationLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ConversationEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Event types in the order they were logged
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events()
            .iter()
            .map(ConversationEvent::event_type)
            .collect()
    }
}

impl ConversationLogger for MemoryConversationLogger {
    fn log(&self, event: ConversationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
