//! Application layer for talk-assistant
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    conversation_logger::{
        ConversationEvent, ConversationLogger, MemoryConversationLogger, NoConversationLogger,
    },
    progress::{NoProgress, TalkProgressNotifier},
};
pub use use_cases::estimate::TalkEstimate;
pub use use_cases::talk_session::{ComposedTalk, SessionError, TalkSession};
