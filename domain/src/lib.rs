//! Domain layer for talk-assistant
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Composition
//!
//! A [`PreferenceSet`] (topic, length, format, audience, inclusion flags) is
//! turned into a structured [`Document`] by [`compose`]. Composition is
//! deterministic: the same preferences always yield the same talk.
//!
//! ## Refinement
//!
//! The [`RefinementEngine`] takes free-form instructions ("make it shorter"),
//! classifies each into an [`Intent`] and applies the matching
//! [`Transformation`]. Every instruction and reply is kept in a
//! [`ConversationLog`].

pub mod composition;
pub mod config;
pub mod conversation;
pub mod core;
pub mod document;
pub mod preferences;
pub mod refinement;

// Re-export commonly used types
pub use composition::{TalkTemplate, compose};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use conversation::entities::{ConversationLog, ConversationTurn, Speaker};
pub use core::error::{EngineError, ValidationError};
pub use document::{
    BULLET_MARKER, Block, Citation, DEFAULT_WORDS_PER_MINUTE, Document, Insertion, Paragraph,
    QUOTE_MARKER, Section, SectionKind, Sentence,
};
pub use preferences::{
    entities::PreferenceSet,
    value_objects::{Audience, TalkFormat, TalkLength, Topic},
};
pub use refinement::{
    classifier::{IntentClassifier, KeywordIntentClassifier, KeywordRule},
    engine::{EngineState, RefinementEngine, RefinementReply, SubmitOutcome},
    intent::Intent,
    registry::TransformationRegistry,
    transformation::{Revision, Transformation},
};
