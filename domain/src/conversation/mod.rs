//! Refinement conversation domain.
//!
//! - [`entities::ConversationTurn`]: one `{speaker, text}` turn
//! - [`entities::ConversationLog`]: append-only ordered turns

pub mod entities;
