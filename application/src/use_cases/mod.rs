//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod estimate;
pub mod talk_session;
