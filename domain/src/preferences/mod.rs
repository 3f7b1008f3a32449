//! Talk preferences domain.
//!
//! - [`entities::PreferenceSet`]: the choices that drive composition
//! - [`value_objects::Topic`]: validated, non-blank topic text
//! - [`value_objects::TalkLength`], [`value_objects::TalkFormat`],
//!   [`value_objects::Audience`]: optional enumerated choices

pub mod entities;
pub mod value_objects;
