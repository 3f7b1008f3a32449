//! Refinement domain: turning a free-form instruction into an edited talk.
//!
//! ```text
//! instruction ──IntentClassifier──▶ Intent ──TransformationRegistry──▶ Transformation
//!                                                                          │
//!              Document ◀────────────────── Revision { document, response }┘
//! ```
//!
//! [`engine::RefinementEngine`] owns the loop and the conversation log.

pub mod classifier;
pub mod engine;
pub mod intent;
pub mod registry;
pub mod transformation;
pub mod transforms;
