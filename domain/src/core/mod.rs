//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`]: preference validation failures
//! - [`error::EngineError`]: refinement engine misuse
//! - [`string`]: small text helpers (truncation, word counting)

pub mod error;
pub mod string;
