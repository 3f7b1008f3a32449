//! Interactive refinement module
//!
//! Provides a readline-based REPL for refining a composed talk.

mod repl;

pub use repl::{RefineRepl, ReplCommand};
