//! Application-level configuration.
//!
//! - [`SessionParams`]: refinement session pacing and estimates

pub mod session_params;

pub use session_params::SessionParams;
