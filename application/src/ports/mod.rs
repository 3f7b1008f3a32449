//! Port definitions (interfaces) for external adapters
//!
//! Ports define the boundaries between the application layer
//! and infrastructure/presentation layers.

pub mod conversation_logger;
pub mod progress;
