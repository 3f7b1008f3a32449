//! Progress notification port
//!
//! Defines the interface for reporting progress while a talk is composed
//! and refined.

use talk_domain::{Document, Intent};

/// Callback for progress updates during a talk session
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain lines, etc.)
pub trait TalkProgressNotifier: Send + Sync {
    /// Called before the initial talk is composed
    fn on_compose_start(&self, topic: &str);

    /// Called once the initial talk is ready
    fn on_compose_complete(&self, document: &Document);

    /// Called when composition was rejected, e.g. for a blank topic
    fn on_compose_failed(&self);

    /// Called after an instruction is classified, before it is applied
    fn on_refine_start(&self, intent: Intent);

    /// Called when a refinement finished; `changed` is false for a no-op edit
    fn on_refine_complete(&self, intent: Intent, changed: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl TalkProgressNotifier for NoProgress {
    fn on_compose_start(&self, _topic: &str) {}
    fn on_compose_complete(&self, _document: &Document) {}
    fn on_compose_failed(&self) {}
    fn on_refine_start(&self, _intent: Intent) {}
    fn on_refine_complete(&self, _intent: Intent, _changed: bool) {}
}
