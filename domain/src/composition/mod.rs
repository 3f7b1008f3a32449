//! Talk composition.
//!
//! [`composer::compose`] turns a [`PreferenceSet`](crate::PreferenceSet) into
//! the initial [`Document`](crate::Document). Section text lives in
//! [`templates::TalkTemplate`].

pub mod composer;
pub mod templates;

pub use composer::compose;
pub use templates::TalkTemplate;
