//! Talk document domain.
//!
//! A [`Document`](entities::Document) is a title plus ordered
//! [`Section`](section::Section)s, each identified by a stable
//! [`SectionKind`](section::SectionKind). Sections hold [`Block`](block::Block)s:
//! paragraphs of sentences, bullets, or citations.
//!
//! Rendered text uses a small marker set consumed by external renderers:
//!
//! | marker | meaning |
//! |--------|---------|
//! | `# ` | document title (first line only) |
//! | `## ` | section header |
//! | `> ` | quoted or scriptural material |
//! | `• ` | bullet item |
//! | blank line | paragraph or section break |

pub mod block;
pub mod entities;
pub mod section;

pub use block::{BULLET_MARKER, Block, Citation, Insertion, Paragraph, QUOTE_MARKER, Sentence};
pub use entities::{DEFAULT_WORDS_PER_MINUTE, Document};
pub use section::{Section, SectionKind};
