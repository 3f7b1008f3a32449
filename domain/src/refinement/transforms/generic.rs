//! Generic revision: acknowledge the request and make one safe touch-up

use crate::document::{Block, Document, SectionKind};
use crate::refinement::transformation::{Revision, Transformation};

const TOUCH_UP_FROM: &str = "I want to bear my testimony";
const TOUCH_UP_TO: &str = "I humbly bear my testimony";

/// Fallback for instructions no specific rule recognised.
///
/// Softens the first sentence of the testimony and echoes the request back.
/// When the phrase is no longer there, it says plainly that nothing changed.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericRevisionTransformation;

impl Transformation for GenericRevisionTransformation {
    fn apply(&self, document: &Document, instruction: &str) -> Revision {
        let mut touched = false;
        let next = document.edit_section(SectionKind::Testimony, |section| {
            let sentence = section
                .blocks
                .iter_mut()
                .filter_map(|block| match block {
                    Block::Paragraph(p) => Some(p),
                    _ => None,
                })
                .flat_map(|p| p.sentences.iter_mut())
                .find(|s| s.text.contains(TOUCH_UP_FROM));
            if let Some(sentence) = sentence {
                sentence.text = sentence.text.replacen(TOUCH_UP_FROM, TOUCH_UP_TO, 1);
                touched = true;
            }
        });

        let request = instruction.trim();
        if touched {
            Revision::changed(
                next,
                format!(
                    "I understand you'd like to adjust the talk. Here are some suggestions based on \
                     your request: \"{}\". As a first step I gave the opening of your testimony a \
                     humbler tone. Would you like me to revise a specific section or add more \
                     detail to certain points?",
                    request
                ),
            )
        } else {
            Revision::unchanged(
                document,
                format!(
                    "I considered your request: \"{}\", but I didn't find a safe general edit to \
                     make, so the talk is unchanged. Try asking me to make it shorter, longer, \
                     simpler, or to add a scripture.",
                    request
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::compose;
    use crate::preferences::entities::PreferenceSet;

    #[test]
    fn test_touches_up_testimony() {
        let doc = compose(&PreferenceSet::new("Faith")).unwrap();
        let revision = GenericRevisionTransformation.apply(&doc, "Make it warmer");

        assert!(revision.changed);
        assert!(revision.response.contains("\"Make it warmer\""));
        let text = revision.document.render();
        assert!(text.contains("I humbly bear my testimony that Faith is a true principle."));
        assert!(!text.contains(TOUCH_UP_FROM));
    }

    #[test]
    fn test_only_testimony_changes() {
        let doc = compose(&PreferenceSet::new("Faith").with_scriptures()).unwrap();
        let next = GenericRevisionTransformation.apply(&doc, "tweak").document;
        for kind in doc.section_kinds() {
            if kind != SectionKind::Testimony {
                assert_eq!(next.section(kind), doc.section(kind), "section {}", kind);
            }
        }
    }

    #[test]
    fn test_second_call_is_stated_noop() {
        let doc = compose(&PreferenceSet::new("Faith")).unwrap();
        let once = GenericRevisionTransformation.apply(&doc, "tweak").document;
        let twice = GenericRevisionTransformation.apply(&once, "tweak again");
        assert!(!twice.changed);
        assert_eq!(twice.document, once);
        assert!(twice.response.contains("unchanged"));
    }

    #[test]
    fn test_missing_testimony_is_noop() {
        let doc = Document::new("Faith");
        let revision = GenericRevisionTransformation.apply(&doc, "anything");
        assert!(!revision.changed);
        assert_eq!(revision.document, doc);
    }
}
