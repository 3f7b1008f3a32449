//! Shorten: drop elaboration sentences

use crate::document::{Block, Document, SectionKind};
use crate::refinement::transformation::{Revision, Transformation};

/// Sections whose wording is never trimmed
const PROTECTED: [SectionKind; 2] = [SectionKind::Testimony, SectionKind::Closing];

/// Removes every elaboration sentence outside the testimony and closing.
///
/// Paragraphs left empty are dropped. Section headers, bullets, citations and
/// the title are kept, so the talk's outline survives.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortenTransformation;

impl Transformation for ShortenTransformation {
    fn apply(&self, document: &Document, _instruction: &str) -> Revision {
        let shortened = document.edit_sections(|section| {
            if PROTECTED.contains(&section.kind) {
                return;
            }
            section.blocks.retain_mut(|block| match block {
                Block::Paragraph(paragraph) => {
                    paragraph.sentences.retain(|s| !s.elaboration);
                    !paragraph.is_empty()
                }
                Block::Bullet { .. } | Block::Citation(_) => true,
            });
        });

        let removed = document
            .word_count()
            .saturating_sub(shortened.word_count());

        Revision::compare(
            document,
            shortened,
            format!(
                "I've made the talk shorter by removing {} words of asides and elaboration. \
                 Every section heading, your testimony, and the closing are unchanged.",
                removed
            ),
            "The talk is already as short as I can make it without cutting main points, \
             so I left it unchanged.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::compose;
    use crate::document::Paragraph;
    use crate::preferences::entities::PreferenceSet;
    use crate::preferences::value_objects::TalkFormat;

    const ASIDE: &str = "This is a topic that has been on my heart and mind";

    #[test]
    fn test_removes_editorial_aside_and_scripture_elaboration() {
        let doc = compose(&PreferenceSet::new("Faith").with_scriptures()).unwrap();
        assert!(doc.render().contains(ASIDE));

        let revision = ShortenTransformation.apply(&doc, "Can you make this shorter?");
        let text = revision.document.render();

        assert!(revision.changed);
        assert!(revision.response.contains("shorter"));
        assert!(!text.contains(ASIDE));
        assert!(!text.contains("This scripture teaches us"));
        assert!(text.contains("I'm grateful for the opportunity to speak with you today about Faith."));
        assert!(text.contains("> \"Trust in the Lord"));
    }

    #[test]
    fn test_keeps_structure_and_protected_sections() {
        let doc = compose(
            &PreferenceSet::new("Faith")
                .with_format(TalkFormat::Full)
                .with_scriptures()
                .with_quotes(),
        )
        .unwrap();
        let shortened = ShortenTransformation.apply(&doc, "").document;

        assert_eq!(shortened.title(), doc.title());
        assert_eq!(shortened.section_kinds(), doc.section_kinds());
        assert_eq!(
            shortened.section(SectionKind::Testimony),
            doc.section(SectionKind::Testimony)
        );
        assert_eq!(shortened.closing_line(), doc.closing_line());
        assert!(shortened.word_count() < doc.word_count());
    }

    #[test]
    fn test_protected_elaboration_survives() {
        let doc = Document::new("Hope").with_section(
            crate::document::Section::new(SectionKind::Testimony)
                .with_block(Block::paragraph(Paragraph::elaboration("I know it."))),
        );
        let revision = ShortenTransformation.apply(&doc, "shorter");
        assert!(!revision.changed);
        assert_eq!(revision.document, doc);
    }

    #[test]
    fn test_second_shorten_is_noop() {
        let doc = compose(&PreferenceSet::new("Faith").with_scriptures()).unwrap();
        let once = ShortenTransformation.apply(&doc, "shorter").document;
        let twice = ShortenTransformation.apply(&once, "shorter");
        assert!(!twice.changed);
        assert_eq!(twice.document, once);
        assert!(twice.response.contains("already as short"));
    }
}
