//! Add scripture: insert one more citation in the scriptural foundation

use crate::document::{Block, Citation, Document, SectionKind};
use crate::refinement::transformation::{Revision, Transformation};

/// Supplementary scriptures, offered in order
const SCRIPTURE_POOL: [(&str, &str); 5] = [
    (
        "Now faith is the substance of things hoped for, the evidence of things not seen.",
        "Hebrews 11:1",
    ),
    (
        "When ye are in the service of your fellow beings ye are only in the service of your God.",
        "Mosiah 2:17",
    ),
    (
        "Let your light so shine before men, that they may see your good works, and glorify your Father which is in heaven.",
        "Matthew 5:16",
    ),
    (
        "If any of you lack wisdom, let him ask of God, that giveth to all men liberally, and upbraideth not; and it shall be given him.",
        "James 1:5",
    ),
    (
        "But charity is the pure love of Christ, and it endureth forever.",
        "Moroni 7:47",
    ),
];

/// Inserts one citation immediately after the first citation of the
/// scriptural foundation section.
///
/// Never creates the section: a talk composed without scriptures stays
/// without them. Each call adds at most one citation, drawn from a fixed
/// pool and skipping references already present.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddScriptureTransformation;

impl AddScriptureTransformation {
    fn next_citation(existing: &[&Citation]) -> Option<Citation> {
        SCRIPTURE_POOL
            .iter()
            .find(|(_, source)| existing.iter().all(|c| c.source != *source))
            .map(|(text, source)| Citation::new(*text, *source))
    }
}

impl Transformation for AddScriptureTransformation {
    fn apply(&self, document: &Document, _instruction: &str) -> Revision {
        let Some(section) = document.section(SectionKind::ScripturalFoundation) else {
            return Revision::unchanged(
                document,
                "This talk doesn't have a Scriptural Foundation section, so I left it unchanged. \
                 Generate the talk again with scripture references included to add one.",
            );
        };

        let Some(first_index) = section.blocks.iter().position(|b| b.as_citation().is_some())
        else {
            return Revision::unchanged(
                document,
                "The Scriptural Foundation section has no existing scripture to build on, \
                 so I left it unchanged.",
            );
        };

        let existing: Vec<&Citation> = section.citations().collect();
        let Some(citation) = Self::next_citation(&existing) else {
            return Revision::unchanged(
                document,
                "The talk already includes every supplementary scripture I can suggest, \
                 so I left it unchanged.",
            );
        };

        let source = citation.source.clone();
        let anchor = existing
            .first()
            .map(|c| c.source.clone())
            .unwrap_or_default();
        let next = document.edit_section(SectionKind::ScripturalFoundation, |section| {
            section
                .blocks
                .insert(first_index + 1, Block::Citation(citation));
        });

        Revision::changed(
            next,
            format!(
                "I've added another scripture, {}, right after {} in the Scriptural Foundation section.",
                source, anchor
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::compose;
    use crate::document::{Paragraph, Section};
    use crate::preferences::entities::PreferenceSet;

    fn with_scriptures() -> Document {
        compose(&PreferenceSet::new("Faith").with_scriptures()).unwrap()
    }

    fn citation_sources(doc: &Document) -> Vec<String> {
        doc.section(SectionKind::ScripturalFoundation)
            .map(|s| s.citations().map(|c| c.source.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_inserts_after_first_citation() {
        let doc = with_scriptures();
        let revision = AddScriptureTransformation.apply(&doc, "add a scripture");
        assert!(revision.changed);
        assert!(revision.response.contains("Hebrews 11:1"));
        assert_eq!(
            citation_sources(&revision.document),
            vec!["Proverbs 3:5-6", "Hebrews 11:1"]
        );

        let section = revision
            .document
            .section(SectionKind::ScripturalFoundation)
            .unwrap();
        assert!(section.blocks[1].as_citation().is_some());
        assert!(section.blocks[2].as_citation().is_some());
    }

    #[test]
    fn test_one_citation_per_call() {
        let doc = with_scriptures();
        let once = AddScriptureTransformation.apply(&doc, "add a scripture").document;
        let twice = AddScriptureTransformation.apply(&once, "add a scripture").document;

        assert_eq!(doc.citation_count(), 1);
        assert_eq!(once.citation_count(), 2);
        assert_eq!(twice.citation_count(), 3);
        assert_eq!(
            citation_sources(&twice),
            vec!["Proverbs 3:5-6", "Mosiah 2:17", "Hebrews 11:1"]
        );
    }

    #[test]
    fn test_pool_exhaustion_is_noop() {
        let mut doc = with_scriptures();
        for _ in 0..SCRIPTURE_POOL.len() {
            doc = AddScriptureTransformation.apply(&doc, "scripture").document;
        }
        assert_eq!(doc.citation_count(), SCRIPTURE_POOL.len() + 1);

        let revision = AddScriptureTransformation.apply(&doc, "scripture");
        assert!(!revision.changed);
        assert_eq!(revision.document, doc);
    }

    #[test]
    fn test_missing_section_is_identity() {
        let doc = compose(&PreferenceSet::new("Faith").with_quotes()).unwrap();
        let revision = AddScriptureTransformation.apply(&doc, "add a scripture");
        assert!(!revision.changed);
        assert_eq!(revision.document, doc);
        assert_eq!(revision.document.section_kinds(), doc.section_kinds());
        assert!(!revision.document.has_section(SectionKind::ScripturalFoundation));
    }

    #[test]
    fn test_section_without_citation_is_identity() {
        let doc = Document::new("Faith").with_section(
            Section::new(SectionKind::ScripturalFoundation)
                .with_block(Block::paragraph(Paragraph::new("Scriptures matter."))),
        );
        let revision = AddScriptureTransformation.apply(&doc, "add a scripture");
        assert!(!revision.changed);
        assert_eq!(revision.document, doc);
    }
}
