//! Lengthen: add a reflection before the application and a closing thought
//! before the benediction

use crate::document::{Block, Document, Insertion, Paragraph, SectionKind};
use crate::refinement::transformation::{Revision, Transformation};

fn reflection(title: &str) -> Paragraph {
    Paragraph::elaboration(format!(
        "As we reflect further on {}, we can each ask where we have already seen its fruits in our own lives and in the lives of those around us.",
        title
    ))
    .inserted_by(Insertion::LengthenReflection)
}

fn closing_thought() -> Paragraph {
    Paragraph::elaboration(
        "May we each go forward with faith, trusting that small and simple efforts will bring great blessings into our lives and homes.",
    )
    .inserted_by(Insertion::LengthenClosing)
}

/// Append `paragraph` to the section right before `anchor`.
///
/// Returns `None` when the anchor (or a section before it) is missing, or
/// when a paragraph with the same origin is already anywhere in the talk,
/// however it has been reworded since.
fn insert_before(document: &Document, anchor: SectionKind, paragraph: Paragraph) -> Option<Document> {
    if let Some(origin) = paragraph.origin
        && document.has_insertion(origin)
    {
        return None;
    }
    let target = document.kind_before(anchor)?;
    document.section(target)?;
    let block = Block::Paragraph(paragraph);
    Some(document.edit_section(target, |section| section.blocks.push(block)))
}

/// Adds one reflective paragraph before "Application" and one closing
/// paragraph before the final benediction.
///
/// Each paragraph is inserted at most once per document. Both are
/// elaboration: shorten removes the reflection again, while the closing
/// thought lands in the testimony, which shorten leaves alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthenTransformation;

impl Transformation for LengthenTransformation {
    fn apply(&self, document: &Document, _instruction: &str) -> Revision {
        let mut current = document.clone();
        let mut added = Vec::new();

        if let Some(next) = insert_before(&current, SectionKind::Application, reflection(document.title())) {
            current = next;
            added.push("a reflective paragraph before the application");
        }
        if let Some(next) = insert_before(&current, SectionKind::Closing, closing_thought()) {
            current = next;
            added.push("a closing thought before the final benediction");
        }

        if added.is_empty() {
            return Revision::unchanged(
                document,
                "I looked for places to add more detail, but the talk already has its extra \
                 reflection and closing thought (or lacks the sections they belong in), \
                 so I left it unchanged.",
            );
        }

        Revision::changed(
            current,
            format!(
                "I've made the talk longer and added more detail: {}.",
                added.join(" and ")
            ),
        )
    }
}
