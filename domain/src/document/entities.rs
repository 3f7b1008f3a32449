//! Document entity

use super::block::{Block, Insertion, Paragraph};
use super::section::{Section, SectionKind};
use crate::core::string::word_count;
use serde::{Deserialize, Serialize};

/// Average speaking rate used for timing estimates
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 130;

/// The structured talk (Entity with value semantics)
///
/// A title plus ordered, labelled sections. Callers never edit a document
/// in place: transformations return a new `Document`, which keeps every
/// previous version intact for comparison or undo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    title: String,
    sections: Vec<Section>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.section(kind).is_some()
    }

    /// Section kinds in document order
    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }

    /// The section directly before `kind`, if both exist.
    pub fn kind_before(&self, kind: SectionKind) -> Option<SectionKind> {
        let index = self.sections.iter().position(|s| s.kind == kind)?;
        index
            .checked_sub(1)
            .map(|previous| self.sections[previous].kind)
    }

    /// Return a copy with one section edited. Absent sections leave the copy
    /// unchanged.
    pub fn edit_section(&self, kind: SectionKind, edit: impl FnOnce(&mut Section)) -> Document {
        let mut next = self.clone();
        if let Some(section) = next.sections.iter_mut().find(|s| s.kind == kind) {
            edit(section);
        }
        next
    }

    /// Return a copy with every section passed through `edit`.
    pub fn edit_sections(&self, mut edit: impl FnMut(&mut Section)) -> Document {
        let mut next = self.clone();
        next.sections.iter_mut().for_each(&mut edit);
        next
    }

    /// Total number of citations across all sections
    pub fn citation_count(&self) -> usize {
        self.sections.iter().map(|s| s.citations().count()).sum()
    }

    /// The benediction that ends the talk
    pub fn closing_line(&self) -> Option<String> {
        let closing = self.sections.last().filter(|s| s.kind == SectionKind::Closing)?;
        closing.blocks.last().map(Block::render)
    }

    /// Render as plain structured text (`# `, `## `, `> `, `• ` markers).
    pub fn render(&self) -> String {
        let mut parts = vec![format!("# {}", self.title)];
        parts.extend(
            self.sections
                .iter()
                .map(Section::render)
                .filter(|text| !text.is_empty()),
        );
        parts.join("\n\n")
    }

    /// Spoken words: the title and every block, without section headers.
    pub fn word_count(&self) -> usize {
        let body: usize = self
            .sections
            .iter()
            .flat_map(|s| &s.blocks)
            .map(|b| word_count(&b.render()))
            .sum();
        word_count(&self.title) + body
    }

    /// Estimated speaking time in whole minutes (rounded up)
    pub fn estimated_minutes(&self, words_per_minute: u32) -> u32 {
        let wpm = words_per_minute.max(1) as usize;
        self.word_count().div_ceil(wpm) as u32
    }

    /// Whether a paragraph inserted by `origin` is still in the talk
    pub fn has_insertion(&self, origin: Insertion) -> bool {
        self.paragraphs().any(|p| p.origin == Some(origin))
    }

    /// All prose paragraphs, in order
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.sections.iter().flat_map(|s| {
            s.blocks.iter().filter_map(|b| match b {
                Block::Paragraph(p) => Some(p),
                _ => None,
            })
        })
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
