//! Talk sections and their stable identities

use super::block::{Block, Citation};
use serde::{Deserialize, Serialize};

/// Stable identity of a talk section.
///
/// Transformations address sections by kind, never by heading text.
/// The declaration order is the canonical order of the talk skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Salutation,
    Introduction,
    ScripturalFoundation,
    PropheticGuidance,
    KeyConcepts,
    PersonalExperience,
    Application,
    Testimony,
    Closing,
}

impl SectionKind {
    /// All kinds in skeleton order
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Salutation,
        SectionKind::Introduction,
        SectionKind::ScripturalFoundation,
        SectionKind::PropheticGuidance,
        SectionKind::KeyConcepts,
        SectionKind::PersonalExperience,
        SectionKind::Application,
        SectionKind::Testimony,
        SectionKind::Closing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Salutation => "salutation",
            SectionKind::Introduction => "introduction",
            SectionKind::ScripturalFoundation => "scriptural-foundation",
            SectionKind::PropheticGuidance => "prophetic-guidance",
            SectionKind::KeyConcepts => "key-concepts",
            SectionKind::PersonalExperience => "personal-experience",
            SectionKind::Application => "application",
            SectionKind::Testimony => "testimony",
            SectionKind::Closing => "closing",
        }
    }

    /// The `## ` header rendered above the section, if any.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            SectionKind::Salutation | SectionKind::Closing => None,
            SectionKind::Introduction => Some("Introduction"),
            SectionKind::ScripturalFoundation => Some("Scriptural Foundation"),
            SectionKind::PropheticGuidance => Some("Prophetic Guidance"),
            SectionKind::KeyConcepts => Some("Key Concepts to Consider"),
            SectionKind::PersonalExperience => Some("Personal Experiences"),
            SectionKind::Application => Some("Application in Our Lives"),
            SectionKind::Testimony => Some("Testimony"),
        }
    }

    /// Whether this section only exists when the user asked for it
    pub fn is_conditional(&self) -> bool {
        matches!(
            self,
            SectionKind::ScripturalFoundation
                | SectionKind::PropheticGuidance
                | SectionKind::KeyConcepts
                | SectionKind::PersonalExperience
        )
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .into_iter()
            .find(|k| k.label() == s)
            .ok_or_else(|| format!("Unknown section: {}", s))
    }
}

/// A labelled block of talk content (Entity within a [`Document`](super::Document))
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            blocks: Vec::new(),
        }
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn with_blocks(mut self, blocks: impl IntoIterator<Item = Block>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn heading(&self) -> Option<&'static str> {
        self.kind.heading()
    }

    pub fn citations(&self) -> impl Iterator<Item = &Citation> {
        self.blocks.iter().filter_map(Block::as_citation)
    }

    /// Render the section as text: header (if any), then blocks.
    ///
    /// Consecutive bullets are kept on adjacent lines; every other block is
    /// separated by a blank line.
    pub fn render(&self) -> String {
        let mut chunks: Vec<String> = Vec::new();
        if let Some(heading) = self.heading() {
            chunks.push(format!("## {}", heading));
        }

        let mut previous_was_bullet = false;
        for block in &self.blocks {
            let line = block.render();
            if block.is_bullet()
                && previous_was_bullet
                && let Some(last) = chunks.last_mut()
            {
                last.push('\n');
                last.push_str(&line);
            } else {
                chunks.push(line);
            }
            previous_was_bullet = block.is_bullet();
        }

        chunks.join("\n\n")
    }
}
