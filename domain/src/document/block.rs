//! Content blocks inside a section

use serde::{Deserialize, Serialize};

/// Prefix for bullet lines in rendered text
pub const BULLET_MARKER: &str = "• ";
/// Prefix for quoted or scriptural lines in rendered text
pub const QUOTE_MARKER: &str = "> ";

/// A single sentence of prose.
///
/// Elaboration sentences expand on a point without carrying it; shortening
/// removes them and lengthening adds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub elaboration: bool,
}

impl Sentence {
    pub fn core(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            elaboration: false,
        }
    }

    pub fn elaboration(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            elaboration: true,
        }
    }
}

/// Which refinement inserted a paragraph.
///
/// Survives rewording, so a transformation can recognise its own earlier
/// insertions after other edits changed their text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Insertion {
    LengthenReflection,
    LengthenClosing,
}

/// A prose paragraph made of ordered sentences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub sentences: Vec<Sentence>,
    /// Set on paragraphs added by a refinement; `None` for composed text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Insertion>,
}

impl Paragraph {
    /// Paragraph starting with one core sentence
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            sentences: vec![Sentence::core(text)],
            origin: None,
        }
    }

    /// Paragraph made only of elaboration
    pub fn elaboration(text: impl Into<String>) -> Self {
        Self {
            sentences: vec![Sentence::elaboration(text)],
            origin: None,
        }
    }

    /// Tag the paragraph with the refinement that inserted it
    pub fn inserted_by(mut self, origin: Insertion) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Append a core sentence
    pub fn then(mut self, text: impl Into<String>) -> Self {
        self.sentences.push(Sentence::core(text));
        self
    }

    /// Append an elaboration sentence
    pub fn then_elaborate(mut self, text: impl Into<String>) -> Self {
        self.sentences.push(Sentence::elaboration(text));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A quoted passage with its attribution (scripture reference or speaker)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub text: String,
    pub source: String,
}

impl Citation {
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }
}

/// One renderable unit of a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    Bullet { text: String },
    Citation(Citation),
}

impl Block {
    pub fn paragraph(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        Block::Bullet { text: text.into() }
    }

    pub fn citation(text: impl Into<String>, source: impl Into<String>) -> Self {
        Block::Citation(Citation::new(text, source))
    }

    pub fn is_bullet(&self) -> bool {
        matches!(self, Block::Bullet { .. })
    }

    pub fn as_citation(&self) -> Option<&Citation> {
        match self {
            Block::Citation(c) => Some(c),
            _ => None,
        }
    }

    /// Render this block as a single text line (no trailing newline)
    pub fn render(&self) -> String {
        match self {
            Block::Paragraph(p) => p.text(),
            Block::Bullet { text } => format!("{}{}", BULLET_MARKER, text),
            Block::Citation(c) => format!("{}\"{}\" - {}", QUOTE_MARKER, c.text, c.source),
        }
    }
}
