//! Simplify language: fixed whole-word vocabulary substitutions

use crate::document::{Block, Document};
use crate::refinement::transformation::{Revision, Transformation};
use regex::Regex;

/// Elevated word -> plainer synonym. Matching is case-sensitive and
/// whole-word, so `principle` never touches `principles`.
pub const VOCABULARY: [(&str, &str); 12] = [
    ("pondered", "thought about"),
    ("significance", "meaning"),
    ("consistent", "steady"),
    ("righteous", "good"),
    ("strengthens", "builds"),
    ("guidance", "help"),
    ("principles", "truths"),
    ("principle", "truth"),
    ("acknowledge", "remember"),
    ("endeavor", "try"),
    ("diligently", "carefully"),
    ("Righteous", "Good"),
];

/// Replaces elevated vocabulary with plainer words in paragraphs and
/// bullets of every section.
///
/// Citations stay verbatim (scripture and quotes are not reworded), as do
/// the title and section headers.
#[derive(Debug, Clone)]
pub struct SimplifyTransformation {
    substitutions: Vec<(Regex, &'static str, &'static str)>,
}

/// Replacements made while simplifying one document
#[derive(Debug, Default)]
struct Tally {
    count: usize,
    first: Option<(&'static str, &'static str)>,
}

impl Default for SimplifyTransformation {
    fn default() -> Self {
        Self::new()
    }
}

impl SimplifyTransformation {
    pub fn new() -> Self {
        let substitutions = VOCABULARY
            .iter()
            .filter_map(|&(from, to)| {
                Regex::new(&format!(r"\b{}\b", regex::escape(from)))
                    .ok()
                    .map(|re| (re, from, to))
            })
            .collect();
        Self { substitutions }
    }

    /// Apply every substitution to `text`, recording what was replaced.
    fn simplify(&self, text: &mut String, tally: &mut Tally) {
        for (pattern, from, to) in &self.substitutions {
            let found = pattern.find_iter(text.as_str()).count();
            if found > 0 {
                tally.count += found;
                tally.first.get_or_insert((*from, *to));
                let next = pattern.replace_all(text.as_str(), *to).into_owned();
                *text = next;
            }
        }
    }
}

impl Transformation for SimplifyTransformation {
    fn apply(&self, document: &Document, _instruction: &str) -> Revision {
        let mut tally = Tally::default();
        let simplified = document.edit_sections(|section| {
            for block in &mut section.blocks {
                match block {
                    Block::Paragraph(paragraph) => {
                        for sentence in &mut paragraph.sentences {
                            self.simplify(&mut sentence.text, &mut tally);
                        }
                    }
                    Block::Bullet { text } => self.simplify(text, &mut tally),
                    Block::Citation(_) => {}
                }
            }
        });

        let Some((from, to)) = tally.first else {
            return Revision::unchanged(
                document,
                "The language is already simple; I didn't find any words that needed plainer \
                 wording, so I left the talk unchanged.",
            );
        };

        Revision::changed(
            simplified,
            format!(
                "I've simplified the language, replacing {} elevated word{} with plainer ones \
                 (for example, \"{}\" becomes \"{}\").",
                tally.count,
                if tally.count == 1 { "" } else { "s" },
                from,
                to
            ),
        )
    }
}
