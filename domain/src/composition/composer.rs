//! Talk composer: `PreferenceSet -> Document`

use super::templates::TalkTemplate;
use crate::core::error::ValidationError;
use crate::document::{Block, Document, Paragraph, Section, SectionKind};
use crate::preferences::entities::PreferenceSet;
use crate::preferences::value_objects::TalkFormat;
use tracing::debug;

/// How a prose-or-points section is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Prose,
    Points,
}

/// Pick the introduction and application styles for a format.
///
/// Hybrid writes the introduction as prose and the application as points;
/// an unset format falls back to points for both.
fn styles(format: Option<TalkFormat>) -> (Style, Style) {
    match format {
        Some(TalkFormat::Full) => (Style::Prose, Style::Prose),
        Some(TalkFormat::Hybrid) => (Style::Prose, Style::Points),
        Some(TalkFormat::Outline) | None => (Style::Points, Style::Points),
    }
}

/// Compose the initial talk from a preference set.
///
/// Pure and deterministic. Fails only when the topic is blank.
pub fn compose(prefs: &PreferenceSet) -> Result<Document, ValidationError> {
    let topic = prefs.validated_topic()?;
    let topic = topic.as_str();
    let (intro_style, application_style) = styles(prefs.format);

    let mut sections = vec![
        Section::new(SectionKind::Salutation)
            .with_block(Block::paragraph(Paragraph::new(TalkTemplate::salutation(
                prefs.audience,
            ))))
            .with_block(Block::paragraph(TalkTemplate::opening(topic))),
    ];

    let introduction = Section::new(SectionKind::Introduction);
    sections.push(match intro_style {
        Style::Prose => {
            introduction.with_block(Block::paragraph(TalkTemplate::introduction_prose(topic)))
        }
        Style::Points => introduction.with_blocks(
            TalkTemplate::introduction_points(topic)
                .into_iter()
                .map(Block::bullet),
        ),
    });

    if prefs.include_scriptures {
        let scripture = TalkTemplate::primary_scripture();
        sections.push(
            Section::new(SectionKind::ScripturalFoundation)
                .with_block(Block::paragraph(TalkTemplate::scripture_lead()))
                .with_block(Block::Citation(scripture))
                .with_block(Block::paragraph(TalkTemplate::scripture_reflection(topic))),
        );
    }

    if prefs.include_quotes {
        sections.push(
            Section::new(SectionKind::PropheticGuidance)
                .with_block(Block::paragraph(TalkTemplate::prophetic_lead()))
                .with_block(Block::Citation(TalkTemplate::prophetic_quote()))
                .with_block(Block::paragraph(TalkTemplate::prophetic_reflection(topic))),
        );
    }

    if prefs.include_concepts {
        sections.push(
            Section::new(SectionKind::KeyConcepts)
                .with_blocks(TalkTemplate::key_concepts().into_iter().map(Block::bullet)),
        );
    }

    if prefs.personal_experiences {
        sections.push(
            Section::new(SectionKind::PersonalExperience)
                .with_block(Block::paragraph(TalkTemplate::personal_experience_lead(topic)))
                .with_blocks(
                    TalkTemplate::personal_experience_prompts(topic)
                        .into_iter()
                        .map(Block::bullet),
                ),
        );
    }

    let application = Section::new(SectionKind::Application);
    sections.push(match application_style {
        Style::Prose => application.with_block(Block::paragraph(TalkTemplate::application_prose())),
        Style::Points => application.with_blocks(
            TalkTemplate::application_points()
                .into_iter()
                .map(Block::bullet),
        ),
    });

    sections.push(
        Section::new(SectionKind::Testimony)
            .with_block(Block::paragraph(TalkTemplate::testimony(topic))),
    );
    sections.push(
        Section::new(SectionKind::Closing)
            .with_block(Block::paragraph(Paragraph::new(TalkTemplate::benediction()))),
    );

    let document = sections
        .into_iter()
        .fold(Document::new(topic), Document::with_section);

    debug!(
        "Composed talk on '{}' with sections [{}]",
        topic,
        document
            .section_kinds()
            .iter()
            .map(|k| k.label())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::value_objects::{Audience, TalkFormat};
    use proptest::prelude::*;

    fn faith() -> PreferenceSet {
        PreferenceSet::new("Faith")
    }

    #[test]
    fn test_empty_topic_fails() {
        assert_eq!(
            compose(&PreferenceSet::new("")),
            Err(ValidationError::EmptyTopic)
        );
        assert_eq!(
            compose(&PreferenceSet::new("  \n\t").with_scriptures()),
            Err(ValidationError::EmptyTopic)
        );
    }

    #[test]
    fn test_minimal_skeleton() {
        let doc = compose(&faith()).unwrap();
        assert_eq!(doc.title(), "Faith");
        assert_eq!(
            doc.section_kinds(),
            vec![
                SectionKind::Salutation,
                SectionKind::Introduction,
                SectionKind::Application,
                SectionKind::Testimony,
                SectionKind::Closing,
            ]
        );
        assert_eq!(
            doc.closing_line().as_deref(),
            Some("In the name of Jesus Christ, Amen.")
        );
    }

    #[test]
    fn test_conditional_sections_match_request() {
        let cases = [
            (faith().with_scriptures(), vec![SectionKind::ScripturalFoundation]),
            (faith().with_quotes(), vec![SectionKind::PropheticGuidance]),
            (faith().with_concepts(), vec![SectionKind::KeyConcepts]),
            (
                faith().with_personal_experiences(),
                vec![SectionKind::PersonalExperience],
            ),
            (
                faith().with_scriptures().with_concepts(),
                vec![SectionKind::ScripturalFoundation, SectionKind::KeyConcepts],
            ),
            (faith(), vec![]),
        ];

        for (prefs, expected) in cases {
            let doc = compose(&prefs).unwrap();
            let conditional: Vec<_> = doc
                .section_kinds()
                .into_iter()
                .filter(SectionKind::is_conditional)
                .collect();
            assert_eq!(conditional, expected, "prefs: {:?}", prefs);
        }
    }

    #[test]
    fn test_full_skeleton_order() {
        let prefs = faith()
            .with_scriptures()
            .with_quotes()
            .with_concepts()
            .with_personal_experiences();
        let doc = compose(&prefs).unwrap();
        assert_eq!(doc.section_kinds(), SectionKind::ALL.to_vec());
    }

    #[test]
    fn test_format_controls_intro_and_application() {
        let full = compose(&faith().with_format(TalkFormat::Full)).unwrap().render();
        assert!(full.contains("As I've pondered the significance of Faith"));
        assert!(full.contains("How can we apply these principles"));
        assert!(!full.contains("• "));

        let outline = compose(&faith().with_format(TalkFormat::Outline)).unwrap().render();
        assert!(outline.contains("• Opening thought about Faith"));
        assert!(outline.contains("• Daily application ideas"));

        let unset = compose(&faith()).unwrap().render();
        assert_eq!(unset, outline);

        let hybrid = compose(&faith().with_format(TalkFormat::Hybrid)).unwrap().render();
        assert!(hybrid.contains("As I've pondered the significance of Faith"));
        assert!(hybrid.contains("• Daily application ideas"));
        assert!(!hybrid.contains("• Opening thought"));
    }

    #[test]
    fn test_audience_selects_salutation() {
        let doc = compose(&faith().with_audience(Audience::Youth)).unwrap();
        assert!(doc.render().contains("Dear young men and young women,"));
    }

    #[test]
    fn test_scripture_section_has_one_citation() {
        let doc = compose(&faith().with_scriptures()).unwrap();
        let section = doc.section(SectionKind::ScripturalFoundation).unwrap();
        assert_eq!(section.citations().count(), 1);
        assert!(doc.render().contains("> \"Trust in the Lord"));
    }

    #[test]
    fn test_rendered_start() {
        let text = compose(&faith().with_scriptures()).unwrap().render();
        assert!(text.starts_with("# Faith\n\nDear Brothers and Sisters,\n\nI'm grateful"));
        assert!(text.ends_with("In the name of Jesus Christ, Amen."));
        assert!(text.contains("\n## Scriptural Foundation\n"));
    }

    proptest! {
        #[test]
        fn prop_compose_is_deterministic(
            topic in "[A-Za-z][A-Za-z ]{0,30}",
            scriptures: bool,
            quotes: bool,
            concepts: bool,
            personal: bool,
        ) {
            let prefs = PreferenceSet {
                topic: topic.clone(),
                include_scriptures: scriptures,
                include_quotes: quotes,
                include_concepts: concepts,
                personal_experiences: personal,
                ..Default::default()
            };
            let first = compose(&prefs).unwrap();
            let second = compose(&prefs).unwrap();
            prop_assert_eq!(first.render(), second.render());
            prop_assert_eq!(first.title(), topic.as_str());
            let expected = format!("about {}.", topic);
            prop_assert!(first.render().contains(&expected));
        }

        #[test]
        fn prop_blank_topic_always_fails(topic in "[ \t\n]{0,10}") {
            prop_assert_eq!(
                compose(&PreferenceSet::new(topic)),
                Err(ValidationError::EmptyTopic)
            );
        }
    }
}
