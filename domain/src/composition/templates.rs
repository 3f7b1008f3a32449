//! Text templates for each talk section

use crate::document::{Citation, Paragraph};
use crate::preferences::value_objects::Audience;

/// Templates for generating the text of each section
pub struct TalkTemplate;

impl TalkTemplate {
    pub fn salutation(audience: Option<Audience>) -> &'static str {
        match audience {
            Some(Audience::Youth) => "Dear young men and young women,",
            Some(Audience::Primary) => "Dear boys and girls,",
            Some(Audience::General) | Some(Audience::Adults) | None => {
                "Dear Brothers and Sisters,"
            }
        }
    }

    pub fn opening(topic: &str) -> Paragraph {
        Paragraph::new(format!(
            "I'm grateful for the opportunity to speak with you today about {}.",
            topic
        ))
        .then_elaborate(
            "This is a topic that has been on my heart and mind as I've prepared for this talk.",
        )
    }

    pub fn introduction_prose(topic: &str) -> Paragraph {
        Paragraph::new(format!(
            "As I've pondered the significance of {}, I've been reminded of the Lord's words in the scriptures.",
            topic
        ))
        .then_elaborate(
            "Our Heavenly Father has provided us with guidance and understanding through His prophets and through the Spirit.",
        )
    }

    pub fn introduction_points(topic: &str) -> Vec<String> {
        vec![
            format!("Opening thought about {}", topic),
            "Personal connection to the topic".to_string(),
            "Why this matters in our daily lives".to_string(),
        ]
    }

    pub fn scripture_lead() -> Paragraph {
        Paragraph::new("Let me share a scripture that has particular meaning regarding this topic:")
    }

    pub fn primary_scripture() -> Citation {
        Citation::new(
            "Trust in the Lord with all thine heart; and lean not unto thine own understanding. In all thy ways acknowledge him, and he shall direct thy paths.",
            "Proverbs 3:5-6",
        )
    }

    pub fn scripture_reflection(topic: &str) -> Paragraph {
        Paragraph::elaboration(format!(
            "This scripture teaches us about the importance of {} in our spiritual journey.",
            topic
        ))
    }

    pub fn prophetic_lead() -> Paragraph {
        Paragraph::new("A living prophet has taught:")
    }

    pub fn prophetic_quote() -> Citation {
        Citation::new(
            "The Lord loves effort, because effort brings rewards that can't come without it.",
            "President Russell M. Nelson",
        )
    }

    pub fn prophetic_reflection(topic: &str) -> Paragraph {
        Paragraph::elaboration(format!(
            "This principle applies directly to our understanding of {}.",
            topic
        ))
    }

    pub fn key_concepts() -> [&'static str; 4] {
        [
            "Faith is the foundation of all righteous action",
            "Our relationship with Heavenly Father grows through consistent effort",
            "The Spirit guides us as we seek truth",
            "Service to others strengthens our own testimony",
        ]
    }

    pub fn personal_experience_lead(topic: &str) -> Paragraph {
        Paragraph::new(format!(
            "Consider sharing a personal experience with {}:",
            topic
        ))
    }

    pub fn personal_experience_prompts(topic: &str) -> Vec<String> {
        vec![
            format!("A time when {} made a difference in your life", topic),
            "Someone whose example taught you this principle".to_string(),
            "What you learned and how it changed you".to_string(),
        ]
    }

    pub fn application_prose() -> Paragraph {
        Paragraph::new("How can we apply these principles in our daily lives?")
            .then("I believe we can start by making small, consistent choices that align with gospel principles.")
            .then_elaborate(
                "When we do this, we invite the Spirit into our lives and create space for spiritual growth.",
            )
    }

    pub fn application_points() -> [&'static str; 3] {
        [
            "Daily application ideas",
            "Practical steps we can take",
            "How to make this part of our routine",
        ]
    }

    pub fn testimony(topic: &str) -> Paragraph {
        Paragraph::new(format!(
            "I want to bear my testimony that {} is a true principle.",
            topic
        ))
        .then(
            "I know that as we apply these teachings in our lives, we will find the peace and direction that our Heavenly Father wants us to have.",
        )
    }

    pub fn benediction() -> &'static str {
        "In the name of Jesus Christ, Amen."
    }
}
