//! Console output formatter for talks and refinement replies

use colored::Colorize;
use serde_json::json;
use talk_application::TalkEstimate;
use talk_domain::{
    BULLET_MARKER, ConversationLog, Document, OutputFormat, QUOTE_MARKER, RefinementReply,
    Speaker,
};

/// Formats talks for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a document in the requested output format
    pub fn format(
        format: OutputFormat,
        document: &Document,
        conversation: &ConversationLog,
        estimate: &TalkEstimate,
    ) -> String {
        match format {
            OutputFormat::Text => Self::format_document(document, Some(estimate)),
            OutputFormat::Plain => Self::format_plain(document),
            OutputFormat::Json => Self::format_json(document, conversation, estimate),
        }
    }

    /// Colored rendering, highlighting the title, headings, quotes and bullets
    pub fn format_document(document: &Document, estimate: Option<&TalkEstimate>) -> String {
        let mut output = String::new();

        output.push_str(&Self::rule());
        output.push('\n');
        for line in document.render().lines() {
            output.push_str(&Self::format_line(line));
            output.push('\n');
        }
        output.push_str(&Self::rule());
        output.push('\n');

        if let Some(estimate) = estimate {
            let line = estimate.to_string();
            if estimate.is_over_target() {
                output.push_str(&format!("{}\n", line.yellow()));
            } else {
                output.push_str(&format!("{}\n", line.dimmed()));
            }
        }

        output
    }

    /// The talk as plain text (`Document::render`)
    pub fn format_plain(document: &Document) -> String {
        document.render()
    }

    /// Format as JSON
    pub fn format_json(
        document: &Document,
        conversation: &ConversationLog,
        estimate: &TalkEstimate,
    ) -> String {
        let value = json!({
            "document": document,
            "text": document.render(),
            "estimate": estimate,
            "conversation": conversation.turns(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// The assistant's acknowledgment of one instruction
    pub fn format_reply(reply: &RefinementReply) -> String {
        let mut output = format!(
            "{} {}\n",
            format!("[{}]", reply.intent).cyan().bold(),
            reply.response
        );
        if !reply.changed {
            output.push_str(&format!("{}\n", "(talk unchanged)".dimmed()));
        }
        output
    }

    /// Every turn of the conversation, oldest first
    pub fn format_conversation(conversation: &ConversationLog) -> String {
        if conversation.is_empty() {
            return format!("{}\n", "No refinements yet.".dimmed());
        }

        let mut output = String::new();
        for (index, turn) in conversation.iter().enumerate() {
            let speaker = match turn.speaker {
                Speaker::User => "You:".green().bold(),
                Speaker::Assistant => "Assistant:".cyan().bold(),
            };
            output.push_str(&format!("{:>3}. {} {}\n", index + 1, speaker, turn.text));
        }
        output
    }

    fn format_line(line: &str) -> String {
        if let Some(title) = line.strip_prefix("# ") {
            format!("{}", title.cyan().bold())
        } else if let Some(heading) = line.strip_prefix("## ") {
            format!("{}", heading.yellow().bold())
        } else if let Some(quote) = line.strip_prefix(QUOTE_MARKER) {
            format!("  {} {}", "│".green(), quote.italic())
        } else if let Some(item) = line.strip_prefix(BULLET_MARKER) {
            format!("  {} {}", "•".cyan(), item)
        } else {
            line.to_string()
        }
    }

    fn rule() -> String {
        "─".repeat(60).dimmed().to_string()
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talk_domain::{PreferenceSet, RefinementEngine, SubmitOutcome, TalkLength, compose};

    fn faith() -> Document {
        compose(&PreferenceSet::new("Faith").with_scriptures().with_concepts()).unwrap()
    }

    fn estimate(document: &Document) -> TalkEstimate {
        TalkEstimate::of(document, Some(TalkLength::TenMinutes), 130)
    }

    #[test]
    fn test_plain_is_render() {
        let doc = faith();
        assert_eq!(ConsoleFormatter::format_plain(&doc), doc.render());
    }

    #[test]
    fn test_text_strips_markers_and_adds_estimate() {
        let doc = faith();
        let text = ConsoleFormatter::format_document(&doc, Some(&estimate(&doc)));

        assert!(text.contains("Faith"));
        assert!(text.contains("Scriptural Foundation"));
        assert!(!text.contains("## "));
        assert!(text.contains("Proverbs 3:5-6"));
        assert!(text.contains("(target 10 min)"));
    }

    #[test]
    fn test_json_has_document_and_conversation() {
        let doc = faith();
        let out = ConsoleFormatter::format(
            OutputFormat::Json,
            &doc,
            &ConversationLog::new(),
            &estimate(&doc),
        );
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["document"]["title"], "Faith");
        assert_eq!(value["text"], doc.render());
        assert_eq!(value["estimate"]["target_minutes"], 10);
        assert!(value["conversation"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_conversation_lists_turns() {
        let mut engine = RefinementEngine::new();
        engine.start(&PreferenceSet::new("Faith")).unwrap();
        let outcome = engine.submit_instruction("make it shorter").unwrap();

        let out = ConsoleFormatter::format_conversation(engine.conversation());
        assert!(out.contains("make it shorter"));
        assert!(out.contains("Assistant:"));
        assert_eq!(out.lines().count(), 2);

        let SubmitOutcome::Reply(reply) = outcome else {
            panic!("Expected reply");
        };
        assert!(ConsoleFormatter::format_reply(&reply).contains("shorter"));
    }

    #[test]
    fn test_empty_conversation() {
        let out = ConsoleFormatter::format_conversation(&ConversationLog::new());
        assert!(out.contains("No refinements yet."));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
