//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use talk_domain::{Audience, PreferenceSet, TalkFormat, TalkLength};

/// Output format for the composed talk
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored text with highlighted headings
    Text,
    /// The talk as plain text, ready to paste
    Plain,
    /// Document and conversation as JSON
    Json,
}

impl From<OutputFormat> for talk_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => talk_domain::OutputFormat::Text,
            OutputFormat::Plain => talk_domain::OutputFormat::Plain,
            OutputFormat::Json => talk_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for talk-assistant
#[derive(Parser, Debug)]
#[command(name = "talk-assistant")]
#[command(author, version, about = "Compose and refine sacrament meeting talks")]
#[command(long_about = r#"
Talk Assistant composes a structured talk from a topic and a few preferences,
then lets you refine it with plain-language instructions.

Refinement instructions understood:
  "make it shorter"         Remove asides and elaboration
  "make it longer"          Add a reflection and a closing thought
  "add a scripture"         Add one more scripture reference
  "use simpler words"       Replace elevated vocabulary
  anything else             A gentle general revision

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./talk.toml         Project-level config
3. ~/.config/talk-assistant/config.toml   Global config

Example:
  talk-assistant "Faith" --scriptures --quotes
  talk-assistant "Service" -l 10min -f hybrid -r "make it shorter"
  talk-assistant "Gratitude" --audience youth --interactive
"#)]
pub struct Cli {
    /// The topic of the talk
    pub topic: Option<String>,

    /// Target length (5min, 10min, 15min, 20min)
    #[arg(short, long, value_name = "LENGTH")]
    pub length: Option<TalkLength>,

    /// Talk format (full, outline, hybrid)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<TalkFormat>,

    /// Intended audience (general, youth, adults, primary)
    #[arg(short, long, value_name = "AUDIENCE")]
    pub audience: Option<Audience>,

    /// Include a scriptural foundation section
    #[arg(long)]
    pub scriptures: bool,

    /// Include a prophetic guidance section
    #[arg(long)]
    pub quotes: bool,

    /// Include a key concepts section
    #[arg(long)]
    pub concepts: bool,

    /// Include prompts for personal experiences
    #[arg(long)]
    pub personal_experiences: bool,

    /// Additional notes for the talk
    #[arg(long, value_name = "TEXT")]
    pub notes: Option<String>,

    /// Refinement instruction to apply (can be specified multiple times)
    #[arg(short, long, value_name = "INSTRUCTION")]
    pub refine: Vec<String>,

    /// Keep refining interactively after the talk is composed
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Apply the command-line choices over `defaults` (usually from config).
    ///
    /// Given values replace the defaults; inclusion flags can only switch a
    /// section on.
    pub fn preferences(&self, defaults: PreferenceSet) -> PreferenceSet {
        let mut prefs = defaults;
        prefs.topic = self.topic.clone().unwrap_or_default();
        if let Some(length) = self.length {
            prefs.length = Some(length);
        }
        if let Some(format) = self.format {
            prefs.format = Some(format);
        }
        if let Some(audience) = self.audience {
            prefs.audience = Some(audience);
        }
        prefs.include_scriptures |= self.scriptures;
        prefs.include_quotes |= self.quotes;
        prefs.include_concepts |= self.concepts;
        prefs.personal_experiences |= self.personal_experiences;
        if let Some(notes) = &self.notes {
            prefs = prefs.with_notes(notes.clone());
        }
        prefs
    }
}
