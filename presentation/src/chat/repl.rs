//! REPL (Read-Eval-Print Loop) for interactive talk refinement

use crate::ConsoleFormatter;
use crate::config::{OutputConfig, ReplConfig};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use talk_application::TalkSession;
use talk_domain::{Document, OutputFormat, SubmitOutcome};

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Free text, sent to the session as a refinement instruction
    Instruction(String),
    Show,
    History,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if !line.starts_with('/') {
            return ReplCommand::Instruction(line.to_string());
        }
        match line {
            "/show" | "/s" => ReplCommand::Show,
            "/history" | "/log" => ReplCommand::History,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            other => ReplCommand::Unknown(other.to_string()),
        }
    }
}

/// Interactive refinement REPL over a started [`TalkSession`]
pub struct RefineRepl {
    session: Arc<TalkSession>,
    output: OutputConfig,
    repl: ReplConfig,
}

impl RefineRepl {
    /// Create a new RefineRepl; the session must already be started
    pub fn new(session: Arc<TalkSession>) -> Self {
        Self {
            session,
            output: OutputConfig::default(),
            repl: ReplConfig::default(),
        }
    }

    pub fn with_output_config(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_repl_config(mut self, repl: ReplConfig) -> Self {
        self.repl = repl;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if !self.output.color {
            colored::control::set_override(false);
        }

        // Try to load history
        let history_path = self.repl.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("refine> ") {
                Ok(line) => {
                    let command = ReplCommand::parse(&line);
                    if let ReplCommand::Instruction(text) = &command
                        && !text.is_empty()
                    {
                        let _ = rl.add_history_entry(text.as_str());
                    }
                    if self.handle(command).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Talk Assistant - Refine Mode         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Tell me how to change the talk, for example:");
        println!("  make it shorter · add more detail · add a scripture · use simpler words");
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /show, /s         - Show the current talk");
        println!("  /history, /log    - Show the conversation so far");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }

    /// Handle one command. Returns true if should exit.
    async fn handle(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::Show => {
                if let Some(document) = self.session.document().await {
                    self.print_document(&document).await;
                }
            }
            ReplCommand::History => {
                let conversation = self.session.conversation().await;
                println!();
                print!("{}", ConsoleFormatter::format_conversation(&conversation));
                println!();
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
            ReplCommand::Instruction(text) => self.process_instruction(&text).await,
        }
        false
    }

    async fn process_instruction(&self, instruction: &str) {
        match self.session.submit(instruction).await {
            Ok(SubmitOutcome::Reply(reply)) => {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::indent(&ConsoleFormatter::format_reply(&reply), "  ")
                );
                println!();
                if reply.changed {
                    self.print_document(&reply.document).await;
                }
            }
            Ok(SubmitOutcome::NoOp) => {
                println!("{}", "Type an instruction, or /help for commands.".dimmed());
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
            }
        }
    }

    async fn print_document(&self, document: &Document) {
        match self.output.format {
            OutputFormat::Plain => println!("{}", ConsoleFormatter::format_plain(document)),
            OutputFormat::Text | OutputFormat::Json => {
                let estimate = self.session.estimate(document).await;
                print!(
                    "{}",
                    ConsoleFormatter::format_document(document, Some(&estimate))
                );
            }
        }
        println!();
    }
}
