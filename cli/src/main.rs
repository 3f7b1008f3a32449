//! CLI entrypoint for Talk Assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use talk_application::{
    ConversationLogger, NoConversationLogger, NoProgress, SessionParams, TalkProgressNotifier,
    TalkSession,
};
use talk_domain::{ConfigIssue, OutputFormat, RefinementEngine, Severity, SubmitOutcome};
use talk_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger};
use talk_presentation::{
    Cli, ConsoleFormatter, OutputConfig, RefineRepl, ReplConfig, SimpleProgress, SpinnerProgress,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    reject_fatal_issues(&issues)?;

    // Keep the guard alive so buffered log lines reach the file
    let _log_guard = init_logging(cli.verbose, config.logging.log_file.as_deref())?;

    info!("Starting Talk Assistant");

    for issue in &issues {
        warn!("{}", issue.message);
    }

    // Command-line flags over config defaults
    let prefs = cli.preferences(config.defaults.to_preferences(""));
    let (words_per_minute, _) = config.output.words_per_minute();
    let format: OutputFormat = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let show_progress = !cli.quiet && config.repl.show_progress && format != OutputFormat::Json;
    let color = !cli.no_color && config.output.color;
    if !color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let progress: Arc<dyn TalkProgressNotifier> = match (show_progress, color) {
        (false, _) => Arc::new(NoProgress),
        (true, true) => Arc::new(SpinnerProgress::new()),
        (true, false) => Arc::new(SimpleProgress),
    };

    let conversation_logger: Arc<dyn ConversationLogger> = config
        .logging
        .conversation_log
        .as_deref()
        .and_then(JsonlConversationLogger::new)
        .map(|logger| {
            info!("Writing conversation transcript to {}", logger.path().display());
            Arc::new(logger) as Arc<dyn ConversationLogger>
        })
        .unwrap_or_else(|| Arc::new(NoConversationLogger));

    let params = SessionParams::default()
        .with_think_delay_ms(config.repl.think_delay_ms)
        .with_words_per_minute(words_per_minute);

    let session = Arc::new(
        TalkSession::new(RefinementEngine::new())
            .with_params(params)
            .with_progress(progress)
            .with_conversation_logger(conversation_logger),
    );

    // Compose
    let composed = match session.start(&prefs).await {
        Ok(composed) => composed,
        Err(e) if e.is_validation() => bail!("{}. Usage: talk-assistant <TOPIC> [OPTIONS]", e),
        Err(e) => return Err(e.into()),
    };

    // Scripted refinements, in order
    for instruction in &cli.refine {
        match session.submit(instruction).await? {
            SubmitOutcome::Reply(reply) => {
                if format == OutputFormat::Text && !cli.quiet {
                    println!("{}", ConsoleFormatter::format_reply(&reply));
                }
            }
            SubmitOutcome::NoOp => warn!("Skipping blank refinement instruction"),
        }
    }

    // Output results
    let document = session.document().await.unwrap_or(composed.document);
    let estimate = session.estimate(&document).await;
    let conversation = session.conversation().await;
    println!(
        "{}",
        ConsoleFormatter::format(format, &document, &conversation, &estimate)
    );
    if format == OutputFormat::Text
        && let Some(notes) = &prefs.additional_notes
    {
        println!("{} {}", "Notes:".dimmed(), notes);
    }

    // Interactive refinement
    if cli.interactive {
        let repl = RefineRepl::new(session)
            .with_output_config(OutputConfig {
                format,
                color,
            })
            .with_repl_config(ReplConfig {
                history_file: config.repl.history_file.as_ref().map(PathBuf::from),
            });
        repl.run().await?;
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// Verbosity maps to a level filter (-v = info, -vv = debug, -vvv = trace).
/// With a `log_file`, output goes there through a non-blocking writer;
/// otherwise to stderr so stdout carries only the talk.
/// Fail on any error-severity issue; warnings are only logged
fn reject_fatal_issues(issues: &[ConfigIssue]) -> Result<()> {
    if ConfigIssue::has_errors(issues) {
        let fatal: Vec<&str> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.message.as_str())
            .collect();
        bail!("Invalid configuration: {}", fatal.join("; "));
    }
    Ok(())
}

fn init_logging(verbose: u8, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_do_not_stop_startup() {
        let issues = vec![ConfigIssue::invalid_enum(
            "output.format",
            "xml",
            &["text", "plain", "json"],
            "'text'",
        )];
        assert!(reject_fatal_issues(&issues).is_ok());
    }

    #[test]
    fn test_shared_log_path_stops_startup() {
        let config = FileConfig {
            logging: talk_infrastructure::FileLoggingConfig {
                conversation_log: Some("talk.log".to_string()),
                log_file: Some("talk.log".to_string()),
            },
            ..Default::default()
        };
        let err = reject_fatal_issues(&config.validate()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: logging.conversation_log and logging.log_file both point to 'talk.log'"
        );
    }
}
