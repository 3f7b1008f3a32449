//! Progress reporting while a talk is composed and refined

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use talk_application::ports::progress::TalkProgressNotifier;
use talk_domain::{Document, Intent};

/// Reports progress with an animated spinner
pub struct SpinnerProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, prefix: &str, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(prefix.to_string());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    fn finish(&self, message: String) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_with_message(message);
        }
    }

    fn clear(&self) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl TalkProgressNotifier for SpinnerProgress {
    fn on_compose_start(&self, topic: &str) {
        self.start("Composing", format!("a talk on {}...", topic));
    }

    fn on_compose_complete(&self, document: &Document) {
        self.finish(format!(
            "{} ({} sections)",
            "done!".green(),
            document.sections().len()
        ));
    }

    fn on_compose_failed(&self) {
        self.clear();
    }

    fn on_refine_start(&self, intent: Intent) {
        self.start("Refining", format!("{}...", intent));
    }

    fn on_refine_complete(&self, intent: Intent, changed: bool) {
        if changed {
            self.finish(format!("{} {}", intent, "applied".green()));
        } else {
            self.finish(format!("{} {}", intent, "left the talk unchanged".yellow()));
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl TalkProgressNotifier for SimpleProgress {
    fn on_compose_start(&self, topic: &str) {
        eprintln!("{} {} {}", "->".cyan(), "Composing talk on".bold(), topic);
    }

    fn on_compose_complete(&self, document: &Document) {
        eprintln!(
            "  {} {} sections",
            "v".green(),
            document.sections().len()
        );
    }

    fn on_compose_failed(&self) {
        eprintln!("  {} not composed", "x".red());
    }

    fn on_refine_start(&self, intent: Intent) {
        eprintln!("{} {}", "->".cyan(), intent.display_name().bold());
    }

    fn on_refine_complete(&self, _intent: Intent, changed: bool) {
        if changed {
            eprintln!("  {} applied", "v".green());
        } else {
            eprintln!("  {} unchanged", "-".yellow());
        }
    }
}
