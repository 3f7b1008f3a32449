//! JSONL transcript writer.
//!
//! Every [`ConversationEvent`] becomes one [`TranscriptRecord`] line: a
//! per-file sequence number, an RFC 3339 timestamp, the speaker for turn
//! events, then the event's own tagged fields.

use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use talk_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use talk_domain::Speaker;
use tracing::warn;

/// One line of a transcript file
#[derive(Debug, Serialize)]
pub struct TranscriptRecord<'a> {
    /// Position in the file, continuing across sessions that append to it
    pub seq: u64,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<Speaker>,
    #[serde(flatten)]
    pub event: &'a ConversationEvent,
}

impl<'a> TranscriptRecord<'a> {
    pub fn new(seq: u64, event: &'a ConversationEvent) -> Self {
        Self {
            seq,
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            speaker: event.speaker(),
            event,
        }
    }
}

struct TranscriptFile {
    writer: BufWriter<File>,
    next_seq: u64,
}

/// Appends the refinement transcript to a JSONL file.
///
/// Flushes after every record and again on `Drop`.
pub struct JsonlConversationLogger {
    file: Mutex<TranscriptFile>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open `path` for appending, creating it and its parent directories.
    ///
    /// Sequence numbers continue after the lines already in the file.
    /// Returns `None` (after a warning) if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create transcript directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(path)
        {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open transcript {}: {}", path.display(), e);
                return None;
            }
        };

        let next_seq = match file.try_clone() {
            Ok(existing) => BufReader::new(existing).lines().map_while(Result::ok).count() as u64,
            Err(_) => 0,
        };

        Some(Self {
            file: Mutex::new(TranscriptFile {
                writer: BufWriter::new(file),
                next_seq,
            }),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let Ok(mut file) = self.file.lock() else {
            return;
        };

        let record = TranscriptRecord::new(file.next_seq, &event);
        let line = match serde_json::to_string(&record) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not serialize {} record: {}", event.event_type(), e);
                return;
            }
        };

        if let Err(e) = writeln!(file.writer, "{}", line).and_then(|_| file.writer.flush()) {
            warn!("Could not write to transcript {}: {}", self.path.display(), e);
            return;
        }
        file.next_seq += 1;
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.writer.flush();
        }
    }
}
