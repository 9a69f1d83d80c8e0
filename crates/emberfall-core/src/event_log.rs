//! Player-facing event journal
//!
//! The game reports notable moments (combat start, hits, saves) to an
//! [`EventSink`]. Sinks never fail toward the caller; write problems are
//! reported through `tracing` and otherwise ignored.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, SecondsFormat};

/// Errors that can occur while opening an event log
#[derive(Debug, thiserror::Error)]
pub enum EventLogError {
    #[error("failed to open event log '{0}': {1}")]
    Open(PathBuf, #[source] io::Error),
}

/// Destination for timestamped game events
pub trait EventSink {
    /// Record one event message
    fn record_event(&mut self, message: &str);
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn record_event(&mut self, message: &str) {
        (**self).record_event(message);
    }
}

impl<T: EventSink + ?Sized> EventSink for Box<T> {
    fn record_event(&mut self, message: &str) {
        (**self).record_event(message);
    }
}

/// Append-only event log backed by a text file.
///
/// Each event becomes one line: `<timestamp>: <message>`. The file is opened
/// in append mode when the log is created and flushed and closed on drop.
pub struct FileEventLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileEventLog {
    /// Open (or create) the log file for appending
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EventLogError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| EventLogError::Open(path.clone(), e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| EventLogError::Open(path.clone(), e))?;

        tracing::debug!("Opened event log: {}", path.display());

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&mut self, message: &str) -> io::Result<()> {
        let timestamp = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);
        writeln!(self.writer, "{}: {}", timestamp, message)?;
        self.writer.flush()
    }
}

impl EventSink for FileEventLog {
    fn record_event(&mut self, message: &str) {
        if let Err(e) = self.write_line(message) {
            tracing::warn!("Failed to write to event log {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for FileEventLog {
    fn drop(&mut self) {
        if let Err(e) = self.writer.flush() {
            tracing::warn!("Failed to flush event log {}: {}", self.path.display(), e);
        }
    }
}

/// In-memory sink that keeps every message (no timestamps)
#[derive(Debug, Clone, Default)]
pub struct MemoryEventLog {
    entries: Vec<String>,
}

impl MemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether any recorded message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.contains(needle))
    }
}

impl EventSink for MemoryEventLog {
    fn record_event(&mut self, message: &str) {
        self.entries.push(message.to_string());
    }
}
