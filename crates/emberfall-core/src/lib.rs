//! Emberfall Core - Shared plumbing for the Emberfall engine
//!
//! This crate provides the pieces the game crate builds on:
//! - The comma-delimited record codec used by save files
//! - The player-facing event log and its sink trait

pub mod event_log;
pub mod record;

pub use event_log::{EventLogError, EventSink, FileEventLog, MemoryEventLog};
pub use record::FormatError;
