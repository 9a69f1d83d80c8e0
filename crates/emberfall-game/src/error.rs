use std::io;
use std::path::PathBuf;

use emberfall_core::FormatError;

/// The character's health reached zero.
///
/// This is the expected end of a lost fight, not a programming error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{name} has been defeated")]
pub struct Defeated {
    pub name: String,
}

/// Errors raised by gameplay operations
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("item '{0}' not found in inventory")]
    NotFound(String),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("not the {expected} turn (combat is at {actual})")]
    OutOfTurn {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("combat has already ended")]
    CombatOver,

    #[error("the game session is over")]
    SessionOver,

    #[error("player input closed before the fight was decided")]
    InputClosed,
}

/// Errors raised while restoring a saved game
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read save file '{0}': {1}")]
    Read(PathBuf, #[source] io::Error),

    #[error("save file '{0}' is malformed: {1}")]
    Malformed(PathBuf, #[source] FormatError),

    #[error("the game session is over")]
    SessionOver,
}

/// Errors raised while writing a saved game
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to write save file '{0}': {1}")]
    Write(PathBuf, #[source] io::Error),

    #[error("cannot save to '{0}': {1}")]
    Unwritable(PathBuf, #[source] FormatError),

    #[error("the game session is over")]
    SessionOver,
}
