//! Save file locations
//!
//! Saves live under the local data directory unless the settings point
//! elsewhere. Names typed at the console are sanitized before use; absolute
//! paths are taken as given.

use std::path::{Path, PathBuf};

use crate::settings::FileSettings;

/// Root of everything the game writes
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("emberfall")
}

/// Directory bare save names resolve into
pub fn save_dir(files: &FileSettings) -> PathBuf {
    files
        .save_dir
        .clone()
        .unwrap_or_else(|| data_dir().join("saves"))
}

/// Path of the save the player asked for, or the default save
pub fn save_path(files: &FileSettings, requested: Option<&str>) -> PathBuf {
    let name = requested
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(files.save_name.as_str());
    resolve_in(&save_dir(files), name, &files.save_name)
}

/// Path of the event log
pub fn event_log_path(files: &FileSettings) -> PathBuf {
    resolve_in(&data_dir(), &files.event_log, "game_log.txt")
}

fn resolve_in(dir: &Path, name: &str, fallback: &str) -> PathBuf {
    let path = Path::new(name);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let safe = sanitize_filename(name);
    if safe.chars().all(|c| c == '.') {
        return dir.join(sanitize_filename(fallback));
    }
    dir.join(safe)
}

/// Sanitize a save name into a valid filename
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .to_lowercase()
}
