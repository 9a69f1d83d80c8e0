//! Character save/load persistence
//!
//! A save is two plain-text files: the character file holds seven lines
//! (name, current health, max health, attack, defense, level, experience)
//! and a sibling `<save>_inventory` file holds one item record per line.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use emberfall_core::record::{self, FormatError};

use crate::combat::inventory::Inventory;
use crate::combat::item::Item;
use crate::error::{LoadError, SaveError};
use crate::player::{Character, CharacterStats, PlayerProgression};

/// Lines in a character file
pub const CHARACTER_LINES: usize = 7;

const INVENTORY_SUFFIX: &str = "_inventory";

/// Path of the inventory file that goes with a character file
pub fn inventory_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(INVENTORY_SUFFIX);
    PathBuf::from(name)
}

/// Encode a character (without inventory) as its seven lines
pub fn character_to_text(character: &Character) -> String {
    let stats = character.stats();
    let progression = character.progression();
    format!(
        "{}\n{}\n{}\n{}\n{}\n{}\n{}\n",
        character.name(),
        stats.current_hp,
        stats.max_hp,
        stats.attack,
        stats.defense,
        progression.level,
        progression.experience
    )
}

/// Decode a character file, pairing it with an already-parsed inventory
pub fn parse_character(text: &str, inventory: Inventory) -> Result<Character, FormatError> {
    let lines: Vec<&str> = text.lines().take(CHARACTER_LINES).collect();
    if lines.len() < CHARACTER_LINES {
        return Err(FormatError::MissingLine {
            expected: CHARACTER_LINES,
            found: lines.len(),
        });
    }

    let name = lines[0].trim_end_matches('\r').to_string();
    let current_hp = record::parse_number("current health", lines[1])?;
    let max_hp = record::parse_number("max health", lines[2])?;
    let attack = record::parse_number("attack", lines[3])?;
    let defense = record::parse_number("defense", lines[4])?;
    let level = record::parse_number("level", lines[5])?;
    let experience = record::parse_number("experience", lines[6])?;

    if level == 0 {
        return Err(FormatError::InvalidValue {
            field: "level",
            reason: "level must be at least 1".to_string(),
        });
    }
    if current_hp == 0 {
        return Err(FormatError::InvalidValue {
            field: "current health",
            reason: "a saved character must be alive".to_string(),
        });
    }
    if current_hp > max_hp {
        return Err(FormatError::InvalidValue {
            field: "current health",
            reason: format!("{} exceeds max health {}", current_hp, max_hp),
        });
    }

    let stats = CharacterStats {
        max_hp,
        current_hp,
        attack,
        defense,
    };
    let progression = PlayerProgression { level, experience };
    Ok(Character::from_parts(name, stats, progression, inventory))
}

/// Check that a character and its items can be written and read back.
///
/// Names may not contain line breaks; item text may not contain the
/// record delimiter either.
pub fn check_character(character: &Character) -> Result<(), FormatError> {
    if character.name().contains(['\n', '\r']) {
        return Err(FormatError::InvalidValue {
            field: "name",
            reason: "contains a line break".to_string(),
        });
    }
    character.inventory().iter().try_for_each(Item::check_record)
}

/// Write the character file and its inventory file, overwriting both.
///
/// Nothing is written if the character fails [`check_character`].
pub fn save_character(character: &Character, path: &Path) -> Result<(), SaveError> {
    check_character(character).map_err(|e| SaveError::Unwritable(path.to_path_buf(), e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SaveError::Write(parent.to_path_buf(), e))?;
    }

    fs::write(path, character_to_text(character))
        .map_err(|e| SaveError::Write(path.to_path_buf(), e))?;

    let inv_path = inventory_path(path);
    fs::write(&inv_path, character.inventory().serialize())
        .map_err(|e| SaveError::Write(inv_path.clone(), e))?;

    tracing::info!("Saved character '{}' to {:?}", character.name(), path);
    Ok(())
}

/// Read a character and its inventory back.
///
/// Nothing is returned unless both files read and parse cleanly.
pub fn load_character(path: &Path) -> Result<Character, LoadError> {
    let inv_path = inventory_path(path);
    let text = fs::read_to_string(path).map_err(|e| LoadError::Read(path.to_path_buf(), e))?;
    let inv_text =
        fs::read_to_string(&inv_path).map_err(|e| LoadError::Read(inv_path.clone(), e))?;

    let inventory =
        Inventory::parse(&inv_text).map_err(|e| LoadError::Malformed(inv_path.clone(), e))?;
    let character =
        parse_character(&text, inventory).map_err(|e| LoadError::Malformed(path.to_path_buf(), e))?;

    tracing::info!("Loaded character '{}' from {:?}", character.name(), path);
    Ok(character)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seasoned_hero() -> Character {
        let mut hero = Character::new("Aria", CharacterStats::new(100, 10, 5));
        hero.add_item(Item::equipment("Steel Sword", "A sharp steel blade", 5));
        hero.add_item(Item::consumable("Healing Potion", "Restores health", 30));
        hero.use_item("Steel Sword").unwrap();
        hero.gain_experience(130);
        hero.receive_damage(25).unwrap();
        hero
    }

    #[test]
    fn test_inventory_path() {
        assert_eq!(
            inventory_path(Path::new("saves/savegame.txt")),
            PathBuf::from("saves/savegame.txt_inventory")
        );
    }

    #[test]
    fn test_character_text_layout() {
        let hero = Character::new("Aria", CharacterStats::new(100, 10, 5));
        assert_eq!(character_to_text(&hero), "Aria\n100\n100\n10\n5\n1\n0\n");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("savegame.txt");
        let hero = seasoned_hero();

        save_character(&hero, &path).unwrap();
        assert!(path.exists());
        assert!(inventory_path(&path).exists());

        let loaded = load_character(&path).unwrap();
        assert_eq!(loaded, hero);
        assert_eq!(loaded.level(), 2);
        assert_eq!(loaded.attack_power(), 17);
        assert_eq!(loaded.inventory().len(), 2);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("slot1");

        save_character(&seasoned_hero(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_character(&dir.path().join("nothing")).unwrap_err();
        assert!(matches!(err, LoadError::Read(..)));
    }

    #[test]
    fn test_load_missing_inventory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("savegame.txt");
        fs::write(&path, "Aria\n100\n100\n10\n5\n1\n0\n").unwrap();

        let err = load_character(&path).unwrap_err();
        assert!(matches!(err, LoadError::Read(ref p, _) if *p == inventory_path(&path)));
    }

    #[test]
    fn test_load_malformed_character() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("savegame.txt");
        fs::write(&path, "Aria\n100\nlots\n10\n5\n1\n0\n").unwrap();
        fs::write(inventory_path(&path), "").unwrap();

        let err = load_character(&path).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Malformed(_, FormatError::InvalidNumber { field: "max health", .. })
        ));
    }

    #[test]
    fn test_parse_character_short_file() {
        let err = parse_character("Aria\n100\n100\n", Inventory::new()).unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingLine {
                expected: 7,
                found: 3
            }
        );
    }

    #[test]
    fn test_parse_character_rejects_bad_values() {
        let err = parse_character("Aria\n120\n100\n10\n5\n1\n0\n", Inventory::new()).unwrap_err();
        assert!(matches!(err, FormatError::InvalidValue { field: "current health", .. }));

        let err = parse_character("Aria\n100\n100\n10\n5\n0\n0\n", Inventory::new()).unwrap_err();
        assert!(matches!(err, FormatError::InvalidValue { field: "level", .. }));
    }

    #[test]
    fn test_parse_character_rejects_zero_health() {
        let err = parse_character("Ghost\n0\n100\n20\n8\n1\n0\n", Inventory::new()).unwrap_err();
        assert!(matches!(err, FormatError::InvalidValue { field: "current health", .. }));
    }

    #[test]
    fn test_parse_character_at_max_level() {
        let mut hero =
            parse_character("Max\n100\n100\n10\n5\n4294967295\n99\n", Inventory::new()).unwrap();
        assert_eq!(hero.gain_experience(1), None);
        assert_eq!(hero.level(), u32::MAX);
    }

    #[test]
    fn test_save_rejects_item_with_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("savegame.txt");
        let mut hero = seasoned_hero();
        hero.add_item(Item::equipment("Sword, Steel", "A sharp steel blade", 5));

        let err = save_character(&hero, &path).unwrap_err();
        assert!(matches!(
            err,
            SaveError::Unwritable(_, FormatError::InvalidValue { field: "item name", .. })
        ));
        assert!(!path.exists());
        assert!(!inventory_path(&path).exists());
    }

    #[test]
    fn test_save_rejects_multiline_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("savegame.txt");
        let hero = Character::new("Aria\n100", CharacterStats::new(100, 10, 5));

        let err = save_character(&hero, &path).unwrap_err();
        assert!(matches!(
            err,
            SaveError::Unwritable(_, FormatError::InvalidValue { field: "name", .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_parse_character_accepts_crlf() {
        let hero = parse_character("Aria\r\n80\r\n100\r\n10\r\n5\r\n1\r\n20\r\n", Inventory::new())
            .unwrap();
        assert_eq!(hero.name(), "Aria");
        assert_eq!(hero.current_health(), 80);
        assert_eq!(hero.experience(), 20);
    }
}
