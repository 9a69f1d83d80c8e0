//! Item data model
//!
//! Items are either equipment (a permanent attack bonus) or consumables
//! (a one-shot heal). Both travel through save files as delimited records
//! of the form `<kind>,<name>,<description>,<value>`.

use std::fmt;

use emberfall_core::record::{self, FormatError};
use serde::{Deserialize, Serialize};

/// Number of fields in an item record
const RECORD_FIELDS: usize = 4;

/// Item category, without the variant payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Equipment,
    Consumable,
}

impl ItemCategory {
    /// Kind token written in front of each record
    pub fn token(self) -> &'static str {
        match self {
            Self::Equipment => "Equipment",
            Self::Consumable => "Consumable",
        }
    }

    /// Look up a category by its record token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Equipment" => Some(Self::Equipment),
            "Consumable" => Some(Self::Consumable),
            _ => None,
        }
    }
}

/// What an item does when used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Worn gear that permanently raises attack
    Equipment { damage_bonus: u32 },
    /// Single-use item that restores health
    Consumable { heal_amount: u32 },
}

impl ItemKind {
    pub fn category(self) -> ItemCategory {
        match self {
            Self::Equipment { .. } => ItemCategory::Equipment,
            Self::Consumable { .. } => ItemCategory::Consumable,
        }
    }

    /// The numeric payload (damage bonus or heal amount)
    pub fn value(self) -> u32 {
        match self {
            Self::Equipment { damage_bonus } => damage_bonus,
            Self::Consumable { heal_amount } => heal_amount,
        }
    }

    fn with_value(category: ItemCategory, value: u32) -> Self {
        match category {
            ItemCategory::Equipment => Self::Equipment {
                damage_bonus: value,
            },
            ItemCategory::Consumable => Self::Consumable { heal_amount: value },
        }
    }
}

/// Observable result of activating an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemEffect {
    Equipped { item: String, attack_bonus: u32 },
    Consumed { item: String, heal_amount: u32 },
}

impl fmt::Display for ItemEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equipped { item, attack_bonus } => {
                write!(f, "Equipped {} (+{} attack)", item, attack_bonus)
            }
            Self::Consumed { item, heal_amount } => {
                write!(f, "Used {} (restores {} health)", item, heal_amount)
            }
        }
    }
}

/// A game item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
        }
    }

    /// Create a piece of equipment
    pub fn equipment(name: impl Into<String>, description: impl Into<String>, damage_bonus: u32) -> Self {
        Self::new(name, description, ItemKind::Equipment { damage_bonus })
    }

    /// Create a consumable
    pub fn consumable(name: impl Into<String>, description: impl Into<String>, heal_amount: u32) -> Self {
        Self::new(name, description, ItemKind::Consumable { heal_amount })
    }

    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    pub fn is_equipment(&self) -> bool {
        self.category() == ItemCategory::Equipment
    }

    pub fn is_consumable(&self) -> bool {
        self.category() == ItemCategory::Consumable
    }

    /// Describe what using this item does
    pub fn activate(&self) -> ItemEffect {
        match self.kind {
            ItemKind::Equipment { damage_bonus } => ItemEffect::Equipped {
                item: self.name.clone(),
                attack_bonus: damage_bonus,
            },
            ItemKind::Consumable { heal_amount } => ItemEffect::Consumed {
                item: self.name.clone(),
                heal_amount,
            },
        }
    }

    /// Encode as `<kind>,<name>,<description>,<value>`
    pub fn to_record(&self) -> String {
        let value = self.kind.value().to_string();
        record::join_record(&[
            self.category().token(),
            self.name.as_str(),
            self.description.as_str(),
            value.as_str(),
        ])
    }

    /// Check that [`Item::to_record`] output will decode back to this item
    pub fn check_record(&self) -> Result<(), FormatError> {
        record::check_text("item name", &self.name)?;
        record::check_text("item description", &self.description)
    }

    /// Decode a record produced by [`Item::to_record`]
    pub fn from_record(line: &str) -> Result<Self, FormatError> {
        let fields = record::split_record(line, RECORD_FIELDS)?;
        let category = ItemCategory::from_token(fields[0])
            .ok_or_else(|| FormatError::UnknownKind(fields[0].to_string()))?;
        let value = record::parse_number("value", fields[3])?;

        Ok(Self::new(
            fields[1],
            fields[2],
            ItemKind::with_value(category, value),
        ))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}
