use serde::{Deserialize, Serialize};

/// A playable character preset.
#[derive(Debug, Clone, Serialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub class: String,
    pub level: i32,
    pub stats: CharacterStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct CharacterStats {
    pub hp: i32,
    pub mp: i32,
    pub attack: i32,
    pub defense: i32,
    pub accuracy: i32,
    pub evasion: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Armor,
    Accessory,
    Consumable,
    Material,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Weapon => "weapon",
            ItemType::Armor => "armor",
            ItemType::Accessory => "accessory",
            ItemType::Consumable => "consumable",
            ItemType::Material => "material",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemGrade {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl ItemGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemGrade::Common => "common",
            ItemGrade::Uncommon => "uncommon",
            ItemGrade::Rare => "rare",
            ItemGrade::Epic => "epic",
            ItemGrade::Legendary => "legendary",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defense: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evasion: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub grade: ItemGrade,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ItemStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Guide {
    pub id: String,
    pub title: String,
    pub category: String,
    pub content: String,
    pub thumbnail: String,
}
