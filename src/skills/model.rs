use serde::{Deserialize, Serialize};

/// The eight playable classes. One shared definition feeds validation,
/// persistence and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterClass {
    #[serde(rename = "검성")]
    Swordmaster,
    #[serde(rename = "수호성")]
    Guardian,
    #[serde(rename = "살성")]
    Assassin,
    #[serde(rename = "궁성")]
    Ranger,
    #[serde(rename = "마도성")]
    Sorcerer,
    #[serde(rename = "정령성")]
    Elementalist,
    #[serde(rename = "호법성")]
    Chanter,
    #[serde(rename = "치유성")]
    Cleric,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 8] = [
        CharacterClass::Swordmaster,
        CharacterClass::Guardian,
        CharacterClass::Assassin,
        CharacterClass::Ranger,
        CharacterClass::Sorcerer,
        CharacterClass::Elementalist,
        CharacterClass::Chanter,
        CharacterClass::Cleric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterClass::Swordmaster => "검성",
            CharacterClass::Guardian => "수호성",
            CharacterClass::Assassin => "살성",
            CharacterClass::Ranger => "궁성",
            CharacterClass::Sorcerer => "마도성",
            CharacterClass::Elementalist => "정령성",
            CharacterClass::Chanter => "호법성",
            CharacterClass::Cleric => "치유성",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// What a skill does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillType {
    #[serde(rename = "공격")]
    Attack,
    #[serde(rename = "방어")]
    Defense,
    #[serde(rename = "버프")]
    Buff,
    #[serde(rename = "디버프")]
    Debuff,
    #[serde(rename = "회복")]
    Recovery,
    #[serde(rename = "소환")]
    Summon,
    #[serde(rename = "이동")]
    Movement,
    #[serde(rename = "기타")]
    Misc,
    #[serde(rename = "강화")]
    Enhance,
}

impl SkillType {
    pub const ALL: [SkillType; 9] = [
        SkillType::Attack,
        SkillType::Defense,
        SkillType::Buff,
        SkillType::Debuff,
        SkillType::Recovery,
        SkillType::Summon,
        SkillType::Movement,
        SkillType::Misc,
        SkillType::Enhance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillType::Attack => "공격",
            SkillType::Defense => "방어",
            SkillType::Buff => "버프",
            SkillType::Debuff => "디버프",
            SkillType::Recovery => "회복",
            SkillType::Summon => "소환",
            SkillType::Movement => "이동",
            SkillType::Misc => "기타",
            SkillType::Enhance => "강화",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// Optional elemental affinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "불")]
    Fire,
    #[serde(rename = "물")]
    Water,
    #[serde(rename = "바람")]
    Wind,
    #[serde(rename = "땅")]
    Earth,
    #[serde(rename = "신성")]
    Holy,
    #[serde(rename = "어둠")]
    Dark,
}

impl Element {
    pub const ALL: [Element; 6] = [
        Element::Fire,
        Element::Water,
        Element::Wind,
        Element::Earth,
        Element::Holy,
        Element::Dark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "불",
            Element::Water => "물",
            Element::Wind => "바람",
            Element::Earth => "땅",
            Element::Holy => "신성",
            Element::Dark => "어둠",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == value)
    }
}

/// Cast time is the one field allowed to be non-numeric: either a
/// duration in seconds or a free-text label such as "즉시 시전".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CastTime {
    Seconds(f64),
    Label(String),
}

impl CastTime {
    /// Storage keeps cast time as text. A numeric value is rendered the
    /// same way `from_stored` will parse it back.
    pub fn to_stored(&self) -> String {
        match self {
            CastTime::Seconds(seconds) => seconds.to_string(),
            CastTime::Label(label) => label.clone(),
        }
    }

    /// Reads the stored text back, parsing numeric strings into the
    /// numeric variant so a number-valued cast time round-trips.
    pub fn from_stored(text: &str) -> CastTime {
        match text.parse::<f64>() {
            Ok(seconds) => CastTime::Seconds(seconds),
            Err(_) => CastTime::Label(text.to_string()),
        }
    }
}

/// A structured effect entry attached to a skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEffect {
    #[serde(rename = "type")]
    pub effect_type: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub description: String,
}

/// External (API-facing) shape of a skill record. Optional fields stay
/// absent rather than defaulting, which distinguishes "not applicable"
/// from zero or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub class: CharacterClass,
    pub level: f64,
    #[serde(rename = "type")]
    pub skill_type: SkillType,
    pub usage_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<Element>,
    pub cooldown: f64,
    pub mp_cost: f64,
    pub range: f64,
    pub cast_time: CastTime,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groggy_gauge: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_charge: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<SkillEffect>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_round_trips_through_str() {
        for class in CharacterClass::ALL {
            assert_eq!(CharacterClass::parse(class.as_str()), Some(class));
        }
        assert_eq!(CharacterClass::parse("전사"), None);
    }

    #[test]
    fn enums_serialize_to_korean_labels() {
        assert_eq!(
            serde_json::to_string(&CharacterClass::Swordmaster).unwrap(),
            "\"검성\""
        );
        assert_eq!(serde_json::to_string(&SkillType::Attack).unwrap(), "\"공격\"");
        assert_eq!(serde_json::to_string(&Element::Holy).unwrap(), "\"신성\"");
    }

    #[test]
    fn cast_time_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&CastTime::Seconds(1.5)).unwrap(),
            "1.5"
        );
        assert_eq!(
            serde_json::to_string(&CastTime::Label("즉시 시전".into())).unwrap(),
            "\"즉시 시전\""
        );
    }

    #[test]
    fn numeric_cast_time_round_trips_through_storage_text() {
        let stored = CastTime::Seconds(2.5).to_stored();
        assert_eq!(stored, "2.5");
        assert_eq!(CastTime::from_stored(&stored), CastTime::Seconds(2.5));

        let stored = CastTime::Label("즉시 시전".into()).to_stored();
        assert_eq!(CastTime::from_stored(&stored), CastTime::Label("즉시 시전".into()));
    }

    #[test]
    fn skill_serializes_with_camel_case_keys() {
        let skill = Skill {
            id: Some("1".into()),
            name: "테스트".into(),
            class: CharacterClass::Swordmaster,
            level: 10.0,
            skill_type: SkillType::Attack,
            usage_type: "액티브".into(),
            element: None,
            cooldown: 8.0,
            mp_cost: 30.0,
            range: 20.0,
            cast_time: CastTime::Label("즉시 시전".into()),
            description: "설명".into(),
            groggy_gauge: None,
            max_charge: None,
            tags: None,
            target: None,
            specialization: None,
            effects: None,
            icon: None,
        };
        let json = serde_json::to_value(&skill).unwrap();
        assert_eq!(json["usageType"], "액티브");
        assert_eq!(json["mpCost"], 30.0);
        assert_eq!(json["castTime"], "즉시 시전");
        assert_eq!(json["type"], "공격");
        assert!(json.get("groggyGauge").is_none());
    }
}
