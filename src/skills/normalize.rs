use serde_json::Value;

use crate::error::ApiError;
use crate::skills::model::{CastTime, CharacterClass, Element, Skill, SkillEffect, SkillType};

/// Required fields, checked in this order so the error always names the
/// first missing one.
const REQUIRED_FIELDS: [&str; 10] = [
    "name",
    "class",
    "level",
    "type",
    "usageType",
    "cooldown",
    "mpCost",
    "range",
    "castTime",
    "description",
];

/// Validates and normalizes a loosely-typed inbound payload into a
/// persistence-ready `Skill`. Numeric-looking strings are coerced, text
/// fields trimmed, and optional fields kept absent rather than defaulted.
pub fn validate_skill_payload(payload: &Value) -> Result<Skill, ApiError> {
    let Some(body) = payload.as_object() else {
        return Err(ApiError::Validation("요청 본문이 올바르지 않습니다.".into()));
    };

    for field in REQUIRED_FIELDS {
        let missing = match body.get(field) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        };
        if missing {
            return Err(ApiError::Validation(format!("{field} 값은 필수입니다.")));
        }
    }

    Ok(Skill {
        id: body.get("id").and_then(Value::as_str).map(String::from),
        name: require_text(payload, "name")?,
        class: require_class(payload)?,
        level: require_number(payload, "level")?,
        skill_type: require_skill_type(payload)?,
        usage_type: require_text(payload, "usageType")?,
        element: optional_element(payload)?,
        cooldown: require_number(payload, "cooldown")?,
        mp_cost: require_number(payload, "mpCost")?,
        range: require_number(payload, "range")?,
        cast_time: require_cast_time(payload)?,
        description: require_text(payload, "description")?,
        groggy_gauge: optional_number(payload, "groggyGauge")?,
        max_charge: optional_number(payload, "maxCharge")?,
        tags: optional_string_list(payload, "tags"),
        target: optional_text(payload, "target"),
        specialization: optional_string_list(payload, "specialization"),
        effects: optional_effects(payload)?,
        icon: optional_text(payload, "icon"),
    })
}

fn invalid(field: &str) -> ApiError {
    ApiError::Validation(format!("{field} 값이 올바르지 않습니다."))
}

fn coerce_number(value: &Value, field: &str) -> Result<f64, ApiError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| invalid(field)),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid(field)),
        _ => Err(invalid(field)),
    }
}

fn require_number(payload: &Value, field: &str) -> Result<f64, ApiError> {
    match payload.get(field) {
        Some(value) => coerce_number(value, field),
        None => Err(invalid(field)),
    }
}

/// Optional numerics: absent, null and empty-string input all mean "not
/// applicable", which is distinct from an explicit zero.
fn optional_number(payload: &Value, field: &str) -> Result<Option<f64>, ApiError> {
    match payload.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => coerce_number(value, field).map(Some),
    }
}

fn require_text(payload: &Value, field: &str) -> Result<String, ApiError> {
    let text = match payload.get(field) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(invalid(field)),
    };
    if text.is_empty() {
        return Err(ApiError::Validation(format!("{field} 값은 필수입니다.")));
    }
    Ok(text)
}

fn optional_text(payload: &Value, field: &str) -> Option<String> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn require_class(payload: &Value) -> Result<CharacterClass, ApiError> {
    payload
        .get("class")
        .and_then(Value::as_str)
        .and_then(CharacterClass::parse)
        .ok_or_else(|| invalid("class"))
}

fn require_skill_type(payload: &Value) -> Result<SkillType, ApiError> {
    payload
        .get("type")
        .and_then(Value::as_str)
        .and_then(SkillType::parse)
        .ok_or_else(|| invalid("type"))
}

fn optional_element(payload: &Value) -> Result<Option<Element>, ApiError> {
    match payload.get("element") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Element::parse(s).map(Some).ok_or_else(|| invalid("element")),
        Some(_) => Err(invalid("element")),
    }
}

fn require_cast_time(payload: &Value) -> Result<CastTime, ApiError> {
    match payload.get("castTime") {
        Some(Value::Number(n)) => n
            .as_f64()
            .map(CastTime::Seconds)
            .ok_or_else(|| ApiError::Validation("시전 시간 값이 올바르지 않습니다.".into())),
        Some(Value::String(s)) if !s.trim().is_empty() => {
            Ok(CastTime::Label(s.trim().to_string()))
        }
        _ => Err(ApiError::Validation("시전 시간 값이 올바르지 않습니다.".into())),
    }
}

/// Accepts either a ready-made list or free text split on commas and
/// newlines. An empty result means "field absent", never an empty list.
fn optional_string_list(payload: &Value, field: &str) -> Option<Vec<String>> {
    let list = match payload.get(field) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.trim().to_string(),
                other => other.to_string(),
            })
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>(),
        Some(Value::String(raw)) => raw
            .split(|c| matches!(c, ',' | '\n' | '\r'))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        _ => return None,
    };
    if list.is_empty() {
        None
    } else {
        Some(list)
    }
}

fn optional_effects(payload: &Value) -> Result<Option<Vec<SkillEffect>>, ApiError> {
    match payload.get("effects") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value::<Vec<SkillEffect>>(value.clone())
            .map(Some)
            .map_err(|_| invalid("effects")),
    }
}
