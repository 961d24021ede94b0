use serde::Serialize;
use serde_json::Value;

use crate::catalog::data::{CHARACTERS, GUIDES, ITEMS};

/// One match in the unified search: the kind tag, display fields and the
/// original record.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: String,
    pub description: String,
    pub data: Value,
}

fn in_scope(scope: &str, kind: &str) -> bool {
    scope == "all" || scope == kind
}

/// Case-insensitive substring search across the reference collections.
/// Matches from every kind in scope are unioned into one flat list.
pub fn search(query: &str, scope: &str) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    let mut results = Vec::new();

    if in_scope(scope, "character") {
        for character in CHARACTERS.iter() {
            let haystacks = [&character.name, &character.class];
            if haystacks.iter().any(|h| h.to_lowercase().contains(&needle)) {
                results.push(SearchResult {
                    id: format!("character-{}", character.id),
                    kind: "character",
                    title: character.name.clone(),
                    description: format!("{} · Lv.{}", character.class, character.level),
                    data: serde_json::to_value(character).unwrap_or(Value::Null),
                });
            }
        }
    }

    if in_scope(scope, "item") {
        for item in ITEMS.iter() {
            let matched = item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
                || item.item_type.as_str().contains(&needle)
                || item.grade.as_str().contains(&needle);
            if matched {
                results.push(SearchResult {
                    id: format!("item-{}", item.id),
                    kind: "item",
                    title: item.name.clone(),
                    description: item.description.clone(),
                    data: serde_json::to_value(item).unwrap_or(Value::Null),
                });
            }
        }
    }

    if in_scope(scope, "guide") {
        for guide in GUIDES.iter() {
            let haystacks = [&guide.title, &guide.content, &guide.category];
            if haystacks.iter().any(|h| h.to_lowercase().contains(&needle)) {
                results.push(SearchResult {
                    id: format!("guide-{}", guide.id),
                    kind: "guide",
                    title: guide.title.clone(),
                    description: guide.content.clone(),
                    data: serde_json::to_value(guide).unwrap_or(Value::Null),
                });
            }
        }
    }

    results
}
