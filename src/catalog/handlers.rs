use axum::{extract::Query, response::IntoResponse, routing::get, Router};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    catalog::{
        data::{CHARACTERS, ITEMS},
        search::search,
    },
    error::ApiError,
    response::{ok, paginate, PageQuery},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/characters", get(list_characters))
        .route("/items", get(list_items))
        .route("/search", get(unified_search))
}

#[derive(Debug, Default, Deserialize)]
pub struct CharacterListQuery {
    pub class: Option<String>,
}

#[instrument]
pub async fn list_characters(
    Query(query): Query<CharacterListQuery>,
    Query(pagination): Query<PageQuery>,
) -> impl IntoResponse {
    let class = query.class.filter(|c| !c.is_empty());
    let characters = CHARACTERS
        .iter()
        .filter(|character| class.as_deref().map_or(true, |c| character.class == c))
        .cloned()
        .collect::<Vec<_>>();
    ok(paginate(characters, pagination.page(), pagination.page_size()))
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemListQuery {
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub grade: Option<String>,
}

#[instrument]
pub async fn list_items(
    Query(query): Query<ItemListQuery>,
    Query(pagination): Query<PageQuery>,
) -> impl IntoResponse {
    let item_type = query.item_type.filter(|t| !t.is_empty());
    let grade = query.grade.filter(|g| !g.is_empty());
    let items = ITEMS
        .iter()
        .filter(|item| {
            item_type
                .as_deref()
                .map_or(true, |t| item.item_type.as_str() == t)
                && grade.as_deref().map_or(true, |g| item.grade.as_str() == g)
        })
        .cloned()
        .collect::<Vec<_>>();
    ok(paginate(items, pagination.page(), pagination.page_size()))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(rename = "type")]
    pub scope: Option<String>,
}

#[instrument]
pub async fn unified_search(
    Query(query): Query<SearchQuery>,
    Query(pagination): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    if query.q.trim().is_empty() {
        return Err(ApiError::Validation("검색어를 입력해주세요".into()));
    }

    let scope = query.scope.as_deref().unwrap_or("all");
    let results = search(&query.q, scope);
    Ok(ok(paginate(results, pagination.page(), pagination.page_size())))
}
