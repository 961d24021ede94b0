use std::cmp::Ordering;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    error::ApiError,
    response::{ok, ok_with_message, paginate, PageQuery, Paginated},
    skills::{
        data::FALLBACK_SKILLS,
        model::Skill,
        normalize::validate_skill_payload,
        repo::{self, row_to_skill, SkillFilter, SkillRow},
    },
    state::AppState,
};

const LOAD_ERROR: &str = "스킬 정보를 불러오는 중 오류가 발생했습니다";
const STORE_ERROR: &str = "스킬 정보를 저장하는 중 오류가 발생했습니다";
const UPDATE_ERROR: &str = "스킬 정보를 수정하는 중 오류가 발생했습니다";
const DELETE_ERROR: &str = "스킬을 삭제하는 중 오류가 발생했습니다";
const NOT_FOUND: &str = "스킬을 찾을 수 없습니다.";
const NO_DATABASE: &str = "데이터베이스가 설정되지 않았습니다";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/skills", get(list_skills).post(create_skill))
        .route(
            "/skills/:id",
            get(get_skill).put(update_skill).delete(delete_skill),
        )
}

#[derive(Debug, Default, Deserialize)]
pub struct SkillListQuery {
    pub class: Option<String>,
    #[serde(rename = "type")]
    pub skill_type: Option<String>,
    #[serde(rename = "usageType")]
    pub usage_type: Option<String>,
}

impl SkillListQuery {
    fn into_filter(self) -> SkillFilter {
        SkillFilter {
            class: self.class.filter(|v| !v.is_empty()),
            skill_type: self.skill_type.filter(|v| !v.is_empty()),
            usage_type: self.usage_type.filter(|v| !v.is_empty()),
        }
    }
}

fn matches_filter(skill: &Skill, filter: &SkillFilter) -> bool {
    filter
        .class
        .as_deref()
        .map_or(true, |class| skill.class.as_str() == class)
        && filter
            .skill_type
            .as_deref()
            .map_or(true, |skill_type| skill.skill_type.as_str() == skill_type)
        && filter
            .usage_type
            .as_deref()
            .map_or(true, |usage_type| skill.usage_type == usage_type)
}

/// Level descending, then name ascending. The fallback path applies the
/// same ordering as the database query.
fn fallback_page(filter: &SkillFilter, page: i64, page_size: i64) -> Paginated<Skill> {
    let mut skills: Vec<Skill> = FALLBACK_SKILLS
        .iter()
        .filter(|skill| matches_filter(skill, filter))
        .cloned()
        .collect();
    skills.sort_by(|a, b| {
        b.level
            .partial_cmp(&a.level)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    paginate(skills, page, page_size)
}

async fn db_page(
    db: &PgPool,
    filter: &SkillFilter,
    page: i64,
    page_size: i64,
) -> Result<Paginated<Skill>, ApiError> {
    let (rows, total) = repo::list(db, filter, page, page_size)
        .await
        .map_err(ApiError::internal(LOAD_ERROR))?;
    let skills = rows
        .into_iter()
        .map(row_to_skill)
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(ApiError::internal(LOAD_ERROR))?;
    Ok(Paginated::from_parts(skills, total, page, page_size))
}

#[instrument(skip(state))]
pub async fn list_skills(
    State(state): State<AppState>,
    Query(query): Query<SkillListQuery>,
    Query(pagination): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = pagination.page();
    let page_size = pagination.page_size();
    let filter = query.into_filter();

    let result = match &state.db {
        Some(db) => db_page(db, &filter, page, page_size).await?,
        None => fallback_page(&filter, page, page_size),
    };
    Ok(ok(result))
}

#[instrument(skip(state, payload))]
pub async fn create_skill(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let skill = validate_skill_payload(&payload)?;

    let db = state
        .db
        .as_ref()
        .ok_or_else(|| ApiError::Configuration(NO_DATABASE.into()))?;

    let row = SkillRow::from_skill(&skill, Uuid::new_v4());
    let inserted = repo::insert(db, &row)
        .await
        .map_err(ApiError::internal(STORE_ERROR))?;
    let skill = row_to_skill(inserted).map_err(ApiError::internal(STORE_ERROR))?;

    info!(skill_id = ?skill.id, "skill created");
    Ok((StatusCode::CREATED, ok(skill)))
}

#[instrument(skip(state))]
pub async fn get_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(db) = state.db.as_ref() else {
        let skill = FALLBACK_SKILLS
            .iter()
            .find(|skill| skill.id.as_deref() == Some(id.as_str()))
            .cloned()
            .ok_or_else(|| ApiError::NotFound(NOT_FOUND.into()))?;
        return Ok(ok(skill));
    };

    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound(NOT_FOUND.into()))?;
    let row = repo::get(db, id)
        .await
        .map_err(ApiError::internal(LOAD_ERROR))?
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.into()))?;
    let skill = row_to_skill(row).map_err(ApiError::internal(LOAD_ERROR))?;
    Ok(ok(skill))
}

#[instrument(skip(state, payload))]
pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state
        .db
        .as_ref()
        .ok_or_else(|| ApiError::Configuration(NO_DATABASE.into()))?;

    let skill = validate_skill_payload(&payload)?;
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound(NOT_FOUND.into()))?;

    let row = SkillRow::from_skill(&skill, id);
    let updated = repo::update(db, id, &row)
        .await
        .map_err(ApiError::internal(UPDATE_ERROR))?
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.into()))?;
    let skill = row_to_skill(updated).map_err(ApiError::internal(UPDATE_ERROR))?;

    info!(skill_id = %id, "skill updated");
    Ok(ok(skill))
}

#[instrument(skip(state))]
pub async fn delete_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state
        .db
        .as_ref()
        .ok_or_else(|| ApiError::Configuration(NO_DATABASE.into()))?;

    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound(NOT_FOUND.into()))?;
    let deleted = repo::delete(db, id)
        .await
        .map_err(ApiError::internal(DELETE_ERROR))?
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.into()))?;
    let skill = row_to_skill(deleted).map_err(ApiError::internal(DELETE_ERROR))?;

    info!(skill_id = %id, "skill deleted");
    Ok(ok_with_message(skill, "스킬이 삭제되었습니다."))
}
