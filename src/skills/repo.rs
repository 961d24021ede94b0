use anyhow::Context;
use sqlx::{types::Json, FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::skills::model::{CastTime, CharacterClass, Element, Skill, SkillEffect, SkillType};

/// Persisted row shape. The storage layer has no notion of an absent
/// field, only NULL, and keeps every integer-typed value rounded.
#[derive(Debug, Clone, FromRow)]
pub struct SkillRow {
    pub id: Uuid,
    pub name: String,
    pub class: String,
    pub level: i32,
    #[sqlx(rename = "type")]
    pub skill_type: String,
    pub usage_type: String,
    pub element: Option<String>,
    pub cooldown: i32,
    pub mp_cost: i32,
    pub range: i32,
    pub cast_time: String,
    pub description: String,
    pub groggy_gauge: Option<i32>,
    pub max_charge: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub target: Option<String>,
    pub specialization: Option<Vec<String>>,
    pub effects: Option<Json<Vec<SkillEffect>>>,
    pub icon: Option<String>,
}

impl SkillRow {
    /// Maps a validated skill onto the persisted shape: snake_case
    /// columns, integers rounded, absent optionals becoming NULL and
    /// cast time rendered as text.
    pub fn from_skill(skill: &Skill, id: Uuid) -> SkillRow {
        SkillRow {
            id,
            name: skill.name.clone(),
            class: skill.class.as_str().to_string(),
            level: skill.level.round() as i32,
            skill_type: skill.skill_type.as_str().to_string(),
            usage_type: skill.usage_type.clone(),
            element: skill.element.map(|e| e.as_str().to_string()),
            cooldown: skill.cooldown.round() as i32,
            mp_cost: skill.mp_cost.round() as i32,
            range: skill.range.round() as i32,
            cast_time: skill.cast_time.to_stored(),
            description: skill.description.clone(),
            groggy_gauge: skill.groggy_gauge.map(|v| v.round() as i32),
            max_charge: skill.max_charge.map(|v| v.round() as i32),
            tags: skill.tags.clone(),
            target: skill.target.clone(),
            specialization: skill.specialization.clone(),
            effects: skill.effects.clone().map(Json),
            icon: skill.icon.clone(),
        }
    }
}

/// Inverse mapping back to the external shape. NULL, zero and empty
/// optional values all read back as "field absent"; numeric cast-time
/// text parses back into the numeric variant.
pub fn row_to_skill(row: SkillRow) -> anyhow::Result<Skill> {
    let class = CharacterClass::parse(&row.class)
        .with_context(|| format!("stored skill {} has unknown class {:?}", row.id, row.class))?;
    let skill_type = SkillType::parse(&row.skill_type).with_context(|| {
        format!("stored skill {} has unknown type {:?}", row.id, row.skill_type)
    })?;
    let element = match row.element.as_deref().filter(|e| !e.is_empty()) {
        Some(raw) => Some(
            Element::parse(raw).with_context(|| {
                format!("stored skill {} has unknown element {:?}", row.id, raw)
            })?,
        ),
        None => None,
    };

    Ok(Skill {
        id: Some(row.id.to_string()),
        name: row.name,
        class,
        level: row.level as f64,
        skill_type,
        usage_type: row.usage_type,
        element,
        cooldown: row.cooldown as f64,
        mp_cost: row.mp_cost as f64,
        range: row.range as f64,
        cast_time: CastTime::from_stored(&row.cast_time),
        description: row.description,
        groggy_gauge: row.groggy_gauge.filter(|v| *v != 0).map(|v| v as f64),
        max_charge: row.max_charge.filter(|v| *v != 0).map(|v| v as f64),
        tags: row.tags,
        target: row.target.filter(|t| !t.is_empty()),
        specialization: row.specialization,
        effects: row.effects.map(|Json(effects)| effects),
        icon: row.icon.filter(|i| !i.is_empty()),
    })
}

/// Exact-match filters for the skills listing, combined with AND.
#[derive(Debug, Default)]
pub struct SkillFilter {
    pub class: Option<String>,
    pub skill_type: Option<String>,
    pub usage_type: Option<String>,
}

fn push_filters<'a>(qb: &mut QueryBuilder<'a, Postgres>, filter: &'a SkillFilter) {
    let mut sep = " WHERE ";
    if let Some(class) = &filter.class {
        qb.push(sep).push("class = ").push_bind(class);
        sep = " AND ";
    }
    if let Some(skill_type) = &filter.skill_type {
        qb.push(sep).push("\"type\" = ").push_bind(skill_type);
        sep = " AND ";
    }
    if let Some(usage_type) = &filter.usage_type {
        qb.push(sep).push("usage_type = ").push_bind(usage_type);
    }
}

const SELECT_COLUMNS: &str = "id, name, class, level, \"type\", usage_type, element, cooldown, \
     mp_cost, range, cast_time, description, groggy_gauge, max_charge, tags, target, \
     specialization, effects, icon";

/// Fetches one page ordered by level descending then name ascending,
/// together with the post-filter total.
pub async fn list(
    db: &PgPool,
    filter: &SkillFilter,
    page: i64,
    page_size: i64,
) -> anyhow::Result<(Vec<SkillRow>, i64)> {
    let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM skills");
    push_filters(&mut count_query, filter);
    let total: i64 = count_query
        .build_query_scalar()
        .fetch_one(db)
        .await
        .context("count skills")?;

    let mut page_query =
        QueryBuilder::new(format!("SELECT {SELECT_COLUMNS} FROM skills"));
    push_filters(&mut page_query, filter);
    page_query.push(" ORDER BY level DESC, name ASC LIMIT ");
    page_query.push_bind(page_size);
    page_query.push(" OFFSET ");
    page_query.push_bind((page - 1) * page_size);

    let rows = page_query
        .build_query_as::<SkillRow>()
        .fetch_all(db)
        .await
        .context("list skills")?;

    Ok((rows, total))
}

pub async fn get(db: &PgPool, id: Uuid) -> anyhow::Result<Option<SkillRow>> {
    let row = sqlx::query_as::<_, SkillRow>(&format!(
        "SELECT {SELECT_COLUMNS} FROM skills WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(db)
    .await
    .context("get skill")?;
    Ok(row)
}

pub async fn insert(db: &PgPool, row: &SkillRow) -> anyhow::Result<SkillRow> {
    let inserted = sqlx::query_as::<_, SkillRow>(&format!(
        r#"
        INSERT INTO skills (id, name, class, level, "type", usage_type, element, cooldown,
                            mp_cost, range, cast_time, description, groggy_gauge, max_charge,
                            tags, target, specialization, effects, icon)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
        RETURNING {SELECT_COLUMNS}
        "#
    ))
    .bind(row.id)
    .bind(&row.name)
    .bind(&row.class)
    .bind(row.level)
    .bind(&row.skill_type)
    .bind(&row.usage_type)
    .bind(&row.element)
    .bind(row.cooldown)
    .bind(row.mp_cost)
    .bind(row.range)
    .bind(&row.cast_time)
    .bind(&row.description)
    .bind(row.groggy_gauge)
    .bind(row.max_charge)
    .bind(&row.tags)
    .bind(&row.target)
    .bind(&row.specialization)
    .bind(&row.effects)
    .bind(&row.icon)
    .fetch_one(db)
    .await
    .context("insert skill")?;
    Ok(inserted)
}

/// Full replacement by identifier. Returns `None` when the id is unknown.
pub async fn update(db: &PgPool, id: Uuid, row: &SkillRow) -> anyhow::Result<Option<SkillRow>> {
    let updated = sqlx::query_as::<_, SkillRow>(&format!(
        r#"
        UPDATE skills
        SET name = $2, class = $3, level = $4, "type" = $5, usage_type = $6, element = $7,
            cooldown = $8, mp_cost = $9, range = $10, cast_time = $11, description = $12,
            groggy_gauge = $13, max_charge = $14, tags = $15, target = $16,
            specialization = $17, effects = $18, icon = $19
        WHERE id = $1
        RETURNING {SELECT_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&row.name)
    .bind(&row.class)
    .bind(row.level)
    .bind(&row.skill_type)
    .bind(&row.usage_type)
    .bind(&row.element)
    .bind(row.cooldown)
    .bind(row.mp_cost)
    .bind(row.range)
    .bind(&row.cast_time)
    .bind(&row.description)
    .bind(row.groggy_gauge)
    .bind(row.max_charge)
    .bind(&row.tags)
    .bind(&row.target)
    .bind(&row.specialization)
    .bind(&row.effects)
    .bind(&row.icon)
    .fetch_optional(db)
    .await
    .context("update skill")?;
    Ok(updated)
}

pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<Option<SkillRow>> {
    let deleted = sqlx::query_as::<_, SkillRow>(&format!(
        "DELETE FROM skills WHERE id = $1 RETURNING {SELECT_COLUMNS}"
    ))
    .bind(id)
    .fetch_optional(db)
    .await
    .context("delete skill")?;
    Ok(deleted)
}
