use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use gamecodex::{app::build_app, state::AppState};

fn app() -> Router {
    build_app(AppState::for_tests())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn valid_skill_payload() -> Value {
    json!({
        "name": "폭풍의 일격",
        "class": "검성",
        "level": 30,
        "type": "공격",
        "usageType": "액티브",
        "cooldown": 12,
        "mpCost": 80,
        "range": 5,
        "castTime": "즉시 시전",
        "description": "폭풍을 담은 일격을 가합니다.",
    })
}

#[tokio::test]
async fn health_endpoint_responds() {
    let response = app().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn characters_paginate_with_correct_totals() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get("/api/characters?pageSize=3"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], 8);
    assert_eq!(body["data"]["totalPages"], 3);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 3);

    // One past the last page: empty items, unchanged totals.
    let response = app
        .clone()
        .oneshot(get("/api/characters?pageSize=3&page=4"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["total"], 8);
    assert_eq!(body["data"]["totalPages"], 3);
}

#[tokio::test]
async fn character_class_filter_is_exact() {
    let response = app()
        .oneshot(get("/api/characters?class=%EC%A0%84%EC%82%AC")) // 전사
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], 2);
    for item in body["data"]["items"].as_array().unwrap() {
        assert_eq!(item["class"], "전사");
    }
}

#[tokio::test]
async fn non_numeric_pagination_falls_back_to_defaults() {
    let response = app()
        .oneshot(get("/api/characters?page=abc&pageSize=xyz"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["pageSize"], 20);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn item_filters_combine_conjunctively() {
    let app = app();

    let response = app
        .clone()
        .oneshot(get("/api/items?type=consumable&grade=common"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], 2);

    let response = app
        .clone()
        .oneshot(get("/api/items?type=weapon&grade=legendary"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["name"], "천둥의 검");

    let response = app
        .clone()
        .oneshot(get("/api/items?type=weapon&grade=common"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], 0);
}

#[tokio::test]
async fn skills_fallback_listing_is_ordered_and_filterable() {
    let app = app();

    let response = app.clone().oneshot(get("/api/skills")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], 8);
    let items = body["data"]["items"].as_array().unwrap();
    let levels: Vec<f64> = items.iter().map(|i| i["level"].as_f64().unwrap()).collect();
    let mut sorted = levels.clone();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
    assert_eq!(levels, sorted, "fallback listing is level-descending");

    let response = app
        .clone()
        .oneshot(get("/api/skills?class=%EA%B2%80%EC%84%B1")) // 검성
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["name"], "강철의 일격");

    let response = app
        .clone()
        .oneshot(get("/api/skills?usageType=%ED%8C%A8%EC%8B%9C%EB%B8%8C")) // 패시브
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["usageType"], "패시브");
}

#[tokio::test]
async fn skill_detail_serves_fixtures_without_a_store() {
    let app = app();

    let response = app.clone().oneshot(get("/api/skills/5")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "화염 폭풍");
    assert_eq!(body["data"]["castTime"], 2.5);

    let response = app.clone().oneshot(get("/api/skills/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "스킬을 찾을 수 없습니다.");
}

#[tokio::test]
async fn skill_writes_require_the_store() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/skills", valid_skill_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "데이터베이스가 설정되지 않았습니다");

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/skills/5", valid_skill_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/skills/5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn skill_validation_runs_before_the_store_check() {
    let mut payload = valid_skill_payload();
    payload.as_object_mut().unwrap().remove("level");

    let response = app()
        .oneshot(json_request("POST", "/api/skills", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "level 값은 필수입니다.");
}

#[tokio::test]
async fn search_rejects_blank_queries() {
    let app = app();

    let response = app.clone().oneshot(get("/api/search?q=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.clone().oneshot(get("/api/search?q=%20%20")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "검색어를 입력해주세요");
}

#[tokio::test]
async fn search_unions_matches_across_kinds() {
    // "마" matches sorcerer-class characters and magic items.
    let response = app()
        .oneshot(get("/api/search?q=%EB%A7%88&type=all"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert!(items.iter().any(|i| i["type"] == "character"));
    assert!(items.iter().any(|i| i["type"] == "item"));
    for item in items {
        assert!(item["data"].is_object(), "original record is attached");
    }
}

#[tokio::test]
async fn search_scopes_and_paginates() {
    let app = app();

    // Every guide title contains "가이드".
    let response = app
        .clone()
        .oneshot(get("/api/search?q=%EA%B0%80%EC%9D%B4%EB%93%9C&type=guide&pageSize=2"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], 5);
    assert_eq!(body["data"]["totalPages"], 3);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);

    let response = app
        .clone()
        .oneshot(get("/api/search?q=%EA%B2%80&type=character")) // 검
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], 0);
}

#[tokio::test]
async fn search_finds_the_thunder_sword() {
    let response = app()
        .oneshot(get("/api/search?q=%EA%B2%80")) // 검, default scope is all
        .await
        .unwrap();
    let body = body_json(response).await;
    let items = body["data"]["items"].as_array().unwrap();
    assert!(items.iter().any(|i| i["title"] == "천둥의 검"));
}
