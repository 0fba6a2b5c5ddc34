//! HTTP surface tests, driving the router directly without binding a socket.
#![cfg(feature = "server")]

mod common;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::*;
use http_body_util::BodyExt;
use kondate::prelude::*;
use kondate::server::build_router;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    build_router(Arc::new(RecipeService::new(
        spaghetti_catalog(),
        ServiceConfig::default(),
    )))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_search(body: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method("POST")
            .uri("/search")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn test_search_ok() {
    let (status, body) = post_search(json!({
        "ingredients": ["Pasta"],
        "tags": ["italian"],
        "sort_by": "total_time",
        "data_structure": "trie"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_matches"], 1);
    let recipe = &body["recipes"][0];
    assert_eq!(recipe["name"], "Spaghetti");
    assert_eq!(recipe["minutes"], 30);
    assert_eq!(recipe["n_steps"], 2);
    assert_eq!(recipe["matched_ingredients"], json!(["pasta"]));
    assert_eq!(recipe["missing_ingredients"], json!(["tomato"]));
    assert_eq!(recipe["matched_tags"], json!(["italian"]));
    assert!(recipe.get("id").is_none());
}

#[tokio::test]
async fn test_search_missing_or_empty_ingredients() {
    let (status, body) = post_search(json!({ "tags": ["italian"] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Ingredients are required");

    let (status, body) = post_search(json!({ "ingredients": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No ingredients provided");
}

#[tokio::test]
async fn test_search_invalid_tags() {
    let (status, body) = post_search(json!({
        "ingredients": ["pasta"],
        "tags": ["unicorn", "italian"]
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["invalid_tags"], json!(["unicorn"]));
    assert_eq!(body["error"], "Invalid tags provided: unicorn");
}

#[tokio::test]
async fn test_search_invalid_sort_and_backend() {
    let (status, _) = post_search(json!({ "ingredients": ["pasta"], "sort_by": "rating" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
        post_search(json!({ "ingredients": ["pasta"], "data_structure": "btree" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_no_matches() {
    let (status, body) = post_search(json!({
        "ingredients": ["pasta"],
        "tags": ["mexican"]
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No recipes found for the given ingredients.");
}

#[tokio::test]
async fn test_recipe_lookup() {
    for backend in ["trie", "hashmap"] {
        let (status, body) = get(&format!("/recipe/{}/spaghetti", backend)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Spaghetti");
        assert_eq!(body["ingredients"], json!(["Pasta", "Tomato"]));
        assert_eq!(body["n_ingredients"], 2);
    }
}

#[tokio::test]
async fn test_recipe_lookup_not_found() {
    let (status, body) = get("/recipe/trie/lasagna").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Recipe not found");
}

#[tokio::test]
async fn test_recipe_lookup_bad_or_missing_backend() {
    let (status, _) = get("/recipe/btree/spaghetti").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get("/recipe/spaghetti").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid data structure: select 'trie' or 'hashmap'"
    );
}

#[tokio::test]
async fn test_search_null_tags_means_no_filter() {
    let (status, body) = post_search(json!({ "ingredients": ["pasta"], "tags": null })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipes"][0]["name"], "Spaghetti");
    assert_eq!(body["recipes"][0]["matched_tags"], json!([]));
}

#[tokio::test]
async fn test_search_unreadable_body_is_bad_request() {
    let (status, body) = send(
        Request::builder()
            .method("POST")
            .uri("/search")
            .body(Body::from(json!({ "ingredients": ["pasta"] }).to_string()))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|message| message.starts_with("Invalid request body"))
    );

    let (status, body) = send(
        Request::builder()
            .method("POST")
            .uri("/search")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{ "ingredients": "pasta" }"#))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
