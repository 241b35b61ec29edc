use std::collections::HashMap;
use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;

use cinematch_api::api::{create_router, AppState};
use cinematch_api::catalog::{Catalog, SimilarityMatrix};
use cinematch_api::models::CatalogEntry;
use cinematch_api::services::enrichment::PosterProvider;

/// Poster fixture: answers from a fixed table, `None` for any id it does not
/// know, which is exactly what a failed metadata lookup degrades to.
struct StubPosterProvider {
    posters: HashMap<u64, String>,
}

#[async_trait::async_trait]
impl PosterProvider for StubPosterProvider {
    async fn fetch_poster(&self, movie_id: u64) -> Option<String> {
        self.posters.get(&movie_id).cloned()
    }
}

fn create_test_server() -> TestServer {
    let catalog = Catalog::new(vec![
        CatalogEntry {
            id: 1,
            title: "Avatar".to_string(),
        },
        CatalogEntry {
            id: 2,
            title: "Inception".to_string(),
        },
        CatalogEntry {
            id: 3,
            title: "Up".to_string(),
        },
    ]);

    let matrix = SimilarityMatrix::new(vec![
        vec![1.0, 0.8, 0.3],
        vec![0.8, 1.0, 0.5],
        vec![0.3, 0.5, 1.0],
    ])
    .unwrap();

    // Up (id 3) has no poster on purpose.
    let posters = StubPosterProvider {
        posters: HashMap::from([
            (1, "https://img.test/avatar.jpg".to_string()),
            (2, "https://img.test/inception.jpg".to_string()),
        ]),
    };

    let state = AppState::new(catalog, matrix, Arc::new(posters));
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_recommend_returns_ranked_titles_with_posters() {
    let server = create_test_server();

    let response = server
        .post("/recommend")
        .json(&json!({ "movie": "Avatar" }))
        .await;

    response.assert_status_ok();
    let recommendations: Vec<serde_json::Value> = response.json();

    // Three-movie catalog: two candidates remain after the query movie.
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0]["title"], "Inception");
    assert_eq!(
        recommendations[0]["poster"],
        "https://img.test/inception.jpg"
    );
    assert_eq!(recommendations[1]["title"], "Up");
}

#[tokio::test]
async fn test_recommend_missing_poster_serializes_as_null() {
    let server = create_test_server();

    let response = server
        .post("/recommend")
        .json(&json!({ "movie": "Avatar" }))
        .await;

    response.assert_status_ok();
    let recommendations: Vec<serde_json::Value> = response.json();

    // Up's lookup came back empty; the item is still present, poster null,
    // and its neighbor keeps its poster.
    assert_eq!(recommendations[1]["title"], "Up");
    assert!(recommendations[1]["poster"].is_null());
    assert!(!recommendations[0]["poster"].is_null());
}

#[tokio::test]
async fn test_recommend_accepts_typeahead_payload() {
    let server = create_test_server();

    let plain = server
        .post("/recommend")
        .json(&json!({ "movie": "Avatar" }))
        .await;
    let widget = server
        .post("/recommend")
        .json(&json!({ "movie": { "value": "Avatar", "label": "Avatar" } }))
        .await;

    plain.assert_status_ok();
    widget.assert_status_ok();

    let plain_body: serde_json::Value = plain.json();
    let widget_body: serde_json::Value = widget.json();
    assert_eq!(plain_body, widget_body);
}

#[tokio::test]
async fn test_recommend_query_is_case_and_whitespace_insensitive() {
    let server = create_test_server();

    let spaced = server
        .post("/recommend")
        .json(&json!({ "movie": " INCEPTION " }))
        .await;
    let plain = server
        .post("/recommend")
        .json(&json!({ "movie": "inception" }))
        .await;

    spaced.assert_status_ok();
    plain.assert_status_ok();

    let spaced_body: serde_json::Value = spaced.json();
    let plain_body: serde_json::Value = plain.json();
    assert_eq!(spaced_body, plain_body);
}

#[tokio::test]
async fn test_recommend_unknown_movie_is_not_found() {
    let server = create_test_server();

    let response = server
        .post("/recommend")
        .json(&json!({ "movie": "Unknown Movie" }))
        .await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Unknown Movie"));
}

#[tokio::test]
async fn test_movies_lists_catalog_in_order() {
    let server = create_test_server();

    let response = server.get("/movies").await;
    response.assert_status_ok();

    let titles: Vec<String> = response.json();
    assert_eq!(titles, vec!["Avatar", "Inception", "Up"]);
}
