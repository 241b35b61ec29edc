use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::models::EnrichedRecommendation;

use super::AppState;

// Request/Response types

/// Body of `POST /recommend`
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub movie: MovieQuery,
}

/// The queried title, either a plain string or the `{ "value": … }` object a
/// typeahead select widget submits.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MovieQuery {
    Title(String),
    Selection { value: String },
}

impl MovieQuery {
    pub fn as_str(&self) -> &str {
        match self {
            MovieQuery::Title(title) => title,
            MovieQuery::Selection { value } => value,
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Top-5 recommendations for a movie title, with posters
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<Vec<EnrichedRecommendation>>> {
    let recommendations = state
        .queries
        .recommend_with_posters(request.movie.as_str())
        .await?;
    Ok(Json(recommendations))
}

/// All catalog titles, in catalog order
pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.queries.list_titles())
}
