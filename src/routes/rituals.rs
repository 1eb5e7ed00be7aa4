//! Ritual endpoints under `/api/rituals`.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::{Ritual, RitualEntry};
use crate::rituals::{self, PracticeGuide, RitualFilter};
use crate::server::{flag, non_blank, parse_number, AppError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/rituals", get(list_rituals))
        .route("/api/rituals/traditions", get(traditions))
        .route("/api/rituals/categories", get(categories))
        .route("/api/rituals/beginner", get(beginner))
        .route("/api/rituals/daily", get(daily))
        .route("/api/rituals/search", get(search))
        .route("/api/rituals/practice-guide", get(practice_guide))
        .route("/api/rituals/name/{name}", get(ritual_by_name))
        .route("/api/rituals/by-planet/{planet}", get(by_planet))
        .route("/api/rituals/by-element/{element}", get(by_element))
        .route("/api/rituals/{id}", get(ritual_by_id))
}

#[derive(Debug, Deserialize)]
struct ListParams {
    tradition: Option<String>,
    category: Option<String>,
    difficulty: Option<String>,
    instructions: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

async fn list_rituals(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, AppError> {
    let filter = RitualFilter {
        tradition: non_blank(params.tradition),
        category: non_blank(params.category),
        difficulty: non_blank(params.difficulty).map(|v| v.parse()).transpose()?,
    };
    let include_instructions = flag(params.instructions.as_deref());

    let mut conn = state.acquire().await?;
    let rituals: Vec<RitualEntry> = rituals::list_rituals(&mut conn, &filter)
        .await?
        .into_iter()
        .map(|r| RitualEntry::new(r, include_instructions))
        .collect();
    Ok(Json(json!({ "count": rituals.len(), "rituals": rituals })))
}

async fn ritual_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ritual>, AppError> {
    let id = parse_number(&id, "Ritual id")?;
    let mut conn = state.acquire().await?;
    Ok(Json(rituals::get_ritual(&mut conn, id).await?))
}

async fn ritual_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Ritual>, AppError> {
    let mut conn = state.acquire().await?;
    Ok(Json(rituals::get_ritual_by_name(&mut conn, &name).await?))
}

async fn traditions(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut conn = state.acquire().await?;
    let traditions = rituals::traditions(&mut conn).await?;
    Ok(Json(json!({ "count": traditions.len(), "traditions": traditions })))
}

async fn categories(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut conn = state.acquire().await?;
    let categories = rituals::categories(&mut conn).await?;
    Ok(Json(json!({ "count": categories.len(), "categories": categories })))
}

async fn beginner(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut conn = state.acquire().await?;
    let rituals = rituals::beginner_rituals(&mut conn).await?;
    Ok(Json(json!({
        "count": rituals.len(),
        "message": "Beginner-friendly rituals safe for daily practice",
        "rituals": rituals,
    })))
}

async fn daily(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut conn = state.acquire().await?;
    let rituals = rituals::daily_rituals(&mut conn).await?;
    Ok(Json(json!({
        "count": rituals.len(),
        "message": "Rituals suitable for daily practice (under 25 minutes)",
        "suggestion": "Start with LBRP, then add Middle Pillar as you progress",
        "rituals": rituals,
    })))
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, AppError> {
    let query = params.q.unwrap_or_default();
    let mut conn = state.acquire().await?;
    let rituals = rituals::search_rituals(&mut conn, &query).await?;
    Ok(Json(json!({
        "query": query.trim().to_lowercase(),
        "count": rituals.len(),
        "rituals": rituals,
    })))
}

/// Shared body for the focus lookups: an empty match is still a 200.
fn focus_listing(key: &str, value: &str, rituals: Vec<Ritual>) -> Value {
    if rituals.is_empty() {
        json!({
            key: value,
            "count": 0,
            "message": format!("No rituals specifically focused on {}", value),
            "rituals": [],
        })
    } else {
        json!({
            key: value,
            "count": rituals.len(),
            "rituals": rituals,
        })
    }
}

async fn by_planet(
    State(state): State<AppState>,
    Path(planet): Path<String>,
) -> Result<Json<Value>, AppError> {
    let mut conn = state.acquire().await?;
    let rituals = rituals::rituals_by_planet(&mut conn, &planet).await?;
    Ok(Json(focus_listing("planet", &planet, rituals)))
}

async fn by_element(
    State(state): State<AppState>,
    Path(element): Path<String>,
) -> Result<Json<Value>, AppError> {
    let mut conn = state.acquire().await?;
    let rituals = rituals::rituals_by_element(&mut conn, &element).await?;
    Ok(Json(focus_listing("element", &element, rituals)))
}

async fn practice_guide(State(state): State<AppState>) -> Result<Json<PracticeGuide>, AppError> {
    let mut conn = state.acquire().await?;
    Ok(Json(rituals::practice_guide(&mut conn).await?))
}
