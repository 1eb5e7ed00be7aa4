//! Tarot endpoints: `/cards`, `/systems`.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::cards::{self, CardFilter, CardSystemView, DailyCard};
use crate::correspond::{self, Correspondences};
use crate::models::{Card, TarotSystem};
use crate::server::{flag, non_blank, parse_number, AppError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/systems", get(list_systems))
        .route("/cards", get(list_cards))
        .route("/cards/random", get(random_card))
        .route("/cards/daily", get(daily_card))
        .route("/cards/search", get(search_cards))
        .route("/cards/name/{name}", get(card_by_name))
        .route("/cards/{number}", get(card_by_number))
        .route("/cards/{number}/correspondences", get(card_correspondences))
        .route("/cards/{number}/system/{system}", get(card_system))
}

#[derive(Debug, Deserialize)]
struct ListParams {
    arcana: Option<String>,
    suit: Option<String>,
    element: Option<String>,
    systems: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SystemsParam {
    systems: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
    systems: Option<String>,
}

#[derive(Serialize)]
struct SystemEntry {
    name: String,
    card_count: i64,
    full_name: String,
}

async fn list_systems(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut conn = state.acquire().await?;
    let systems: Vec<SystemEntry> = cards::list_systems(&mut conn)
        .await?
        .into_iter()
        .map(|row| {
            let full_name = row
                .name
                .parse::<TarotSystem>()
                .map(|s| s.full_name().to_string())
                .unwrap_or_else(|_| row.name.clone());
            SystemEntry {
                name: row.name,
                card_count: row.count,
                full_name,
            }
        })
        .collect();
    Ok(Json(json!({ "systems": systems })))
}

async fn list_cards(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, AppError> {
    let filter = CardFilter {
        arcana: non_blank(params.arcana).map(|v| v.parse()).transpose()?,
        suit: non_blank(params.suit).map(|v| v.parse()).transpose()?,
        element: non_blank(params.element).map(|v| v.parse()).transpose()?,
    };
    let with_systems = flag(params.systems.as_deref());

    let mut conn = state.acquire().await?;
    let cards = cards::list_cards(&mut conn, &filter, with_systems).await?;
    Ok(Json(json!({ "count": cards.len(), "cards": cards })))
}

async fn card_by_number(
    State(state): State<AppState>,
    Path(number): Path<String>,
    Query(params): Query<SystemsParam>,
) -> Result<Json<Card>, AppError> {
    let number = parse_number(&number, "Card number")?;
    let mut conn = state.acquire().await?;
    let card = cards::get_card(&mut conn, number, flag(params.systems.as_deref())).await?;
    Ok(Json(card))
}

async fn card_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<SystemsParam>,
) -> Result<Json<Card>, AppError> {
    let mut conn = state.acquire().await?;
    let card = cards::get_card_by_name(&mut conn, &name, flag(params.systems.as_deref())).await?;
    Ok(Json(card))
}

async fn random_card(
    State(state): State<AppState>,
    Query(params): Query<SystemsParam>,
) -> Result<Json<Card>, AppError> {
    let mut conn = state.acquire().await?;
    let card = cards::random_card(&mut conn, flag(params.systems.as_deref())).await?;
    Ok(Json(card))
}

async fn daily_card(State(state): State<AppState>) -> Result<Json<DailyCard>, AppError> {
    let today = chrono::Utc::now().date_naive();
    let mut conn = state.acquire().await?;
    Ok(Json(cards::daily_card(&mut conn, today).await?))
}

async fn search_cards(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, AppError> {
    let query = params.q.unwrap_or_default();
    let mut conn = state.acquire().await?;
    let results = cards::search_cards(&mut conn, &query, flag(params.systems.as_deref())).await?;
    Ok(Json(json!({
        "query": query.trim().to_lowercase(),
        "count": results.len(),
        "results": results,
    })))
}

async fn card_correspondences(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<Correspondences>, AppError> {
    let number = parse_number(&number, "Card number")?;
    let mut conn = state.acquire().await?;
    Ok(Json(correspond::resolve(&mut conn, number).await?))
}

async fn card_system(
    State(state): State<AppState>,
    Path((number, system)): Path<(String, String)>,
) -> Result<Json<CardSystemView>, AppError> {
    let number = parse_number(&number, "Card number")?;
    let system: TarotSystem = system.parse()?;
    let mut conn = state.acquire().await?;
    Ok(Json(cards::system_description(&mut conn, number, system).await?))
}
