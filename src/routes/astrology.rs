//! Astrology endpoints under `/api/astrology`.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::astrology::{self, AstrologySummary, PlanetDetail, PlanetaryHours, SignDetail, SignFilter};
use crate::server::{non_blank, AppError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/astrology/planets", get(list_planets))
        .route("/api/astrology/planets/{name}", get(planet_by_name))
        .route("/api/astrology/signs", get(list_signs))
        .route("/api/astrology/signs/{name}", get(sign_by_name))
        .route("/api/astrology/elements", get(elements))
        .route("/api/astrology/modalities", get(modalities))
        .route("/api/astrology/planetary-hours", get(planetary_hours))
        .route("/api/astrology/correspondences", get(correspondences))
}

#[derive(Debug, Deserialize)]
struct SignParams {
    element: Option<String>,
    modality: Option<String>,
}

async fn list_planets(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut conn = state.acquire().await?;
    let planets = astrology::list_planets(&mut conn).await?;
    Ok(Json(json!({ "count": planets.len(), "planets": planets })))
}

async fn planet_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PlanetDetail>, AppError> {
    let mut conn = state.acquire().await?;
    Ok(Json(astrology::get_planet(&mut conn, &name).await?))
}

async fn list_signs(
    State(state): State<AppState>,
    Query(params): Query<SignParams>,
) -> Result<Json<Value>, AppError> {
    let filter = SignFilter {
        element: non_blank(params.element).map(|v| v.parse()).transpose()?,
        modality: non_blank(params.modality).map(|v| v.parse()).transpose()?,
    };
    let mut conn = state.acquire().await?;
    let signs = astrology::list_signs(&mut conn, &filter).await?;
    Ok(Json(json!({ "count": signs.len(), "signs": signs })))
}

async fn sign_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SignDetail>, AppError> {
    let mut conn = state.acquire().await?;
    Ok(Json(astrology::get_sign(&mut conn, &name).await?))
}

async fn elements(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut conn = state.acquire().await?;
    let elements = astrology::elements(&mut conn).await?;
    Ok(Json(json!({ "count": elements.len(), "elements": elements })))
}

async fn modalities(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut conn = state.acquire().await?;
    let modalities = astrology::modalities(&mut conn).await?;
    Ok(Json(json!({ "count": modalities.len(), "modalities": modalities })))
}

async fn planetary_hours(State(state): State<AppState>) -> Result<Json<PlanetaryHours>, AppError> {
    let mut conn = state.acquire().await?;
    Ok(Json(astrology::planetary_hours(&mut conn).await?))
}

async fn correspondences(
    State(state): State<AppState>,
) -> Result<Json<AstrologySummary>, AppError> {
    let mut conn = state.acquire().await?;
    Ok(Json(astrology::summary(&mut conn).await?))
}
