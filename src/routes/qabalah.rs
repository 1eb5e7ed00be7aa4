//! Tree of Life endpoints under `/api/qabalah`.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::models::PathView;
use crate::qabalah::{self, PathWithCard, SephirahDetail, TreeOfLife};
use crate::server::{parse_number, AppError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/qabalah/sephiroth", get(list_sephiroth))
        .route("/api/qabalah/sephiroth/name/{name}", get(sephirah_by_name))
        .route("/api/qabalah/sephiroth/{number}", get(sephirah_by_number))
        .route("/api/qabalah/paths", get(list_paths))
        .route("/api/qabalah/paths/{number}", get(path_by_number))
        .route("/api/qabalah/paths/{number}/card", get(path_with_card))
        .route("/api/qabalah/tree", get(tree))
}

async fn list_sephiroth(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut conn = state.acquire().await?;
    let sephiroth = qabalah::list_sephiroth(&mut conn).await?;
    Ok(Json(json!({ "count": sephiroth.len(), "sephiroth": sephiroth })))
}

async fn sephirah_by_number(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<SephirahDetail>, AppError> {
    let number = parse_number(&number, "Sephirah number")?;
    let mut conn = state.acquire().await?;
    Ok(Json(qabalah::get_sephirah(&mut conn, number).await?))
}

async fn sephirah_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SephirahDetail>, AppError> {
    let mut conn = state.acquire().await?;
    Ok(Json(qabalah::get_sephirah_by_name(&mut conn, &name).await?))
}

async fn list_paths(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut conn = state.acquire().await?;
    let paths = qabalah::list_paths(&mut conn).await?;
    Ok(Json(json!({ "count": paths.len(), "paths": paths })))
}

async fn path_by_number(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<PathView>, AppError> {
    let number = parse_number(&number, "Path number")?;
    let mut conn = state.acquire().await?;
    Ok(Json(qabalah::get_path(&mut conn, number).await?))
}

async fn path_with_card(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<PathWithCard>, AppError> {
    let number = parse_number(&number, "Path number")?;
    let mut conn = state.acquire().await?;
    Ok(Json(qabalah::get_path_with_card(&mut conn, number).await?))
}

async fn tree(State(state): State<AppState>) -> Result<Json<TreeOfLife>, AppError> {
    let mut conn = state.acquire().await?;
    Ok(Json(qabalah::tree(&mut conn).await?))
}
